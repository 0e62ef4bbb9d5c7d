use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use crate::models::{Intervention, Topic, TopicShare};
use crate::normalize::{clean_text, fold_text};

/// Keyword mentions per topic plus cleaned word total, for one day
#[derive(Debug, Clone, Default)]
struct DailyTally {
    mentions: Vec<usize>,
    words: usize,
}

/// Trailing mean over at most `periods` values, fewer at the start
fn rolling_mean(values: &[f64], periods: usize) -> Vec<f64> {
    let periods = periods.max(1);
    (0..values.len())
        .map(|i| {
            let window = &values[(i + 1).saturating_sub(periods)..=i];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}

/// Weekly topic shares with trailing smoothing.
///
/// Text is cleaned (stopwords removed) and keyword substrings counted per day;
/// the daily share is mentions / cleaned words, averaged per ISO week. Days with
/// no cleaned words carry no share. Output is topic-major, weeks ascending.
pub fn topics_by_week(interventions: &[Intervention], topics: &[Topic], periods: usize) -> Vec<TopicShare> {
    if topics.is_empty() {
        return Vec::new();
    }

    let keywords: Vec<Vec<String>> = topics
        .iter()
        .map(|topic| {
            topic
                .keywords
                .iter()
                .map(|k| fold_text(k))
                .filter(|k| !k.is_empty())
                .collect()
        })
        .collect();

    let mut daily: BTreeMap<NaiveDate, DailyTally> = BTreeMap::new();
    for intervention in interventions {
        let Some(date) = intervention.date else {
            continue;
        };
        let cleaned = clean_text(&intervention.text);
        let tally = daily.entry(date).or_insert_with(|| DailyTally {
            mentions: vec![0; topics.len()],
            words: 0,
        });
        tally.words += cleaned.split_whitespace().count();
        for (i, words) in keywords.iter().enumerate() {
            tally.mentions[i] += words.iter().map(|w| cleaned.matches(w.as_str()).count()).sum::<usize>();
        }
    }

    // (iso year, iso week) -> (summed daily shares per topic, days)
    let mut weekly: BTreeMap<(i32, u32), (Vec<f64>, usize)> = BTreeMap::new();
    for (date, tally) in &daily {
        if tally.words == 0 {
            debug!("No cleaned words on {}, skipping topic shares", date);
            continue;
        }
        let iso = date.iso_week();
        let entry = weekly
            .entry((iso.year(), iso.week()))
            .or_insert_with(|| (vec![0.0; topics.len()], 0));
        for (i, mentions) in tally.mentions.iter().enumerate() {
            entry.0[i] += *mentions as f64 / tally.words as f64;
        }
        entry.1 += 1;
    }

    let labels: Vec<String> = weekly
        .keys()
        .map(|(year, week)| format!("{}-W{:02}", year, week))
        .collect();

    let mut shares = Vec::with_capacity(topics.len() * labels.len());
    for (i, topic) in topics.iter().enumerate() {
        let series: Vec<f64> = weekly.values().map(|(sums, days)| sums[i] / *days as f64).collect();
        let smooth = rolling_mean(&series, periods);
        for ((yearweek, share), share_smooth) in labels.iter().zip(series).zip(smooth) {
            shares.push(TopicShare {
                yearweek: yearweek.clone(),
                topic: topic.name.clone(),
                share,
                share_smooth,
            });
        }
    }

    info!(
        "Topic shares: {} topics over {} weeks ({} days)",
        topics.len(),
        labels.len(),
        daily.len()
    );
    shares
}
