use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::models::{group_by_conference, ConferenceLength, DailyLength, Intervention, WeekdayAverage};

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Total words per conference, sorted by (date, title).
/// Undated conferences are skipped.
pub fn conference_lengths(interventions: &[Intervention]) -> Vec<ConferenceLength> {
    group_by_conference(interventions)
        .into_iter()
        .filter_map(|(key, rows)| {
            let Some(date) = key.date else {
                debug!("Skipping undated conference {:?}", key.title);
                return None;
            };
            Some(ConferenceLength {
                date,
                title: key.title,
                url: key.url,
                length_words: rows.iter().map(|r| r.word_count()).sum(),
            })
        })
        .collect()
}

/// Conference lengths laid out for a week-by-weekday heatmap.
///
/// Same-day conferences split the day cell into equal horizontal slices
/// `[day_idx + (rank-1)/n, day_idx + rank/n)`.
pub fn daily_lengths(interventions: &[Intervention]) -> Vec<DailyLength> {
    let lengths = conference_lengths(interventions);

    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for length in &lengths {
        *per_day.entry(length.date).or_default() += 1;
    }

    let mut rank_in_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    lengths
        .into_iter()
        .map(|length| {
            let rank = rank_in_day.entry(length.date).or_default();
            *rank += 1;
            let conf_rank = *rank;
            let n_conf = per_day[&length.date];

            let iso = length.date.iso_week();
            let day_idx = length.date.weekday().num_days_from_monday();
            DailyLength {
                year: iso.year(),
                week: iso.week(),
                yearweek: format!("{}-{:02}", iso.year(), iso.week()),
                day_of_week: weekday_name(length.date.weekday()).to_string(),
                day_idx,
                words: length.length_words,
                conf_rank,
                n_conf,
                x0: day_idx as f64 + (conf_rank - 1) as f64 / n_conf as f64,
                x1: day_idx as f64 + conf_rank as f64 / n_conf as f64,
                date: length.date,
                title: length.title,
                url: length.url,
            }
        })
        .collect()
}

/// Average words per conference day, by weekday (Monday first).
/// All conferences on the same date count as one day.
pub fn weekday_averages(interventions: &[Intervention]) -> Vec<WeekdayAverage> {
    let mut words_per_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for intervention in interventions {
        if let Some(date) = intervention.date {
            *words_per_date.entry(date).or_default() += intervention.word_count();
        }
    }

    // weekday index -> (name, total words, days)
    let mut by_weekday: BTreeMap<u32, (&'static str, usize, usize)> = BTreeMap::new();
    for (date, words) in words_per_date {
        let weekday = date.weekday();
        let entry = by_weekday
            .entry(weekday.num_days_from_monday())
            .or_insert((weekday_name(weekday), 0, 0));
        entry.1 += words;
        entry.2 += 1;
    }

    by_weekday
        .into_values()
        .map(|(name, words, days)| WeekdayAverage {
            weekday: name.to_string(),
            avg_words: words as f64 / days as f64,
            n_conferences: days,
        })
        .collect()
}
