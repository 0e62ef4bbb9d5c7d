use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{AnalysisError, Result};
use crate::models::{Intervention, RawConference, Topic};
use crate::normalize::{forward_fill, parse_spanish_date, SpeakerNormalizer};

const CONFERENCE_KEYS: [&str; 4] = ["date", "title", "url", "transcript"];
const INTERVENTION_KEYS: [&str; 2] = ["speaker", "text"];

/// Parse a conference collection file into flattened interventions
pub fn parse_conferences_file(path: &Path, normalizer: &SpeakerNormalizer) -> anyhow::Result<Vec<Intervention>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    let interventions = parse_conferences_json(&content, normalizer)
        .with_context(|| format!("Failed to load conferences from {:?}", path))?;
    Ok(interventions)
}

/// Parse a JSON array of `{date, title, url, transcript: [{speaker, text}]}` records.
///
/// Every record must carry every key (values may be null); a missing key is a
/// caller contract violation and fails immediately.
pub fn parse_conferences_json(json: &str, normalizer: &SpeakerNormalizer) -> Result<Vec<Intervention>> {
    let records: Vec<Value> = serde_json::from_str(json)?;

    let mut conferences = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        require_keys(&record, &CONFERENCE_KEYS, || format!("conference #{}", index))?;
        if let Some(entries) = record.get("transcript").and_then(Value::as_array) {
            for (turn, entry) in entries.iter().enumerate() {
                require_keys(entry, &INTERVENTION_KEYS, || {
                    format!("conference #{} transcript entry #{}", index, turn)
                })?;
            }
        }
        let conference: RawConference = serde_json::from_value(record)?;
        conferences.push(conference);
    }

    let interventions = flatten_conferences(&conferences, normalizer);
    info!(
        "Loaded {} conferences, {} interventions",
        conferences.len(),
        interventions.len()
    );
    Ok(interventions)
}

fn require_keys<F>(record: &Value, keys: &[&'static str], describe: F) -> Result<()>
where
    F: Fn() -> String,
{
    for &key in keys {
        let present = record.as_object().is_some_and(|obj| obj.contains_key(key));
        if !present {
            return Err(AnalysisError::MissingColumn {
                column: key,
                record: describe(),
            });
        }
    }
    Ok(())
}

/// Flatten nested conferences into one row per intervention, in ingestion order.
///
/// Missing or blank speaker labels take the nearest preceding label across the
/// whole sequence; each row's normalized speaker is computed after that fill.
pub fn flatten_conferences(conferences: &[RawConference], normalizer: &SpeakerNormalizer) -> Vec<Intervention> {
    let raw_labels: Vec<Option<&str>> = conferences
        .iter()
        .flat_map(|c| c.transcript.iter().map(|t| t.speaker.as_deref()))
        .collect();
    let mut filled = forward_fill(raw_labels.iter().copied()).into_iter();

    let mut interventions = Vec::with_capacity(raw_labels.len());
    for conference in conferences {
        let date = conference.date_str().and_then(parse_spanish_date);
        if date.is_none() {
            debug!("Unparsed date {:?} for {:?}", conference.date, conference.title);
        }

        for entry in &conference.transcript {
            let speaker = filled.next().flatten();
            let role = normalizer.normalize(speaker.as_deref());
            interventions.push(Intervention {
                date,
                title: conference.title.clone(),
                url: conference.url.clone(),
                raw_speaker: entry.speaker.clone().filter(|s| !s.trim().is_empty()),
                speaker,
                role,
                text: entry.text.clone().unwrap_or_default(),
            });
        }
    }

    interventions
}

/// Load topic dictionaries from a JSON object file `{"topic": ["keyword", ...]}`
pub fn parse_topics_file(path: &Path) -> anyhow::Result<Vec<Topic>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    let topics = parse_topics_json(&content).with_context(|| format!("Failed to load topics from {:?}", path))?;
    Ok(topics)
}

/// Parse topic dictionaries; topics come back ordered by name
pub fn parse_topics_json(json: &str) -> Result<Vec<Topic>> {
    let map: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;

    map.into_iter()
        .map(|(name, keywords)| {
            if name.trim().is_empty() {
                return Err(AnalysisError::InvalidTopics {
                    message: "topic name is empty".to_string(),
                });
            }
            if keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(AnalysisError::InvalidTopics {
                    message: format!("topic {:?} has no keywords", name),
                });
            }
            Ok(Topic { name, keywords })
        })
        .collect()
}
