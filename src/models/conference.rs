use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::NormalizedSpeaker;

/// One conference record as published (nested form)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConference {
    /// Free-text Spanish date, e.g. "jueves, 16 de octubre de 2025Fecha de publicación".
    /// Kept as a raw JSON value: null or non-string dates degrade to a missing date.
    pub date: serde_json::Value,
    pub title: String,
    pub url: String,
    pub transcript: Vec<RawIntervention>,
}

impl RawConference {
    /// The date field when it is a string
    pub fn date_str(&self) -> Option<&str> {
        self.date.as_str()
    }
}

/// A single `{speaker, text}` pair from a transcript
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawIntervention {
    pub speaker: Option<String>,
    pub text: Option<String>,
}

/// Identifies one press event: several conferences may share a date
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConferenceKey {
    pub date: Option<NaiveDate>,
    pub title: String,
    pub url: String,
}

/// One turn of speech, flattened from the nested input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intervention {
    /// Parsed conference date (None when the source date could not be parsed)
    pub date: Option<NaiveDate>,
    pub title: String,
    pub url: String,
    /// Speaker label exactly as published (None when missing or blank)
    pub raw_speaker: Option<String>,
    /// Speaker label after forward-filling from earlier rows
    pub speaker: Option<String>,
    /// Normalized speaker, computed once from `speaker`
    pub role: NormalizedSpeaker,
    /// Spoken text (empty when missing)
    pub text: String,
}

impl Intervention {
    pub fn key(&self) -> ConferenceKey {
        ConferenceKey {
            date: self.date,
            title: self.title.clone(),
            url: self.url.clone(),
        }
    }

    /// Number of whitespace-separated words in the text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Group interventions by conference, keeping ingestion order inside each group.
/// Keys iterate in (date, title, url) order.
pub fn group_by_conference(interventions: &[Intervention]) -> BTreeMap<ConferenceKey, Vec<&Intervention>> {
    let mut groups: BTreeMap<ConferenceKey, Vec<&Intervention>> = BTreeMap::new();
    for intervention in interventions {
        groups.entry(intervention.key()).or_default().push(intervention);
    }
    groups
}
