use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SpeakerGroup;
use crate::sentiment::{Probabilities, SentimentLabel};

/// Turn-taking counts for one conference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnStats {
    pub date: NaiveDate,
    pub title: String,
    pub url: String,
    pub total_turns: usize,
    pub president_turns: usize,
    pub journalist_turns: usize,
    pub ratio_president_journalist: f64,
}

/// Total words spoken in one conference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceLength {
    pub date: NaiveDate,
    pub title: String,
    pub url: String,
    pub length_words: usize,
}

/// Conference length with calendar-heatmap coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLength {
    pub date: NaiveDate,
    pub title: String,
    pub url: String,
    /// ISO year
    pub year: i32,
    /// ISO week number
    pub week: u32,
    /// "YYYY-WW", sortable
    pub yearweek: String,
    pub day_of_week: String,
    /// Monday = 0 .. Sunday = 6
    pub day_idx: u32,
    pub words: usize,
    /// 1-based position among the same day's conferences
    pub conf_rank: usize,
    /// Number of conferences on the same day
    pub n_conf: usize,
    /// Left edge of this conference's slice inside the day cell
    pub x0: f64,
    /// Right edge of this conference's slice inside the day cell
    pub x1: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerCount {
    pub speaker: String,
    pub n_speeches: usize,
    pub pct_of_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerWords {
    pub speaker: String,
    pub total_words: usize,
    pub pct_of_total: f64,
}

/// Average words per conference day for one weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayAverage {
    pub weekday: String,
    pub avg_words: f64,
    pub n_conferences: usize,
}

/// Weekly share of cleaned words that mention a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicShare {
    /// "YYYY-Www"
    pub yearweek: String,
    pub topic: String,
    pub share: f64,
    pub share_smooth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateMentions {
    pub state: String,
    pub mentions: usize,
}

/// Sentiment of a single intervention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRow {
    pub date: Option<NaiveDate>,
    pub title: String,
    pub url: String,
    /// Canonical role (None when the speaker was dropped)
    pub speaker: Option<String>,
    pub group: Option<SpeakerGroup>,
    pub label: SentimentLabel,
    pub score: i8,
    pub probabilities: Probabilities,
}

/// Mean sentiment score per conference and speaker group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub date: NaiveDate,
    pub title: String,
    pub url: String,
    pub group: SpeakerGroup,
    pub mean_score: f64,
    pub n_interventions: usize,
}
