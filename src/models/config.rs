use serde::{Deserialize, Serialize};

use super::DEFAULT_HEAD_OF_STATE;

/// A named topic and the keywords that count as a mention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Topic {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Configuration for a full analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Canonical role assigned to labels starting with "PRESIDENTA"
    pub head_of_state: String,
    /// Number of rows kept in the speaker rankings
    pub top_n: usize,
    /// Trailing window (in weeks) for smoothed topic shares
    pub smoothing_periods: usize,
    /// Topic dictionaries for weekly topic shares
    pub topics: Vec<Topic>,
    /// Whether to run the sentiment stage
    pub include_sentiment: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            head_of_state: DEFAULT_HEAD_OF_STATE.to_string(),
            top_n: 20,
            smoothing_periods: 3,
            topics: Vec::new(),
            include_sentiment: false,
        }
    }
}
