pub mod client;

pub use client::*;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Class probabilities reported by the classifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    #[serde(rename = "POS")]
    pub positive: f64,
    #[serde(rename = "NEU")]
    pub neutral: f64,
    #[serde(rename = "NEG")]
    pub negative: f64,
}

impl Probabilities {
    /// Certain-neutral distribution, used for empty text
    pub fn neutral() -> Self {
        Self {
            positive: 0.0,
            neutral: 1.0,
            negative: 0.0,
        }
    }
}

/// Raw classifier output: a POS/NEU/NEG code plus probabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(alias = "output")]
    pub label: String,
    #[serde(alias = "probas")]
    pub probabilities: Probabilities,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Map a classifier code (POS/NEU/NEG) to a label
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_uppercase().as_str() {
            "POS" => Ok(SentimentLabel::Positive),
            "NEU" => Ok(SentimentLabel::Neutral),
            "NEG" => Ok(SentimentLabel::Negative),
            _ => Err(AnalysisError::UnknownSentimentLabel {
                label: code.to_string(),
            }),
        }
    }

    pub fn score(&self) -> i8 {
        match self {
            SentimentLabel::Positive => 1,
            SentimentLabel::Neutral => 0,
            SentimentLabel::Negative => -1,
        }
    }
}

/// External text-classification capability
pub trait SentimentAnalyzer {
    fn predict(&self, text: &str) -> Result<Prediction>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_code() {
        assert_eq!(SentimentLabel::from_code("POS").unwrap(), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_code("neu").unwrap(), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_code("NEG").unwrap().score(), -1);
        assert!(SentimentLabel::from_code("MIXED").is_err());
    }

    #[test]
    fn test_parse_prediction_aliases() {
        let json = r#"{"output": "POS", "probas": {"POS": 0.8, "NEU": 0.15, "NEG": 0.05}}"#;
        let prediction: Prediction = serde_json::from_str(json).unwrap();
        assert_eq!(prediction.label, "POS");
        assert_eq!(prediction.probabilities.positive, 0.8);
        assert_eq!(prediction.probabilities.negative, 0.05);
    }
}
