//! Error types for mananera.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    // Input contract errors
    #[error("Required column `{column}` missing from {record}")]
    MissingColumn { column: &'static str, record: String },

    #[error("Invalid topic dictionary: {message}")]
    InvalidTopics { message: String },

    // Sentiment capability errors
    #[error("Sentiment analyzer unavailable: {message}")]
    AnalyzerUnavailable { message: String },

    #[error("Sentiment analyzer returned an unknown label: {label}")]
    UnknownSentimentLabel { label: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let error = AnalysisError::MissingColumn {
            column: "date",
            record: "conference #3".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Required column `date` missing from conference #3"
        );
    }

    #[test]
    fn test_analyzer_unavailable_display() {
        let error = AnalysisError::AnalyzerUnavailable {
            message: "SENTIMENT_API_URL not set".to_string(),
        };
        assert!(error.to_string().contains("unavailable"));
        assert!(error.to_string().contains("SENTIMENT_API_URL"));
    }
}
