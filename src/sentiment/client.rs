use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::debug;

use super::{Prediction, SentimentAnalyzer};
use crate::error::{AnalysisError, Result};

/// Configuration for the HTTP sentiment service
#[derive(Debug, Clone)]
pub struct SentimentConfig {
    /// Classification endpoint (from SENTIMENT_API_URL)
    pub endpoint: String,
    /// Optional bearer token (from SENTIMENT_API_KEY)
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SentimentConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var("SENTIMENT_API_URL").map_err(|_| AnalysisError::AnalyzerUnavailable {
            message: "SENTIMENT_API_URL environment variable not set".to_string(),
        })?;
        let timeout_secs = std::env::var("SENTIMENT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            endpoint,
            api_key: std::env::var("SENTIMENT_API_KEY").ok(),
            timeout_secs,
        })
    }

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

/// Sentiment classifier served over HTTP.
///
/// Sends `{"text": ...}` and expects `{"label": "POS", "probabilities": {...}}`
/// (pysentimiento-style `output`/`probas` keys are accepted too).
pub struct HttpSentimentClient {
    client: Client,
    config: SentimentConfig,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

impl HttpSentimentClient {
    pub fn new(config: SentimentConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalysisError::AnalyzerUnavailable {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client, config })
    }
}

impl SentimentAnalyzer for HttpSentimentClient {
    fn predict(&self, text: &str) -> Result<Prediction> {
        let mut request = self.client.post(&self.config.endpoint).json(&PredictRequest { text });
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().map_err(|e| AnalysisError::AnalyzerUnavailable {
            message: format!("Failed to reach {}: {}", self.config.endpoint, e),
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(AnalysisError::AnalyzerUnavailable {
                message: format!("Sentiment service error: {} - {}", status, body),
            });
        }

        let prediction: Prediction = response.json().map_err(|e| AnalysisError::AnalyzerUnavailable {
            message: format!("Failed to parse sentiment response: {}", e),
        })?;
        debug!("Classified {} chars as {}", text.len(), prediction.label);
        Ok(prediction)
    }
}
