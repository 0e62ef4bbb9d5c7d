use std::collections::BTreeMap;

use tracing::info;

use crate::error::{AnalysisError, Result};
use crate::models::{ConferenceKey, Intervention, SentimentRow, SentimentSummary, SpeakerGroup};
use crate::sentiment::{Probabilities, SentimentAnalyzer, SentimentLabel};

/// Classify every intervention, in input order.
///
/// Empty text is Neutral with score 0 and never reaches the analyzer.
/// Without an analyzer this fails before classifying anything.
pub fn sentiment_table(
    interventions: &[Intervention],
    analyzer: Option<&dyn SentimentAnalyzer>,
) -> Result<Vec<SentimentRow>> {
    let analyzer = analyzer.ok_or_else(|| AnalysisError::AnalyzerUnavailable {
        message: "no sentiment analyzer configured".to_string(),
    })?;

    let mut rows = Vec::with_capacity(interventions.len());
    let mut classified = 0usize;

    for intervention in interventions {
        let (label, probabilities) = if intervention.text.trim().is_empty() {
            (SentimentLabel::Neutral, Probabilities::neutral())
        } else {
            let prediction = analyzer.predict(&intervention.text)?;
            classified += 1;
            (SentimentLabel::from_code(&prediction.label)?, prediction.probabilities)
        };

        rows.push(SentimentRow {
            date: intervention.date,
            title: intervention.title.clone(),
            url: intervention.url.clone(),
            speaker: intervention.role.role().map(str::to_string),
            group: intervention.role.group(),
            label,
            score: label.score(),
            probabilities,
        });
    }

    info!(
        "Sentiment: {} interventions, {} sent to the analyzer",
        rows.len(),
        classified
    );
    Ok(rows)
}

/// Mean sentiment score per dated conference and speaker group.
/// Dropped speakers are excluded.
pub fn sentiment_summary(rows: &[SentimentRow]) -> Vec<SentimentSummary> {
    let mut groups: BTreeMap<(ConferenceKey, SpeakerGroup), (i64, usize)> = BTreeMap::new();
    for row in rows {
        let (Some(date), Some(group)) = (row.date, row.group) else {
            continue;
        };
        let key = ConferenceKey {
            date: Some(date),
            title: row.title.clone(),
            url: row.url.clone(),
        };
        let entry = groups.entry((key, group)).or_default();
        entry.0 += row.score as i64;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .filter_map(|((key, group), (total, n))| {
            Some(SentimentSummary {
                date: key.date?,
                title: key.title,
                url: key.url,
                group,
                mean_score: total as f64 / n as f64,
                n_interventions: n,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::NaiveDate;

    use super::*;
    use crate::normalize::SpeakerNormalizer;
    use crate::sentiment::Prediction;

    /// Labels text by keyword and counts calls
    struct KeywordAnalyzer {
        calls: Cell<usize>,
    }

    impl SentimentAnalyzer for KeywordAnalyzer {
        fn predict(&self, text: &str) -> Result<Prediction> {
            self.calls.set(self.calls.get() + 1);
            let label = if text.contains("excelente") {
                "POS"
            } else if text.contains("terrible") {
                "NEG"
            } else {
                "NEU"
            };
            Ok(Prediction {
                label: label.to_string(),
                probabilities: Probabilities {
                    positive: 0.2,
                    neutral: 0.6,
                    negative: 0.2,
                },
            })
        }
    }

    struct OfflineAnalyzer;

    impl SentimentAnalyzer for OfflineAnalyzer {
        fn predict(&self, _text: &str) -> Result<Prediction> {
            Err(AnalysisError::AnalyzerUnavailable {
                message: "connection refused".to_string(),
            })
        }
    }

    fn row(raw: &str, text: &str) -> Intervention {
        Intervention {
            date: NaiveDate::from_ymd_opt(2025, 10, 16),
            title: "t".to_string(),
            url: "u".to_string(),
            raw_speaker: Some(raw.to_string()),
            speaker: Some(raw.to_string()),
            role: SpeakerNormalizer::default().normalize(Some(raw)),
            text: text.to_string(),
        }
    }

    fn sample() -> Vec<Intervention> {
        vec![
            row("PRESIDENTA", "Una noticia excelente."),
            row("PRESIDENTA", "   "),
            row("PREGUNTA", "Algo terrible pasó."),
            row("PREGUNTA", "Una duda."),
            row("(INICIA VIDEO)", "excelente video"),
        ]
    }

    #[test]
    fn test_sentiment_table_labels_and_scores() {
        let analyzer = KeywordAnalyzer { calls: Cell::new(0) };
        let rows = sentiment_table(&sample(), Some(&analyzer)).unwrap();

        assert_eq!(rows.len(), 5);
        assert_eq!(analyzer.calls.get(), 4);

        assert_eq!(rows[0].label, SentimentLabel::Positive);
        assert_eq!(rows[0].score, 1);
        assert_eq!(rows[1].label, SentimentLabel::Neutral);
        assert_eq!(rows[1].probabilities, Probabilities::neutral());
        assert_eq!(rows[2].score, -1);
        assert_eq!(rows[2].group, Some(SpeakerGroup::Journalist));
        assert_eq!(rows[4].speaker, None);
        assert_eq!(rows[4].group, None);
    }

    #[test]
    fn test_missing_analyzer_fails_fast() {
        let err = sentiment_table(&sample(), None).unwrap_err();
        assert!(matches!(err, AnalysisError::AnalyzerUnavailable { .. }));
    }

    #[test]
    fn test_analyzer_errors_propagate() {
        let err = sentiment_table(&sample(), Some(&OfflineAnalyzer)).unwrap_err();
        assert!(matches!(err, AnalysisError::AnalyzerUnavailable { .. }));
    }

    #[test]
    fn test_sentiment_summary_by_group() {
        let analyzer = KeywordAnalyzer { calls: Cell::new(0) };
        let rows = sentiment_table(&sample(), Some(&analyzer)).unwrap();
        let summary = sentiment_summary(&rows);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].group, SpeakerGroup::Journalist);
        assert_eq!(summary[0].n_interventions, 2);
        assert_eq!(summary[0].mean_score, -0.5);
        assert_eq!(summary[1].group, SpeakerGroup::PresidentOfficial);
        assert_eq!(summary[1].mean_score, 0.5);
    }
}
