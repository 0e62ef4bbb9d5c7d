use tracing::info;

use crate::error::Result;
use crate::io::{AnalysisReport, ReportMetadata};
use crate::models::{group_by_conference, AnalysisConfig, Intervention};
use crate::sentiment::SentimentAnalyzer;

use super::{
    conference_lengths, daily_lengths, sentiment_summary, sentiment_table, state_mentions,
    top_speakers, top_speakers_by_words, topics_by_week, turn_taking_stats, weekday_averages,
    TurnMode,
};

/// Run every analysis stage over the flattened interventions.
///
/// The sentiment stage only runs when enabled in the config; it then requires
/// an analyzer and fails without one.
pub fn run_analysis(
    interventions: &[Intervention],
    config: &AnalysisConfig,
    analyzer: Option<&dyn SentimentAnalyzer>,
) -> Result<AnalysisReport> {
    let metadata = ReportMetadata {
        head_of_state: config.head_of_state.clone(),
        total_interventions: interventions.len(),
        total_conferences: group_by_conference(interventions).len(),
        dropped_interventions: interventions.iter().filter(|i| i.role.is_drop()).count(),
        undated_interventions: interventions.iter().filter(|i| i.date.is_none()).count(),
    };
    info!(
        "Analyzing {} interventions across {} conferences ({} dropped, {} undated)",
        metadata.total_interventions,
        metadata.total_conferences,
        metadata.dropped_interventions,
        metadata.undated_interventions
    );

    let (sentiment, sentiment_by_group) = if config.include_sentiment {
        let rows = sentiment_table(interventions, analyzer)?;
        let summary = sentiment_summary(&rows);
        (Some(rows), Some(summary))
    } else {
        (None, None)
    };

    Ok(AnalysisReport {
        metadata,
        conference_lengths: conference_lengths(interventions),
        daily_lengths: daily_lengths(interventions),
        top_speakers: top_speakers(interventions, config.top_n),
        top_speakers_by_words: top_speakers_by_words(interventions, config.top_n),
        turn_stats: turn_taking_stats(interventions, &config.head_of_state, TurnMode::All),
        turn_stats_after_first_journalist: turn_taking_stats(
            interventions,
            &config.head_of_state,
            TurnMode::AfterFirstJournalist,
        ),
        weekday_averages: weekday_averages(interventions),
        topics_by_week: topics_by_week(interventions, &config.topics, config.smoothing_periods),
        state_mentions: state_mentions(interventions),
        sentiment,
        sentiment_by_group,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::io::parse_conferences_json;
    use crate::normalize::SpeakerNormalizer;

    const SAMPLE: &str = r#"[
        {
            "date": "jueves, 16 de octubre de 2025Fecha de publicación",
            "title": "Versión estenográfica 16 oct",
            "url": "https://example.org/16",
            "transcript": [
                {"speaker": "PRESIDENTA CLAUDIA SHEINBAUM PARDO:", "text": "Buenos días. Hoy hablamos de Jalisco."},
                {"speaker": null, "text": "Y también de Oaxaca."},
                {"speaker": "PREGUNTA:", "text": "¿Qué pasará en Jalisco?"},
                {"speaker": "—000—", "text": ""}
            ]
        },
        {
            "date": "sin fecha",
            "title": "Sin fecha",
            "url": "https://example.org/x",
            "transcript": [
                {"speaker": "SECRETARIO DE SALUD", "text": "Vacunas."}
            ]
        }
    ]"#;

    #[test]
    fn test_run_analysis_end_to_end() {
        let interventions = parse_conferences_json(SAMPLE, &SpeakerNormalizer::default()).unwrap();
        let report = run_analysis(&interventions, &AnalysisConfig::default(), None).unwrap();

        assert_eq!(report.metadata.total_interventions, 5);
        assert_eq!(report.metadata.total_conferences, 2);
        assert_eq!(report.metadata.dropped_interventions, 1);
        assert_eq!(report.metadata.undated_interventions, 1);

        assert_eq!(report.conference_lengths.len(), 1);
        assert_eq!(report.turn_stats.len(), 1);
        assert_eq!(report.turn_stats[0].president_turns, 2);
        assert_eq!(report.turn_stats[0].journalist_turns, 1);
        assert_eq!(report.turn_stats_after_first_journalist[0].total_turns, 1);

        assert_eq!(report.state_mentions[0].state, "Jalisco");
        assert_eq!(report.state_mentions[0].mentions, 2);
        assert!(report.sentiment.is_none());
    }

    #[test]
    fn test_sentiment_enabled_without_analyzer_fails() {
        let interventions = parse_conferences_json(SAMPLE, &SpeakerNormalizer::default()).unwrap();
        let config = AnalysisConfig {
            include_sentiment: true,
            ..Default::default()
        };
        let err = run_analysis(&interventions, &config, None).unwrap_err();
        assert!(matches!(err, AnalysisError::AnalyzerUnavailable { .. }));
    }
}
