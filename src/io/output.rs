use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{
    ConferenceLength, DailyLength, SentimentRow, SentimentSummary, SpeakerCount, SpeakerWords,
    StateMentions, TopicShare, TurnStats, WeekdayAverage,
};

/// Every derived table, in the column names downstream plotting reads
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub conference_lengths: Vec<ConferenceLength>,
    pub daily_lengths: Vec<DailyLength>,
    pub top_speakers: Vec<SpeakerCount>,
    pub top_speakers_by_words: Vec<SpeakerWords>,
    pub turn_stats: Vec<TurnStats>,
    pub turn_stats_after_first_journalist: Vec<TurnStats>,
    pub weekday_averages: Vec<WeekdayAverage>,
    pub topics_by_week: Vec<TopicShare>,
    pub state_mentions: Vec<StateMentions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Vec<SentimentRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_by_group: Option<Vec<SentimentSummary>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub head_of_state: String,
    pub total_interventions: usize,
    pub total_conferences: usize,
    pub dropped_interventions: usize,
    pub undated_interventions: usize,
}

impl AnalysisReport {
    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Plain-text summary of a report
pub struct HumanReport<'a> {
    report: &'a AnalysisReport,
    max_rows: usize,
}

impl<'a> HumanReport<'a> {
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self { report, max_rows: 10 }
    }

    pub fn format(&self) -> String {
        let report = self.report;
        let meta = &report.metadata;
        let mut output = String::new();

        push_heading(&mut output, "Conference Analysis");
        output.push_str(&format!("Interventions: {}\n", meta.total_interventions));
        output.push_str(&format!("Conferences: {}\n", meta.total_conferences));
        output.push_str(&format!("Dropped (non-speech labels): {}\n", meta.dropped_interventions));
        output.push_str(&format!("Undated: {}\n\n", meta.undated_interventions));

        push_heading(&mut output, "Top Speakers");
        for speaker in report.top_speakers.iter().take(self.max_rows) {
            output.push_str(&format!(
                "{:<40} {:>6} ({})\n",
                speaker.speaker,
                speaker.n_speeches,
                format_percent(speaker.pct_of_total)
            ));
        }
        output.push('\n');

        push_heading(&mut output, "Turn Taking");
        for stats in report.turn_stats.iter().take(self.max_rows) {
            output.push_str(&format!(
                "{} {:<30} turns {:>4}  president {:>4}  press {:>4}  ratio {:.2}\n",
                stats.date,
                truncate(&stats.title, 30),
                stats.total_turns,
                stats.president_turns,
                stats.journalist_turns,
                stats.ratio_president_journalist
            ));
        }
        if report.turn_stats.len() > self.max_rows {
            output.push_str(&format!("... {} more\n", report.turn_stats.len() - self.max_rows));
        }
        output.push('\n');

        push_heading(&mut output, "Average Words by Weekday");
        for day in &report.weekday_averages {
            output.push_str(&format!(
                "{:<10} {:>10.0} words over {} days\n",
                day.weekday, day.avg_words, day.n_conferences
            ));
        }
        output.push('\n');

        push_heading(&mut output, "State Mentions");
        for state in report.state_mentions.iter().filter(|s| s.mentions > 0).take(self.max_rows) {
            output.push_str(&format!("{:<20} {:>6}\n", state.state, state.mentions));
        }

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

fn push_heading(output: &mut String, title: &str) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(title.chars().count()));
    output.push('\n');
}

/// Format a 0-1 share as a percentage with one decimal
fn format_percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

/// Shorten to at most `width` characters, marking the cut with "…"
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn report() -> AnalysisReport {
        AnalysisReport {
            metadata: ReportMetadata {
                head_of_state: "CLAUDIA SHEINBAUM PARDO".to_string(),
                total_interventions: 3,
                total_conferences: 1,
                dropped_interventions: 0,
                undated_interventions: 0,
            },
            conference_lengths: vec![],
            daily_lengths: vec![],
            top_speakers: vec![SpeakerCount {
                speaker: "PERIODISTA/PREGUNTA".to_string(),
                n_speeches: 2,
                pct_of_total: 0.5,
            }],
            top_speakers_by_words: vec![],
            turn_stats: vec![TurnStats {
                date: NaiveDate::from_ymd_opt(2025, 10, 16).unwrap(),
                title: "Versión estenográfica de la conferencia de prensa matutina".to_string(),
                url: "u".to_string(),
                total_turns: 3,
                president_turns: 1,
                journalist_turns: 2,
                ratio_president_journalist: 0.5,
            }],
            turn_stats_after_first_journalist: vec![],
            weekday_averages: vec![],
            topics_by_week: vec![],
            state_mentions: vec![StateMentions {
                state: "Jalisco".to_string(),
                mentions: 4,
            }],
            sentiment: None,
            sentiment_by_group: None,
        }
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(0.1234), "12.3%");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("corto", 10), "corto");
        assert_eq!(truncate("conferencia matutina", 10), "conferenc…");
        assert_eq!(truncate("conferencia matutina", 10).chars().count(), 10);
    }

    #[test]
    fn test_human_report_sections() {
        let report = report();
        let text = HumanReport::new(&report).format();
        assert!(text.contains("Top Speakers"));
        assert!(text.contains("PERIODISTA/PREGUNTA"));
        assert!(text.contains("50.0%"));
        assert!(text.contains("2025-10-16"));
        assert!(text.contains("ratio 0.50"));
        assert!(text.contains("Jalisco"));
    }

    #[test]
    fn test_write_json_skips_missing_sentiment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report().write_json(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["metadata"]["total_interventions"], 3);
        assert_eq!(written["turn_stats"][0]["ratio_president_journalist"], 0.5);
        assert_eq!(written["turn_stats"][0]["date"], "2025-10-16");
        assert!(written.get("sentiment").is_none());
    }
}
