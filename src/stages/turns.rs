use tracing::{debug, info};

use crate::models::{group_by_conference, Intervention, NormalizedSpeaker, TurnStats, JOURNALIST_ROLE};
use crate::normalize::{forward_fill, SpeakerNormalizer};

/// Which part of a conference is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnMode {
    /// Every non-dropped turn
    #[default]
    All,
    /// Only turns from the first journalist question onwards
    AfterFirstJournalist,
}

/// Turn counts for one conference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnCounts {
    pub total_turns: usize,
    pub president_turns: usize,
    pub journalist_turns: usize,
}

impl TurnCounts {
    /// President-to-journalist turn ratio; undefined without journalist turns
    pub fn ratio(&self) -> Option<f64> {
        if self.journalist_turns == 0 {
            None
        } else {
            Some(self.president_turns as f64 / self.journalist_turns as f64)
        }
    }
}

/// Count turns over already-normalized speakers in conference order.
///
/// Dropped speakers are not turns. Returns None in `AfterFirstJournalist`
/// mode when no journalist ever speaks.
pub fn count_turns<'a, I>(roles: I, head_of_state: &str, mode: TurnMode) -> Option<TurnCounts>
where
    I: IntoIterator<Item = &'a NormalizedSpeaker>,
{
    let turns: Vec<&str> = roles.into_iter().filter_map(|r| r.role()).collect();

    let start = match mode {
        TurnMode::All => 0,
        TurnMode::AfterFirstJournalist => turns.iter().position(|role| *role == JOURNALIST_ROLE)?,
    };

    let counted = &turns[start..];
    Some(TurnCounts {
        total_turns: counted.len(),
        president_turns: counted.iter().filter(|r| **r == head_of_state).count(),
        journalist_turns: counted.iter().filter(|r| **r == JOURNALIST_ROLE).count(),
    })
}

/// Segment one conference given its raw `(speaker, text)` rows in order.
///
/// Labels are forward-filled before normalization, never after.
pub fn segment(
    rows: &[(Option<&str>, &str)],
    normalizer: &SpeakerNormalizer,
    mode: TurnMode,
) -> Option<TurnCounts> {
    let filled = forward_fill(rows.iter().map(|(speaker, _)| *speaker));
    let roles: Vec<NormalizedSpeaker> = filled
        .iter()
        .map(|label| normalizer.normalize(label.as_deref()))
        .collect();
    count_turns(&roles, normalizer.head_of_state(), mode)
}

/// Turn-taking statistics for every dated conference.
///
/// Conferences whose ratio is undefined (no journalist turns) are omitted.
pub fn turn_taking_stats(interventions: &[Intervention], head_of_state: &str, mode: TurnMode) -> Vec<TurnStats> {
    let mut stats = Vec::new();
    let mut omitted = 0usize;

    for (key, rows) in group_by_conference(interventions) {
        let Some(date) = key.date else {
            debug!("Skipping undated conference {:?}", key.title);
            continue;
        };

        let counts = count_turns(rows.iter().map(|r| &r.role), head_of_state, mode);
        let Some((counts, ratio)) = counts.and_then(|c| c.ratio().map(|ratio| (c, ratio))) else {
            omitted += 1;
            continue;
        };

        stats.push(TurnStats {
            date,
            title: key.title,
            url: key.url,
            total_turns: counts.total_turns,
            president_turns: counts.president_turns,
            journalist_turns: counts.journalist_turns,
            ratio_president_journalist: ratio,
        });
    }

    info!(
        "Turn stats ({:?}): {} conferences, {} omitted without journalist turns",
        mode,
        stats.len(),
        omitted
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_HEAD_OF_STATE;
    use chrono::NaiveDate;

    fn role(name: &str) -> NormalizedSpeaker {
        NormalizedSpeaker::Role(name.to_string())
    }

    fn intervention(day: u32, title: &str, raw: Option<&str>) -> Intervention {
        let normalizer = SpeakerNormalizer::default();
        Intervention {
            date: NaiveDate::from_ymd_opt(2025, 10, day),
            title: title.to_string(),
            url: format!("https://example.org/{}", title),
            raw_speaker: raw.map(str::to_string),
            speaker: raw.map(str::to_string),
            role: normalizer.normalize(raw),
            text: "texto".to_string(),
        }
    }

    #[test]
    fn test_count_turns_both_modes() {
        let p = role(DEFAULT_HEAD_OF_STATE);
        let j = role(JOURNALIST_ROLE);
        let roles = vec![p.clone(), j.clone(), p.clone(), j.clone(), j.clone()];

        let all = count_turns(&roles, DEFAULT_HEAD_OF_STATE, TurnMode::All).unwrap();
        assert_eq!(all.total_turns, 5);
        assert_eq!(all.president_turns, 2);
        assert_eq!(all.journalist_turns, 3);
        assert_eq!(all.ratio(), Some(2.0 / 3.0));

        let after = count_turns(&roles, DEFAULT_HEAD_OF_STATE, TurnMode::AfterFirstJournalist).unwrap();
        assert_eq!(after.total_turns, 4);
        assert_eq!(after.president_turns, 1);
        assert_eq!(after.journalist_turns, 3);
    }

    #[test]
    fn test_dropped_rows_are_not_turns() {
        let roles = vec![
            NormalizedSpeaker::Drop,
            role(DEFAULT_HEAD_OF_STATE),
            NormalizedSpeaker::Drop,
            role(JOURNALIST_ROLE),
        ];
        let counts = count_turns(&roles, DEFAULT_HEAD_OF_STATE, TurnMode::All).unwrap();
        assert_eq!(counts.total_turns, 2);
    }

    #[test]
    fn test_no_journalist_after_first_is_excluded() {
        let roles = vec![role(DEFAULT_HEAD_OF_STATE), role("SECRETARIA/SECRETARIO")];
        assert_eq!(
            count_turns(&roles, DEFAULT_HEAD_OF_STATE, TurnMode::AfterFirstJournalist),
            None
        );
        let all = count_turns(&roles, DEFAULT_HEAD_OF_STATE, TurnMode::All).unwrap();
        assert_eq!(all.ratio(), None);
    }

    #[test]
    fn test_segment_forward_fills_before_normalizing() {
        let rows = vec![
            (Some("PRESIDENTA CLAUDIA SHEINBAUM PARDO:"), "Buenos días."),
            (None, "Continúa la presidenta."),
            (Some("PREGUNTA"), "¿Qué opina?"),
            (Some("  "), "Sigue la pregunta."),
            (Some("(FINALIZA VIDEO)"), ""),
        ];
        let counts = segment(&rows, &SpeakerNormalizer::default(), TurnMode::All).unwrap();
        assert_eq!(counts.total_turns, 4);
        assert_eq!(counts.president_turns, 2);
        assert_eq!(counts.journalist_turns, 2);
        assert_eq!(counts.ratio(), Some(1.0));
    }

    #[test]
    fn test_turn_taking_stats_omits_conferences_without_journalists() {
        let rows = vec![
            intervention(16, "con-preguntas", Some("PRESIDENTA")),
            intervention(16, "con-preguntas", Some("PREGUNTA")),
            intervention(16, "sin-preguntas", Some("PRESIDENTA")),
            intervention(16, "sin-preguntas", Some("SECRETARIO DE SALUD")),
            intervention(17, "solo-prensa", Some("PREGUNTA")),
            Intervention {
                date: None,
                ..intervention(18, "sin-fecha", Some("PREGUNTA"))
            },
            Intervention {
                date: None,
                ..intervention(18, "sin-fecha", Some("PRESIDENTA"))
            },
        ];

        for mode in [TurnMode::All, TurnMode::AfterFirstJournalist] {
            let stats = turn_taking_stats(&rows, DEFAULT_HEAD_OF_STATE, mode);
            let titles: Vec<_> = stats.iter().map(|s| s.title.as_str()).collect();
            assert_eq!(titles, vec!["con-preguntas", "solo-prensa"]);
        }

        let stats = turn_taking_stats(&rows, DEFAULT_HEAD_OF_STATE, TurnMode::All);
        assert_eq!(stats[0].ratio_president_journalist, 1.0);
        assert_eq!(stats[1].ratio_president_journalist, 0.0);
    }

    #[test]
    fn test_turn_taking_stats_after_first_journalist_trims() {
        let rows = vec![
            intervention(20, "c", Some("PRESIDENTA")),
            intervention(20, "c", Some("PRESIDENTA")),
            intervention(20, "c", Some("PREGUNTA")),
            intervention(20, "c", Some("PRESIDENTA")),
        ];
        let stats = turn_taking_stats(&rows, DEFAULT_HEAD_OF_STATE, TurnMode::AfterFirstJournalist);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].total_turns, 2);
        assert_eq!(stats[0].president_turns, 1);
        assert_eq!(stats[0].journalist_turns, 1);
    }
}
