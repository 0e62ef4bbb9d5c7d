use std::collections::HashMap;

use crate::models::{Intervention, SpeakerCount, SpeakerWords};

/// Sum a per-row value by canonical role, skipping dropped rows.
/// Sorted by value descending, ties by role name.
fn tally_by_role<F>(interventions: &[Intervention], value: F) -> Vec<(String, usize)>
where
    F: Fn(&Intervention) -> usize,
{
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for intervention in interventions {
        if let Some(role) = intervention.role.role() {
            *totals.entry(role).or_default() += value(intervention);
        }
    }

    let mut tallies: Vec<(String, usize)> = totals
        .into_iter()
        .map(|(role, total)| (role.to_string(), total))
        .collect();
    tallies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tallies
}

fn share(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Most frequent speakers by number of interventions
pub fn top_speakers(interventions: &[Intervention], n: usize) -> Vec<SpeakerCount> {
    let tallies = tally_by_role(interventions, |_| 1);
    let total: usize = tallies.iter().map(|(_, count)| count).sum();

    tallies
        .into_iter()
        .take(n)
        .map(|(speaker, n_speeches)| SpeakerCount {
            speaker,
            n_speeches,
            pct_of_total: share(n_speeches, total),
        })
        .collect()
}

/// Speakers with the most words spoken
pub fn top_speakers_by_words(interventions: &[Intervention], n: usize) -> Vec<SpeakerWords> {
    let tallies = tally_by_role(interventions, Intervention::word_count);
    let total: usize = tallies.iter().map(|(_, words)| words).sum();

    tallies
        .into_iter()
        .take(n)
        .map(|(speaker, total_words)| SpeakerWords {
            speaker,
            total_words,
            pct_of_total: share(total_words, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::SpeakerNormalizer;

    fn row(raw: &str, text: &str) -> Intervention {
        Intervention {
            date: None,
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
            row("PRESIDENTA", "uno dos tres cuatro"),
            row("PREGUNTA", "uno"),
            row("PRESIDENTA", "uno dos"),
            row("SECRETARIO DE SALUD", "uno dos tres"),
            row("SECRETARIA DE ENERGÍA", "uno"),
            row("—000—", "ignorado por completo"),
        ]
    }

    #[test]
    fn test_top_speakers_counts_and_shares() {
        let top = top_speakers(&sample(), 20);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].speaker, "CLAUDIA SHEINBAUM PARDO");
        assert_eq!(top[0].n_speeches, 2);
        assert_eq!(top[0].pct_of_total, 0.4);
        // tie on 2 resolved by name
        assert_eq!(top[1].speaker, "SECRETARIA/SECRETARIO");
        assert_eq!(top[2].speaker, "PERIODISTA/PREGUNTA");
    }

    #[test]
    fn test_top_speakers_truncates_after_share() {
        let top = top_speakers(&sample(), 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].pct_of_total, 0.4);
    }

    #[test]
    fn test_top_speakers_by_words() {
        let top = top_speakers_by_words(&sample(), 20);
        assert_eq!(top[0].speaker, "CLAUDIA SHEINBAUM PARDO");
        assert_eq!(top[0].total_words, 6);
        assert_eq!(top[1].total_words, 4);
        assert_eq!(top[2].total_words, 1);
        let total: f64 = top.iter().map(|s| s.pct_of_total).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
