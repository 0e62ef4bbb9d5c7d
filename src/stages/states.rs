use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::models::{Intervention, StateMentions};
use crate::normalize::fold_text;

/// The 32 federal entities of Mexico, as reported
pub const MEXICO_STATES: [&str; 32] = [
    "Aguascalientes",
    "Baja California",
    "Baja California Sur",
    "Campeche",
    "Chiapas",
    "Chihuahua",
    "Ciudad de Mexico",
    "Coahuila",
    "Colima",
    "Durango",
    "Estado de Mexico",
    "Guanajuato",
    "Guerrero",
    "Hidalgo",
    "Jalisco",
    "Michoacan",
    "Morelos",
    "Nayarit",
    "Nuevo Leon",
    "Oaxaca",
    "Puebla",
    "Queretaro",
    "Quintana Roo",
    "San Luis Potosi",
    "Sinaloa",
    "Sonora",
    "Tabasco",
    "Tamaulipas",
    "Tlaxcala",
    "Veracruz",
    "Yucatan",
    "Zacatecas",
];

/// Whole-word matchers over the folded state names, in gazetteer order
static STATE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    MEXICO_STATES
        .iter()
        .map(|&state| {
            let pattern = format!(r"\b{}\b", regex::escape(&fold_text(state)));
            (state, Regex::new(&pattern).expect("static pattern"))
        })
        .collect()
});

/// Count whole-word mentions of each state across all interventions.
///
/// Text and names are lowercased, diacritic-folded and stripped of punctuation
/// before matching. Sorted by mentions descending, ties in gazetteer order.
pub fn state_mentions(interventions: &[Intervention]) -> Vec<StateMentions> {
    let joined = interventions
        .iter()
        .map(|i| i.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let full_text = fold_text(&joined);

    let mut mentions: Vec<StateMentions> = STATE_PATTERNS
        .iter()
        .map(|(state, pattern)| StateMentions {
            state: state.to_string(),
            mentions: pattern.find_iter(&full_text).count(),
        })
        .collect();

    mentions.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    info!(
        "State mentions: {} of {} states mentioned",
        mentions.iter().filter(|m| m.mentions > 0).count(),
        MEXICO_STATES.len()
    );
    mentions
}
