use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{NormalizedSpeaker, DEFAULT_HEAD_OF_STATE};

/// What a matching rule resolves to
#[derive(Debug, Clone, Copy)]
enum RoleTarget {
    Fixed(&'static str),
    HeadOfState,
}

/// One entry of the ordered decision list
struct SpeakerRule {
    pattern: Regex,
    target: RoleTarget,
}

fn case_insensitive(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){}", pattern)).expect("static speaker pattern must compile")
}

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Transcript separators such as "—000—"
static ZERO_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-—_ ]*0+[-—_ ]*$").expect("static pattern"));

static DASHES_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-–—_]+$").expect("static pattern"));

/// Stage directions that are not speech
static ADMIN_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\(?\bFIRMA DE DECRETO\b\)?",
        r"\(?\bFINALIZA VIDEO\b\)?",
        r"\(?INICIA VIDEO\b\)?",
        r"\(?Gracias\b\)?",
    ]
    .iter()
    .map(|p| case_insensitive(p))
    .collect()
});

/// First match wins. Several labels match more than one rule, so order matters:
/// the unanchored SECRETARI[AO] rule shadows SUBSECRETARI[AO] on purpose.
static SPEAKER_RULES: Lazy<Vec<SpeakerRule>> = Lazy::new(|| {
    use RoleTarget::*;
    let rules: [(&str, RoleTarget); 22] = [
        (r"^SECRETARI[AO]", Fixed("SECRETARIA/SECRETARIO")),
        (r"SECRETARI[AO]", Fixed("SECRETARIA/SECRETARIO")),
        (r"^SUBSECRETARI[AO]", Fixed("SUBSECRETARIA/SUBSECRETARIO")),
        (r"^CONSEJER[AO]", Fixed("CONSEJERA/CONSEJERO")),
        (r"^PROCURADOR(A)?", Fixed("PROCURADOR/PROCURADORA")),
        (r"^DIRECTOR(A)?", Fixed("DIRECTOR/DIRECTORA")),
        (r"DIRECTOR(A)?", Fixed("DIRECTOR/DIRECTORA")),
        (r"^TITULAR(A)?", Fixed("TITULAR")),
        (r"^FISCAL(A)?", Fixed("FISCAL")),
        (r"^INTERLOCUTOR(A)?", Fixed("INTERLOCUTOR/INTERLOCUTORA")),
        (r"^DIVULGADOR(A)?", Fixed("DIVULGADOR/DIVULGADORA")),
        // Published label, typo included; downstream consumers match on it.
        (r"^JEF[EA]", Fixed("JRFE/JEFA")),
        (r"^COMANDANT[EA]", Fixed("COMANDANTE/COMANDANTA")),
        (r"^VOCAL", Fixed("VOCAL")),
        // Same as above.
        (r"^GOBERNADOR(A)?", Fixed("GOBERNADOR/GOEBERNADORA")),
        (r"^COORDINADOR(A)?", Fixed("COORDINADOR/COORDINADORA")),
        (r"^PRESIDENTA", HeadOfState),
        (r"^PREGUNTA", Fixed(crate::models::JOURNALIST_ROLE)),
        (r"^VOZ DE (MUJER|HOMBRE)", Fixed("VOZ ANÓNIMA")),
        (r"^VOZ (MUJER|HOMBRE)", Fixed("VOZ ANÓNIMA")),
        (r"^INTERVENCIÓN", Fixed("VOZ ANÓNIMA")),
        (r"^MODERADOR", Fixed("MODERADOR")),
    ];
    rules
        .into_iter()
        .map(|(pattern, target)| SpeakerRule {
            pattern: case_insensitive(pattern),
            target,
        })
        .collect()
});

/// Rule-based classifier from free-text speaker labels to canonical roles
#[derive(Debug, Clone)]
pub struct SpeakerNormalizer {
    head_of_state: String,
}

impl Default for SpeakerNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_HEAD_OF_STATE)
    }
}

impl SpeakerNormalizer {
    pub fn new(head_of_state: impl Into<String>) -> Self {
        Self {
            head_of_state: head_of_state.into(),
        }
    }

    pub fn head_of_state(&self) -> &str {
        &self.head_of_state
    }

    /// Map a raw label to a canonical role, or Drop.
    ///
    /// Labels that match no rule come back cleaned but otherwise unchanged.
    pub fn normalize(&self, raw: Option<&str>) -> NormalizedSpeaker {
        let Some(raw) = raw else {
            return NormalizedSpeaker::Drop;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return NormalizedSpeaker::Drop;
        }

        let collapsed = WHITESPACE.replace_all(trimmed, " ").into_owned();
        let cleaned = collapsed.strip_suffix(':').unwrap_or(collapsed.as_str());

        if cleaned.is_empty() || ZERO_MARKER.is_match(cleaned) {
            return NormalizedSpeaker::Drop;
        }
        if ADMIN_MARKERS.iter().any(|marker| marker.is_match(cleaned)) {
            return NormalizedSpeaker::Drop;
        }

        // The configured literal is itself a canonical role and must map to itself
        if cleaned.to_lowercase() == self.head_of_state.to_lowercase() {
            return NormalizedSpeaker::Role(self.head_of_state.clone());
        }

        for rule in SPEAKER_RULES.iter() {
            if rule.pattern.is_match(cleaned) {
                let role = match rule.target {
                    RoleTarget::Fixed(role) => role.to_string(),
                    RoleTarget::HeadOfState => self.head_of_state.clone(),
                };
                return NormalizedSpeaker::Role(role);
            }
        }

        if DASHES_ONLY.is_match(cleaned.trim()) {
            return NormalizedSpeaker::Role("Unknown".to_string());
        }

        NormalizedSpeaker::Role(cleaned.to_string())
    }
}

/// Carry the nearest preceding non-blank label forward over missing/blank ones.
/// Leading gaps stay None.
pub fn forward_fill<'a, I>(labels: I) -> Vec<Option<String>>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut last: Option<String> = None;
    labels
        .into_iter()
        .map(|label| {
            if let Some(label) = label.filter(|l| !l.trim().is_empty()) {
                last = Some(label.to_string());
            }
            last.clone()
        })
        .collect()
}
