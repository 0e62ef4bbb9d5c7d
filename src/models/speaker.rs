use serde::{Deserialize, Serialize};

/// Canonical role for questions from the press
pub const JOURNALIST_ROLE: &str = "PERIODISTA/PREGUNTA";

/// Head-of-state literal used for labels starting with "PRESIDENTA"
pub const DEFAULT_HEAD_OF_STATE: &str = "CLAUDIA SHEINBAUM PARDO";

/// Result of normalizing a raw speaker label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizedSpeaker {
    /// A canonical role, or the cleaned label itself when no rule matched
    Role(String),
    /// Excluded from speaker-based statistics (markers, stage directions, blanks)
    Drop,
}

impl NormalizedSpeaker {
    pub fn role(&self) -> Option<&str> {
        match self {
            NormalizedSpeaker::Role(role) => Some(role.as_str()),
            NormalizedSpeaker::Drop => None,
        }
    }

    pub fn is_drop(&self) -> bool {
        matches!(self, NormalizedSpeaker::Drop)
    }

    pub fn is_journalist(&self) -> bool {
        self.role() == Some(JOURNALIST_ROLE)
    }

    /// Speaker group for non-dropped speakers
    pub fn group(&self) -> Option<SpeakerGroup> {
        self.role().map(SpeakerGroup::from_role)
    }
}

/// Coarse binary partition over canonical roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpeakerGroup {
    Journalist,
    #[serde(rename = "President/Official")]
    PresidentOfficial,
}

impl SpeakerGroup {
    pub fn from_role(role: &str) -> Self {
        if role == JOURNALIST_ROLE {
            SpeakerGroup::Journalist
        } else {
            SpeakerGroup::PresidentOfficial
        }
    }
}
