//! Hardening mode selected from the detected entity-recognition capability.

use serde::{Deserialize, Serialize};

/// Which redaction path the Text Hardener runs.
///
/// Resolved once at startup and never changed for the lifetime of a hardener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HardeningMode {
    /// Named-entity spans are hidden first, then contact patterns.
    Entity,
    /// Contact patterns plus the affiliation taxonomy substitution table.
    Lexical,
}

impl HardeningMode {
    pub fn from_availability(entity_recognition: bool) -> Self {
        if entity_recognition {
            Self::Entity
        } else {
            Self::Lexical
        }
    }
}

impl std::fmt::Display for HardeningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entity => write!(f, "entity"),
            Self::Lexical => write!(f, "lexical"),
        }
    }
}
