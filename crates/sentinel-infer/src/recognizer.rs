//! Entity recognizer trait, span types and the typed capability handle.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category attached to a recognized entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Fac,
    Loc,
    /// Any label the hardener leaves untouched (DATE, MONEY, ...).
    Other(String),
}

impl EntityLabel {
    pub fn parse(label: &str) -> Self {
        match label {
            "PERSON" => Self::Person,
            "ORG" => Self::Org,
            "GPE" => Self::Gpe,
            "FAC" => Self::Fac,
            "LOC" => Self::Loc,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
            Self::Fac => "FAC",
            Self::Loc => "LOC",
            Self::Other(label) => label,
        }
    }

    /// Whether spans with this label are replaced during hardening.
    pub fn is_hidden(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for EntityLabel {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.as_str().to_string()
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled half-open range `[start, end)` counted in characters of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
}

impl EntitySpan {
    pub fn new(start: usize, end: usize, label: EntityLabel) -> Self {
        Self { start, end, label }
    }
}

#[derive(Error, Debug)]
pub enum RecognizerError {
    #[error("recognizer unreachable: {0}")]
    Unreachable(String),

    #[error("invalid recognizer response: {0}")]
    InvalidResponse(String),
}

/// Trait for named-entity recognition backends.
pub trait EntityRecognizer: Send + Sync {
    /// Recognize entities in `text`, in the order the backend reports them.
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError>;

    /// Short backend name for status reporting.
    fn name(&self) -> &str;
}

/// Recognizer that returns a fixed list of spans for every input.
pub struct StaticRecognizer {
    spans: Vec<EntitySpan>,
}

impl StaticRecognizer {
    pub fn new(spans: Vec<EntitySpan>) -> Self {
        Self { spans }
    }
}

impl EntityRecognizer for StaticRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
        Ok(self.spans.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Outcome of capability detection, resolved once per process.
#[derive(Clone)]
pub enum EntityCapability {
    Available(Arc<dyn EntityRecognizer>),
    Unavailable { reason: String },
}

impl EntityCapability {
    pub fn available(recognizer: impl EntityRecognizer + 'static) -> Self {
        Self::Available(Arc::new(recognizer))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn recognizer(&self) -> Option<&Arc<dyn EntityRecognizer>> {
        match self {
            Self::Available(recognizer) => Some(recognizer),
            Self::Unavailable { .. } => None,
        }
    }

    /// Human-readable description for logs and status output.
    pub fn describe(&self) -> String {
        match self {
            Self::Available(recognizer) => format!("available ({})", recognizer.name()),
            Self::Unavailable { reason } => format!("unavailable ({})", reason),
        }
    }
}

impl std::fmt::Debug for EntityCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EntityCapability::{}", self.describe())
    }
}
