//! Contact indicator patterns shared by scoring and hardening.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::Serialize;

/// Kinds of direct contact identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorKind {
    ContactEmail,
    ContactPhone,
}

/// A detection rule with its score weight, evidence line and redaction placeholder.
pub struct IndicatorPattern {
    pub kind: IndicatorKind,
    pub regex: &'static Regex,
    pub weight: u32,
    pub evidence: &'static str,
    pub placeholder: &'static str,
}

impl IndicatorPattern {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Replace every match with this pattern's placeholder.
    pub fn redact(&self, text: &str) -> String {
        self.regex.replace_all(text, NoExpand(self.placeholder)).into_owned()
    }
}

// Compiled regex patterns (compiled once, reused).
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\+?\d{1,3}[\s-]?)?(\d{10})").unwrap());

static PATTERNS: Lazy<Vec<IndicatorPattern>> = Lazy::new(|| {
    vec![
        IndicatorPattern {
            kind: IndicatorKind::ContactEmail,
            regex: &EMAIL_RE,
            weight: 40,
            evidence: "LEAK: Direct email identified. Vulnerable to Phishing.",
            placeholder: "[ID_GATEWAY]",
        },
        IndicatorPattern {
            kind: IndicatorKind::ContactPhone,
            regex: &PHONE_RE,
            weight: 30,
            evidence: "LEAK: Phone contact exposed. Vulnerable to SIM-swap.",
            placeholder: "[VERIFIED_LINE]",
        },
    ]
});

/// Indicator table in evaluation order: email, then phone.
pub fn indicator_patterns() -> &'static [IndicatorPattern] {
    &PATTERNS
}

/// Replace all contact identifiers, emails first, then phone numbers.
pub fn redact_contacts(text: &str) -> String {
    indicator_patterns()
        .iter()
        .fold(text.to_string(), |acc, pattern| pattern.redact(&acc))
}
