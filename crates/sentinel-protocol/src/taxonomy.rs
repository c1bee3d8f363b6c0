//! Affiliation taxonomy: ordered keyword → category label table.
//!
//! Terms are matched as plain substrings, not words, so `sql` also fires
//! inside `mysqldump`. Score weights were calibrated against that looseness.

use regex::{NoExpand, Regex, RegexBuilder};
use sentinel_core::{Error, Result};

/// A single taxonomy term with its replacement label.
#[derive(Debug, Clone)]
pub struct TaxonomyEntry {
    term: String,
    label: String,
    matcher: Regex,
}

impl TaxonomyEntry {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Case-insensitively replace every occurrence of the term with its label.
    pub fn substitute(&self, text: &str) -> String {
        self.matcher
            .replace_all(text, NoExpand(&self.label))
            .into_owned()
    }
}

/// Ordered, read-only table of affiliation terms.
#[derive(Debug, Clone)]
pub struct AffiliationTaxonomy {
    entries: Vec<TaxonomyEntry>,
}

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("google", "a Tier-1 Tech Corporation"),
    ("microsoft", "a Global Software Leader"),
    ("manager", "Strategic Director"),
    ("engineer", "Technical Specialist"),
    ("sql", "Structured Database Systems"),
    ("hyderabad", "a major Tech Hub"),
];

impl AffiliationTaxonomy {
    /// Build a taxonomy from `(term, label)` pairs, keeping their order.
    ///
    /// Terms are lowercased; empty or duplicate terms are rejected.
    pub fn new<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut built: Vec<TaxonomyEntry> = Vec::new();
        for (term, label) in entries {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() {
                return Err(Error::Config("taxonomy term must not be empty".into()));
            }
            if built.iter().any(|e| e.term == term) {
                return Err(Error::Config(format!("duplicate taxonomy term: {}", term)));
            }
            let matcher = RegexBuilder::new(&regex::escape(&term))
                .case_insensitive(true)
                .build()
                .map_err(|e| Error::Config(format!("invalid taxonomy term {}: {}", term, e)))?;
            built.push(TaxonomyEntry {
                term,
                label: label.into(),
                matcher,
            });
        }
        Ok(Self { entries: built })
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Terms contained (as substrings) in the lowercased text, in table order.
    pub fn matching_terms<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a str> + 'a {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .filter(move |e| lowered.contains(e.term.as_str()))
            .map(|e| e.term.as_str())
    }

    /// Apply every substitution in table order.
    pub fn substitute_all(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, entry| entry.substitute(&acc))
    }
}

impl Default for AffiliationTaxonomy {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRIES.iter().copied()).expect("built-in taxonomy is valid")
    }
}
