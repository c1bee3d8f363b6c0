//! Risk Scorer: simulates what an adversary learns from a piece of text.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::patterns::indicator_patterns;
use crate::taxonomy::AffiliationTaxonomy;

/// Upper bound of every risk score.
pub const MAX_SCORE: u32 = 100;

/// Score contribution of each matched taxonomy term.
pub const TAXONOMY_WEIGHT: u32 = 15;

/// Bounded score plus one evidence line per indicator that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub evidence: Vec<String>,
}

impl RiskAssessment {
    pub fn is_clean(&self) -> bool {
        self.evidence.is_empty()
    }
}

pub struct RiskScorer {
    taxonomy: Arc<AffiliationTaxonomy>,
}

impl RiskScorer {
    pub fn new(taxonomy: Arc<AffiliationTaxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Score `text`: contact indicators in table order, then taxonomy terms.
    ///
    /// Each contact indicator fires at most once no matter how many matches
    /// exist. Every taxonomy term fires independently.
    pub fn assess(&self, text: &str) -> RiskAssessment {
        let mut score: u32 = 0;
        let mut evidence = Vec::new();

        for pattern in indicator_patterns() {
            if pattern.is_match(text) {
                score += pattern.weight;
                evidence.push(pattern.evidence.to_string());
            }
        }

        for term in self.taxonomy.matching_terms(text) {
            score += TAXONOMY_WEIGHT;
            evidence.push(format!("RECON: Connection to {} found.", term.to_uppercase()));
        }

        debug!("Assessed {} chars: raw score {}, {} indicators", text.len(), score, evidence.len());

        RiskAssessment {
            score: score.min(MAX_SCORE) as u8,
            evidence,
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(Arc::new(AffiliationTaxonomy::default()))
    }
}
