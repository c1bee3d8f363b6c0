//! Combined scoring and hardening entry point.

use std::sync::Arc;

use sentinel_core::HardeningMode;
use sentinel_infer::EntityCapability;
use serde::Serialize;

use crate::hardener::TextHardener;
use crate::scorer::{RiskAssessment, RiskScorer};
use crate::taxonomy::AffiliationTaxonomy;

/// Result of evaluating one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub score: u8,
    pub evidence: Vec<String>,
    pub hardened_text: String,
}

/// Risk Scorer and Text Hardener sharing one read-only taxonomy.
///
/// Holds no mutable state; a single engine serves concurrent callers.
pub struct SentinelEngine {
    scorer: RiskScorer,
    hardener: TextHardener,
}

impl SentinelEngine {
    pub fn new(taxonomy: AffiliationTaxonomy, capability: EntityCapability) -> Self {
        let taxonomy = Arc::new(taxonomy);
        Self {
            scorer: RiskScorer::new(taxonomy.clone()),
            hardener: TextHardener::new(taxonomy, capability),
        }
    }

    /// Engine with the built-in taxonomy.
    pub fn with_capability(capability: EntityCapability) -> Self {
        Self::new(AffiliationTaxonomy::default(), capability)
    }

    pub fn assess(&self, text: &str) -> RiskAssessment {
        self.scorer.assess(text)
    }

    pub fn harden(&self, text: &str) -> String {
        self.hardener.harden(text)
    }

    pub fn evaluate(&self, text: &str) -> Evaluation {
        let RiskAssessment { score, evidence } = self.scorer.assess(text);
        Evaluation {
            score,
            evidence,
            hardened_text: self.hardener.harden(text),
        }
    }

    pub fn mode(&self) -> HardeningMode {
        self.hardener.mode()
    }

    pub fn capability(&self) -> &EntityCapability {
        self.hardener.capability()
    }
}
