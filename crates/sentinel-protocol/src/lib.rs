//! Privacy protocol: exposure risk scoring and text hardening.
//!
//! The Risk Scorer turns contact indicators and affiliation keywords into a
//! bounded score with evidence lines. The Text Hardener rewrites the same text
//! with category placeholders, either from recognized entity spans or from the
//! lexical substitution table when no recognizer is available.

pub mod engine;
pub mod hardener;
pub mod patterns;
pub mod profile;
pub mod report;
pub mod scorer;
pub mod taxonomy;

pub use engine::{Evaluation, SentinelEngine};
pub use hardener::TextHardener;
pub use patterns::{indicator_patterns, IndicatorKind, IndicatorPattern};
pub use profile::{simulate_profile, Platform, SimulatedProfile};
pub use report::Report;
pub use scorer::{RiskAssessment, RiskScorer};
pub use taxonomy::{AffiliationTaxonomy, TaxonomyEntry};
