//! Client-facing report shape returned by every analysis endpoint.

use serde::Serialize;

use crate::engine::Evaluation;

/// Evaluation plus the presentation fields clients consume.
///
/// `market_score` is the complement of the risk score. `original_risk` is the
/// risk before hardening: the computed score for submitted text, or the
/// platform baseline for simulated profiles.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    pub original_risk: u8,
    pub risk_score: u8,
    pub market_score: u8,
    pub evidence: Vec<String>,
    pub safe_text: String,
}

impl Report {
    pub fn from_evaluation(evaluation: Evaluation) -> Self {
        Self {
            extracted_text: None,
            original_risk: evaluation.score,
            risk_score: evaluation.score,
            market_score: 100 - evaluation.score,
            evidence: evaluation.evidence,
            safe_text: evaluation.hardened_text,
        }
    }

    pub fn with_extracted_text(mut self, text: impl Into<String>) -> Self {
        self.extracted_text = Some(text.into());
        self
    }

    pub fn with_original_risk(mut self, risk: u8) -> Self {
        self.original_risk = risk;
        self
    }
}

/// First `max_chars` characters of `text`.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(score: u8) -> Evaluation {
        Evaluation {
            score,
            evidence: vec!["LEAK: Direct email identified. Vulnerable to Phishing.".into()],
            hardened_text: "[ID_GATEWAY]".into(),
        }
    }

    #[test]
    fn test_report_shape() {
        let report = Report::from_evaluation(evaluation(40));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["risk_score"], 40);
        assert_eq!(json["original_risk"], 40);
        assert_eq!(json["market_score"], 60);
        assert_eq!(json["safe_text"], "[ID_GATEWAY]");
        assert!(json["evidence"].is_array());
        assert!(json.get("extracted_text").is_none());
    }

    #[test]
    fn test_report_builders() {
        let report = Report::from_evaluation(evaluation(100))
            .with_original_risk(95)
            .with_extracted_text("raw");
        assert_eq!(report.market_score, 0);
        assert_eq!(report.original_risk, 95);
        assert_eq!(report.extracted_text.as_deref(), Some("raw"));
    }

    #[test]
    fn test_preview_counts_characters() {
        assert_eq!(preview("héllo", 2), "hé");
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview("", 5), "");
    }
}
