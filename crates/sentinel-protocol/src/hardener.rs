//! Text Hardener: rewrites text with category placeholders.
//!
//! Two paths, chosen once from the entity-recognition capability:
//! - entity path: hide recognized PERSON/ORG/GPE/FAC/LOC spans, then contacts
//! - lexical path: contacts, then the affiliation taxonomy substitutions
//!
//! A recognizer failure at call time drops to the lexical path for that call.

use std::sync::Arc;

use sentinel_core::HardeningMode;
use sentinel_infer::{EntityCapability, EntitySpan};
use tracing::{debug, warn};

use crate::patterns::redact_contacts;
use crate::taxonomy::AffiliationTaxonomy;

pub struct TextHardener {
    taxonomy: Arc<AffiliationTaxonomy>,
    capability: EntityCapability,
}

impl TextHardener {
    pub fn new(taxonomy: Arc<AffiliationTaxonomy>, capability: EntityCapability) -> Self {
        Self {
            taxonomy,
            capability,
        }
    }

    /// Hardener that always runs the lexical path.
    pub fn lexical(taxonomy: Arc<AffiliationTaxonomy>) -> Self {
        Self::new(taxonomy, EntityCapability::unavailable("lexical hardener"))
    }

    pub fn mode(&self) -> HardeningMode {
        HardeningMode::from_availability(self.capability.is_available())
    }

    pub fn capability(&self) -> &EntityCapability {
        &self.capability
    }

    pub fn harden(&self, text: &str) -> String {
        let Some(recognizer) = self.capability.recognizer() else {
            return self.harden_lexical(text);
        };

        match recognizer.recognize(text) {
            Ok(spans) => harden_with_entities(text, spans),
            Err(e) => {
                warn!("Entity recognition failed ({}), using lexical hardening", e);
                self.harden_lexical(text)
            }
        }
    }

    /// Lexical path: emails, phones, then taxonomy terms in table order.
    pub fn harden_lexical(&self, text: &str) -> String {
        let safe = redact_contacts(text);
        self.taxonomy.substitute_all(&safe)
    }
}

/// Entity path: hide spans right-to-left, then redact contacts over the result.
///
/// The contact pass runs over placeholders too, so the output is not
/// guaranteed to be a fixed point of a second hardening pass.
pub fn harden_with_entities(text: &str, spans: Vec<EntitySpan>) -> String {
    let hidden = hide_entities(text, spans);
    redact_contacts(&hidden)
}

/// Replace hidden-label spans with `[HIDDEN_<LABEL>]`.
///
/// Span offsets count characters. Spans are applied from the highest start
/// down; a span reaching into text that was already replaced, or lying
/// outside the input, is skipped.
pub fn hide_entities(text: &str, mut spans: Vec<EntitySpan>) -> String {
    // Byte offset of every char boundary, including the end of the text.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    spans.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut hardened = text.to_string();
    let mut frontier = char_count;
    for span in spans {
        if !span.label.is_hidden() {
            continue;
        }
        if span.start > span.end || span.end > frontier {
            debug!(
                "Skipping entity span {}..{} ({}): out of range or overlapping",
                span.start, span.end, span.label
            );
            continue;
        }
        let range = boundaries[span.start]..boundaries[span.end];
        hardened.replace_range(range, &format!("[HIDDEN_{}]", span.label));
        frontier = span.start;
    }
    hardened
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_infer::{EntityLabel, EntityRecognizer, RecognizerError, StaticRecognizer};

    struct FailingRecognizer;

    impl EntityRecognizer for FailingRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
            Err(RecognizerError::Unreachable("connection refused".into()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn lexical() -> TextHardener {
        TextHardener::lexical(Arc::new(AffiliationTaxonomy::default()))
    }

    fn with_spans(spans: Vec<EntitySpan>) -> TextHardener {
        TextHardener::new(
            Arc::new(AffiliationTaxonomy::default()),
            EntityCapability::available(StaticRecognizer::new(spans)),
        )
    }

    fn span(start: usize, end: usize, label: &str) -> EntitySpan {
        EntitySpan::new(start, end, EntityLabel::parse(label))
    }

    #[test]
    fn test_lexical_email() {
        assert_eq!(
            lexical().harden("Contact me at jane@acme.com"),
            "Contact me at [ID_GATEWAY]"
        );
    }

    #[test]
    fn test_lexical_phone() {
        assert_eq!(lexical().harden("Call 9876543210 now"), "Call [VERIFIED_LINE] now");
    }

    #[test]
    fn test_lexical_taxonomy() {
        assert_eq!(
            lexical().harden("I am a Manager at Google"),
            "I am a Strategic Director at a Tier-1 Tech Corporation"
        );
    }

    #[test]
    fn test_lexical_embedded_term() {
        assert_eq!(
            lexical().harden("mysqldump"),
            "myStructured Database Systemsdump"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(lexical().harden(""), "");
        assert_eq!(with_spans(Vec::new()).harden(""), "");
    }

    #[test]
    fn test_mode() {
        assert_eq!(lexical().mode(), HardeningMode::Lexical);
        assert_eq!(with_spans(Vec::new()).mode(), HardeningMode::Entity);
    }

    #[test]
    fn test_entity_path_hides_spans() {
        let text = "Jane Doe works at Acme in Paris";
        let spans = vec![span(0, 8, "PERSON"), span(18, 22, "ORG"), span(26, 31, "GPE")];
        assert_eq!(
            with_spans(spans).harden(text),
            "[HIDDEN_PERSON] works at [HIDDEN_ORG] in [HIDDEN_GPE]"
        );
    }

    #[test]
    fn test_entity_path_unsorted_spans() {
        let text = "Jane Doe works at Acme";
        // Reported left-to-right; the hardener must still apply right-to-left.
        let spans = vec![span(0, 8, "PERSON"), span(18, 22, "ORG")];
        let reversed = vec![span(18, 22, "ORG"), span(0, 8, "PERSON")];
        assert_eq!(with_spans(spans).harden(text), with_spans(reversed).harden(text));
    }

    #[test]
    fn test_entity_path_ignores_other_labels() {
        let text = "Paid $5 on Monday";
        let spans = vec![span(5, 7, "MONEY"), span(11, 17, "DATE")];
        assert_eq!(with_spans(spans).harden(text), text);
    }

    #[test]
    fn test_entity_path_skips_taxonomy() {
        // Taxonomy substitution belongs to the lexical path only.
        let text = "Manager at Google";
        assert_eq!(with_spans(Vec::new()).harden(text), text);
    }

    #[test]
    fn test_entity_path_redacts_contacts_after_entities() {
        let text = "Jane: jane@acme.com, 9876543210";
        let spans = vec![span(0, 4, "PERSON")];
        assert_eq!(
            with_spans(spans).harden(text),
            "[HIDDEN_PERSON]: [ID_GATEWAY], [VERIFIED_LINE]"
        );
    }

    #[test]
    fn test_entity_spans_count_characters() {
        let text = "Zoë Ångström lives in Malmö";
        let spans = vec![span(0, 12, "PERSON"), span(22, 27, "GPE")];
        assert_eq!(
            with_spans(spans).harden(text),
            "[HIDDEN_PERSON] lives in [HIDDEN_GPE]"
        );
    }

    #[test]
    fn test_overlapping_and_out_of_range_spans_are_skipped() {
        let text = "New York City";
        let spans = vec![
            span(0, 13, "GPE"),
            span(4, 8, "GPE"),
            span(10, 40, "LOC"),
            span(9, 3, "ORG"),
        ];
        // 4..8 starts highest among valid spans and is applied first; 0..13
        // then reaches into replaced text and is dropped.
        assert_eq!(with_spans(spans).harden(text), "New [HIDDEN_GPE] City");
    }

    #[test]
    fn test_recognizer_failure_falls_back_to_lexical() {
        let hardener = TextHardener::new(
            Arc::new(AffiliationTaxonomy::default()),
            EntityCapability::available(FailingRecognizer),
        );
        assert_eq!(hardener.mode(), HardeningMode::Entity);
        assert_eq!(
            hardener.harden("I am a Manager at Google"),
            "I am a Strategic Director at a Tier-1 Tech Corporation"
        );
    }

    #[test]
    fn test_entity_path_rehardening_is_reproducible() {
        // A second pass is not guaranteed to be a no-op, but it is deterministic.
        let text = "Jane: jane@acme.com";
        let hardener = with_spans(vec![span(0, 4, "PERSON")]);
        let once = hardener.harden(text);
        let twice_a = hardener.harden(&once);
        let twice_b = hardener.harden(&once);
        assert_eq!(twice_a, twice_b);
    }
}
