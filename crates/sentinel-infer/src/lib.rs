//! Sentinel Infer: named-entity recognition as an optional capability.
//!
//! Provides the `EntityRecognizer` trait consumed by the Text Hardener.
//! When the `http-ner` feature is enabled and `SENTINEL_NER_URL` points at a
//! reachable spaCy-style service, `HttpRecognizer` is used. Without it the
//! capability resolves to `Unavailable` and hardening runs the lexical path.

pub mod http_recognizer;
pub mod recognizer;

pub use recognizer::{
    EntityCapability, EntityLabel, EntityRecognizer, EntitySpan, RecognizerError,
    StaticRecognizer,
};

#[cfg(feature = "http-ner")]
pub use http_recognizer::HttpRecognizer;

use sentinel_core::SentinelConfig;

/// Resolve the entity-recognition capability for this process.
///
/// Called once at startup. Every failure mode degrades to `Unavailable`;
/// nothing here is surfaced as an error.
///
/// With `http-ner` enabled the reachability check uses a blocking client, so async callers
/// must run this on a blocking thread.
pub fn detect_capability(config: &SentinelConfig) -> EntityCapability {
    #[cfg(feature = "http-ner")]
    {
        if let Some(url) = &config.ner_url {
            let timeout = std::time::Duration::from_millis(config.ner_timeout_ms);
            match HttpRecognizer::connect(url, timeout) {
                Ok(recognizer) => {
                    tracing::info!("Entity recognizer available at {}", url);
                    return EntityCapability::available(recognizer);
                }
                Err(e) => {
                    tracing::warn!("Entity recognizer unavailable: {}. Using lexical fallback.", e);
                    return EntityCapability::unavailable(e.to_string());
                }
            }
        }
    }

    #[cfg(not(feature = "http-ner"))]
    {
        if config.ner_url.is_some() {
            tracing::warn!("SENTINEL_NER_URL is set but the http-ner feature is disabled");
        }
    }

    let reason = if cfg!(feature = "http-ner") {
        "SENTINEL_NER_URL not set"
    } else {
        "http-ner feature disabled"
    };
    tracing::info!("Entity recognition unavailable ({}). Using lexical fallback.", reason);
    EntityCapability::unavailable(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_without_endpoint_is_unavailable() {
        let config = SentinelConfig::default();
        let capability = detect_capability(&config);
        assert!(!capability.is_available());
        assert!(capability.recognizer().is_none());
    }

    #[test]
    fn test_detect_unreachable_endpoint_is_unavailable() {
        let config = SentinelConfig {
            ner_url: Some("http://127.0.0.1:9/ents".into()),
            ner_timeout_ms: 200,
            ..SentinelConfig::default()
        };
        let capability = detect_capability(&config);
        assert!(!capability.is_available());
    }
}
