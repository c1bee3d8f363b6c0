//! Configuration resolved from the environment at startup.

use serde::{Deserialize, Serialize};

/// Top-level Sentinel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentinelConfig {
    /// Address the HTTP server binds to.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
    /// Endpoint of an external entity recognizer, if one is deployed.
    pub ner_url: Option<String>,
    /// Per-call timeout for the entity recognizer in milliseconds.
    pub ner_timeout_ms: u64,
    /// Number of characters of extracted text echoed back on upload.
    pub preview_chars: usize,
    /// Upload body limit in megabytes.
    pub max_upload_mb: usize,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            ner_url: None,
            ner_timeout_ms: 5000,
            preview_chars: 1500,
            max_upload_mb: 20,
        }
    }
}

impl SentinelConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// Values that fail to parse keep their defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("SENTINEL_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let ner_url = lookup("SENTINEL_NER_URL").filter(|u| !u.trim().is_empty());
        let ner_timeout_ms = lookup("SENTINEL_NER_TIMEOUT_MS")
            .and_then(|t| t.parse().ok())
            .unwrap_or(defaults.ner_timeout_ms);
        let preview_chars = lookup("SENTINEL_PREVIEW_CHARS")
            .and_then(|n| n.parse().ok())
            .unwrap_or(defaults.preview_chars);
        let max_upload_mb = lookup("SENTINEL_MAX_UPLOAD_MB")
            .and_then(|n| n.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.max_upload_mb);

        if let Some(url) = &ner_url {
            tracing::debug!("Entity recognizer endpoint configured: {}", url);
        }

        Self {
            host,
            port,
            ner_url,
            ner_timeout_ms,
            preview_chars,
            max_upload_mb,
        }
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}
