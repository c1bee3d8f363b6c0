//! Remote entity recognizer speaking the spaCy-style `{"ents": [...]}` shape.
//!
//! Requires the `http-ner` feature. Calls are blocking; the server runs them
//! on the blocking thread pool.

#[cfg(feature = "http-ner")]
mod inner {
    use std::time::Duration;

    use reqwest::blocking::Client;
    use serde::Deserialize;
    use tracing::debug;

    use crate::recognizer::{EntityRecognizer, EntitySpan, RecognizerError};

    #[derive(Deserialize)]
    struct EntsResponse {
        #[serde(default)]
        ents: Vec<EntitySpan>,
    }

    /// Entity recognizer backed by an HTTP service.
    pub struct HttpRecognizer {
        client: Client,
        url: String,
    }

    impl HttpRecognizer {
        /// Build a client for `url` and check it once with an empty document.
        pub fn connect(url: &str, timeout: Duration) -> Result<Self, RecognizerError> {
            let client = Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| RecognizerError::Unreachable(e.to_string()))?;

            let recognizer = Self {
                client,
                url: url.to_string(),
            };
            recognizer.recognize("")?;
            Ok(recognizer)
        }
    }

    impl EntityRecognizer for HttpRecognizer {
        fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
            let response = self
                .client
                .post(&self.url)
                .json(&serde_json::json!({ "text": text }))
                .send()
                .map_err(|e| RecognizerError::Unreachable(e.to_string()))?;

            if !response.status().is_success() {
                return Err(RecognizerError::Unreachable(format!(
                    "HTTP {} from {}",
                    response.status(),
                    self.url
                )));
            }

            let body: EntsResponse = response
                .json()
                .map_err(|e| RecognizerError::InvalidResponse(e.to_string()))?;
            debug!("Recognizer returned {} entities", body.ents.len());
            Ok(body.ents)
        }

        fn name(&self) -> &str {
            "http"
        }
    }
}

#[cfg(feature = "http-ner")]
pub use inner::HttpRecognizer;
