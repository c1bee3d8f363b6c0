//! Error types for Sentinel.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Extraction(String),

    #[error("URL not supported. Use LinkedIn, X, or Facebook.")]
    UnsupportedUrl(String),

    #[error("No readable text found in the file.")]
    EmptyText,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Extraction(_) | Self::UnsupportedUrl(_) | Self::EmptyText
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
