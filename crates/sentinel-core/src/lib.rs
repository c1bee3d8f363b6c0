//! Sentinel Core: configuration, error type, hardening capability modes.

pub mod capabilities;
pub mod config;
pub mod error;

pub use capabilities::HardeningMode;
pub use config::SentinelConfig;
pub use error::{Error, Result};
