//! Shared application state.

use sentinel_core::SentinelConfig;
use sentinel_infer::EntityCapability;
use sentinel_protocol::SentinelEngine;

/// Shared application state accessible from all route handlers.
///
/// Everything here is read-only after startup.
pub struct AppState {
    pub config: SentinelConfig,
    pub engine: SentinelEngine,
}

impl AppState {
    pub fn new(config: SentinelConfig, capability: EntityCapability) -> Self {
        let engine = SentinelEngine::with_capability(capability);
        tracing::info!("Hardening mode: {} ({})", engine.mode(), engine.capability().describe());
        Self { config, engine }
    }
}
