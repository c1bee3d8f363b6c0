//! Capability status route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use sentinel_ingest::DocumentKind;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

/// GET /status: active hardening path and accepted upload formats.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let capability = state.engine.capability();
    Json(serde_json::json!({
        "entity_recognition": capability.is_available(),
        "hardening_mode": state.engine.mode(),
        "recognizer": capability.recognizer().map(|r| r.name().to_string()),
        "formats": DocumentKind::supported_extensions(),
    }))
}
