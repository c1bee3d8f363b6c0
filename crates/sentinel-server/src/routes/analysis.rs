//! Analysis routes: direct text, simulated profile URLs, uploaded documents.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use sentinel_protocol::report::preview;
use sentinel_protocol::{simulate_profile, Evaluation, Report};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/process", post(process_text))
        .route("/analyze-url", post(analyze_url))
        .route("/upload", post(upload_document))
}

#[derive(serde::Deserialize)]
struct ContentInput {
    content: String,
}

#[derive(serde::Deserialize)]
struct UrlInput {
    url: String,
}

/// Run the engine on the blocking pool; the recognizer call may block.
async fn evaluate(state: Arc<AppState>, text: String) -> Result<Evaluation, ApiError> {
    tokio::task::spawn_blocking(move || state.engine.evaluate(&text))
        .await
        .map_err(|e| ApiError::Internal(format!("Evaluation task failed: {}", e)))
}

/// POST /process: score and harden submitted text.
async fn process_text(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ContentInput>,
) -> Result<Json<Report>, ApiError> {
    let evaluation = evaluate(state, input.content).await?;
    Ok(Json(Report::from_evaluation(evaluation)))
}

/// POST /analyze-url: score and harden a simulated profile for a social URL.
async fn analyze_url(
    State(state): State<Arc<AppState>>,
    Json(input): Json<UrlInput>,
) -> Result<Json<Report>, ApiError> {
    let profile = simulate_profile(&input.url)?;
    info!("Simulating {:?} profile for handle {:?}", profile.platform, profile.handle);

    let baseline = profile.baseline_risk();
    let evaluation = evaluate(state, profile.text.clone()).await?;
    Ok(Json(
        Report::from_evaluation(evaluation)
            .with_original_risk(baseline)
            .with_extracted_text(profile.text),
    ))
}

/// POST /upload: extract text from a document (multipart field `file`) and analyze it.
async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Report>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
        upload = Some((filename, bytes));
        break;
    }

    let Some((filename, bytes)) = upload else {
        return Err(ApiError::BadRequest("Missing file field".into()));
    };
    info!("Analyzing upload {} ({} bytes)", filename, bytes.len());

    let preview_chars = state.config.preview_chars;
    let (text, evaluation) = tokio::task::spawn_blocking(move || {
        let text = sentinel_ingest::extract_text(&filename, &bytes)?;
        let evaluation = state.engine.evaluate(&text);
        Ok::<_, sentinel_core::Error>((text, evaluation))
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Extraction task failed: {}", e)))??;

    Ok(Json(
        Report::from_evaluation(evaluation).with_extracted_text(preview(&text, preview_chars)),
    ))
}
