//! Claims handlers

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Json,
};
use tracing::debug;

use domain_intake::Document;
use domain_triage::{ClaimRecord, RoutingDecision};

use crate::dto::claims::ClaimTriageResponse;
use crate::{error::ApiError, AppState};

/// Name of the multipart part carrying the claim document
pub const FILE_FIELD: &str = "file";

/// Uploads a claim document and triages it
pub async fn upload_claim(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ClaimTriageResponse>, ApiError> {
    let mut multipart = multipart.map_err(|r| ApiError::BadRequest(r.body_text()))?;

    let document = read_document(&mut multipart, state.config.max_upload_bytes).await?;
    let outcome = state.intake.process(document).await?;

    Ok(Json(outcome.into()))
}

/// Triages an already-structured claim record
pub async fn evaluate_claim(
    State(state): State<AppState>,
    record: Result<Json<ClaimRecord>, JsonRejection>,
) -> Result<Json<RoutingDecision>, ApiError> {
    let Json(record) = record?;
    Ok(Json(state.intake.evaluate(&record)))
}

/// Finds the `file` part and buffers it, skipping any other parts
async fn read_document(multipart: &mut Multipart, max_bytes: usize) -> Result<Document, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            debug!(part = ?field.name(), "Skipping multipart part");
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await?;

        if bytes.len() > max_bytes {
            return Err(ApiError::PayloadTooLarge(format!(
                "Document '{}' is {} bytes; the limit is {} bytes",
                filename,
                bytes.len(),
                max_bytes
            )));
        }

        return Ok(Document::new(filename, bytes.to_vec()));
    }

    Err(ApiError::BadRequest(format!(
        "Multipart form has no '{FILE_FIELD}' part"
    )))
}
