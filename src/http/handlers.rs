//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the parsing
//! pipeline. Validation that must happen before the pipeline runs (empty
//! text) lives here, at the transport boundary.

use axum::Json;

use super::dto::{HealthResponse, ParseRequest};
use super::error::AppError;
use crate::models::ParseResult;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok".to_string(), version: "v1".to_string() })
}

/// POST /v1/parse
///
/// Parse a natural-language constraint sentence into a structured record.
/// Empty or whitespace-only text is rejected without invoking the pipeline.
pub async fn parse_constraint(Json(request): Json<ParseRequest>) -> HandlerResult<ParseResult> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("no constraint text provided".to_string()));
    }

    Ok(Json(crate::parser::parse_constraint(text)))
}
