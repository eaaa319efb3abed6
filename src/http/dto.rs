//! Data Transfer Objects for the HTTP API.
//!
//! The parse response is the [`crate::models::ParseResult`] record itself,
//! which already derives `Serialize`; only the request and health shapes are
//! defined here.

use serde::{Deserialize, Serialize};

/// Request body for parsing a constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    /// Natural-language constraint sentence
    pub text: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
