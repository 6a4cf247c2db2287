//! HTTP response DTOs.
//!
//! Successful responses serialize the domain records directly; these are the
//! remaining envelope types.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// API error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code.
    pub code: String,
    /// Summary for display.
    pub message: String,
    /// What exactly was wrong with the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
