//! HTTP error mapping.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::response::ApiErrorResponse;
use crate::application::ValidationError;

/// Errors returned by the REST handlers.
///
/// Every variant renders as a JSON [`ApiErrorResponse`]; none of them leave
/// the store partially updated.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid input.
    #[error("{message}")]
    BadRequest {
        /// Summary for display.
        message: String,
        /// Specific problem, if known.
        detail: Option<String>,
    },

    /// The body was refused before decoding, e.g. too large or not JSON.
    #[error("{message}")]
    Rejected {
        /// Status chosen by the extractor.
        status: StatusCode,
        /// Summary for display.
        message: String,
        /// Extractor's explanation.
        detail: String,
    },

    /// The addressed record does not exist.
    #[error("{message}")]
    NotFound {
        /// Summary for display.
        message: String,
    },
}

impl ApiError {
    /// Build a `BadRequest`.
    pub fn bad_request(message: impl Into<String>, detail: impl Into<Option<String>>) -> Self {
        Self::BadRequest {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Build a `NotFound`.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// A body that failed to decode, reported under `message`.
    ///
    /// Malformed or mistyped JSON is a 400; transport-level refusals keep
    /// the extractor's status (413, 415).
    pub fn from_json_rejection(message: &str, rejection: &JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                Self::bad_request(message, rejection.body_text())
            }
            _ => Self::Rejected {
                status: rejection.status(),
                message: message.to_string(),
                detail: rejection.body_text(),
            },
        }
    }

    /// A field rule failure, reported under `message`.
    pub fn from_validation(message: &str, err: &ValidationError) -> Self {
        Self::bad_request(message, err.to_string())
    }

    /// A path segment that is not a valid order id.
    pub fn invalid_order_id(rejection: &PathRejection) -> Self {
        Self::bad_request("Invalid order ID", rejection.body_text())
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Rejected { status, .. } => match *status {
                StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
                StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
                _ => "REJECTED",
            },
            Self::NotFound { .. } => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code().to_string();
        let body = match self {
            Self::BadRequest { message, detail } => ApiErrorResponse {
                code,
                message,
                error: detail,
            },
            Self::Rejected {
                message, detail, ..
            } => ApiErrorResponse {
                code,
                message,
                error: Some(detail),
            },
            Self::NotFound { message } => ApiErrorResponse {
                code,
                message,
                error: None,
            },
        };

        (status, Json(body)).into_response()
    }
}
