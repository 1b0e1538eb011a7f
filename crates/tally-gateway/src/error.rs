//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::upstream::UpstreamError;

/// API error type.
///
/// Error bodies use the backend's `{"detail": ...}` wire shape so a relayed
/// upstream error and a gateway-originated one look the same to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or empty session cookie.
    #[error("not authenticated")]
    Unauthorized,

    /// The backend answered with a structured error; relay it as-is.
    #[error("upstream error: {status} - {detail}")]
    Upstream {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream error message.
        detail: String,
    },

    /// Anything else. The cause is logged, never sent to the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorDetail {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Not authenticated".to_string()),
            Self::Upstream { status, detail } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                detail,
            ),
            Self::Internal(cause) => {
                tracing::error!(error = %cause, "Internal gateway error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDetail { detail })).into_response()
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Api { status, detail } => Self::Upstream { status, detail },
            UpstreamError::Http(e) => Self::Internal(e.to_string()),
            UpstreamError::Unexpected { status } => {
                Self::Internal(format!("upstream returned HTTP {status} with no error detail"))
            }
        }
    }
}
