//! Response translation.
//!
//! # Responsibilities
//! - Decode upstream bodies as JSON, falling back to a raw-text wrapper
//! - Wrap accepted inserts in the success envelope
//! - Map relay errors to HTTP status codes and `detail` bodies
//!
//! # Design Decisions
//! - Upstream failure bodies are relayed verbatim inside `detail`, status
//!   included, so callers see exactly what the store said
//! - A body that is not JSON (empty bodies included) becomes
//!   `{"message": <raw text>}` rather than an opaque decode error

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Fixed client-facing message for date validation failures.
pub const INVALID_DATE_MESSAGE: &str = "Invalid date format. Use YYYY-MM-DD";

/// Errors surfaced to the caller by the relay handler.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A date field failed calendar-date validation; upstream is never
    /// called.
    #[error("{}", INVALID_DATE_MESSAGE)]
    InvalidDate,

    /// Upstream answered with a failure status; relayed verbatim.
    #[error("upstream rejected the request with status {status}")]
    Upstream { status: u16, detail: Value },

    /// Upstream could not be reached at all.
    #[error(transparent)]
    Unreachable(#[from] UpstreamError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            RelayError::InvalidDate => (
                StatusCode::BAD_REQUEST,
                Value::String(INVALID_DATE_MESSAGE.to_string()),
            ),
            RelayError::Upstream { status, detail } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                detail,
            ),
            RelayError::Unreachable(err) => {
                tracing::error!(error = %err, "Upstream request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    Value::String("upstream request failed".to_string()),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Decode an upstream body as JSON, substituting `{"message": <raw text>}`
/// when the body is not valid JSON.
pub fn decode_upstream_body(body: &str) -> Value {
    match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => json!({ "message": body }),
    }
}

/// Wrap a decoded upstream body in the success envelope.
pub fn success_envelope(data: Value) -> Value {
    json!({ "success": true, "data": data })
}
