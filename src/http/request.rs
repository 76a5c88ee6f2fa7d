//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for requests arriving without one
//! - Propagate the ID onto the response so one value correlates client,
//!   relay and upstream log lines
//!
//! # Design Decisions
//! - Request ID added as early as possible so tracing spans carry it
//! - Caller-supplied IDs are preserved, never overwritten

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header carrying the correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Mints a fresh UUID v4 for requests arriving without an id.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Layer stamping missing request ids onto inbound requests.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), MakeRequestUuid)
}

/// Layer copying the request id onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}
