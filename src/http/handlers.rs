//! Request handlers for the relay endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::http::response::{decode_upstream_body, success_envelope, RelayError};
use crate::http::server::AppState;
use crate::item::FridgeItem;

/// Status payload for orchestration probes.
#[derive(Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

/// `POST /add-item`
///
/// Validates the record's date fields, forwards it to the hosted table, and
/// translates the reply: success envelope for accepted inserts, a `detail`
/// body mirroring the upstream status otherwise.
pub async fn add_item(
    State(state): State<AppState>,
    Json(item): Json<FridgeItem>,
) -> Result<Json<Value>, RelayError> {
    let item = item.normalized().map_err(|err| {
        tracing::warn!(field = err.field, value = %err.value, "Rejecting item with invalid date");
        RelayError::InvalidDate
    })?;

    tracing::debug!(name = %item.name, user_id = %item.user_id, "Forwarding item upstream");

    let reply = state.upstream.insert_item(&item).await?;
    let data = decode_upstream_body(&reply.body);

    if reply.status >= 400 {
        tracing::error!(status = reply.status, body = %data, "Upstream rejected item");
        return Err(RelayError::Upstream {
            status: reply.status,
            detail: data,
        });
    }

    Ok(Json(success_envelope(data)))
}
