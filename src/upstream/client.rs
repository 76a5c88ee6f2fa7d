//! HTTP client for the hosted table-insert endpoint.

use reqwest::Client;

use crate::config::UpstreamConfig;
use crate::item::FridgeItem;
use crate::upstream::types::{UpstreamError, UpstreamReply, UpstreamResult};

/// Fixed table-insert path under the configured base URL.
const INSERT_PATH: &str = "/rest/v1/fridge_items";

/// Client wrapper for the upstream store.
///
/// Cheap to clone: holds the base URL and service credential next to a shared
/// `reqwest::Client`. Constructed once at startup from validated
/// configuration and injected into the handler state.
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
    service_key: String,
}

impl UpstreamClient {
    /// Construct a client from upstream configuration.
    ///
    /// No explicit timeout is set; the transport's defaults apply.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let http = Client::builder().build().map_err(UpstreamError::Client)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        })
    }

    /// Insert one item into the hosted table.
    ///
    /// Sends the record as JSON with the static credential headers and
    /// returns the upstream status plus raw body text. Transport failures
    /// surface as [`UpstreamError::Transport`].
    pub async fn insert_item(&self, item: &FridgeItem) -> UpstreamResult<UpstreamReply> {
        let url = self.insert_url();

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(item)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, url = %url, "Upstream replied");
        Ok(UpstreamReply { status, body })
    }

    fn insert_url(&self) -> String {
        format!("{}{}", self.base_url, INSERT_PATH)
    }
}
