//! Content fetch through an IPFS HTTP gateway.
//!
//! The gateway client never carries the API credentials: gateways can be
//! third-party hosts.

use serde_json::Value;

use crate::error::{decode_json, ensure_success, PinataError};

/// Client for `GET {gateway_url}/{hash}`.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl GatewayClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// URL the content for `hash` is served from.
    pub fn content_url(&self, hash: &str) -> String {
        crate::endpoint_url(&self.base_url, hash)
    }

    /// Fetch pinned content and decode it as JSON.
    pub async fn fetch_json(&self, hash: &str) -> Result<Value, PinataError> {
        let endpoint = format!("GET gateway/{hash}");
        let url = self.content_url(hash);
        tracing::debug!(%url, "fetching pinned content");

        let sent = self.http.get(&url).send().await;
        let resp = ensure_success(&endpoint, sent).await?;
        decode_json(&endpoint, resp).await
    }
}
