//! Typed client for the Pinata pinning API.
//!
//! Base URL: `api.pinata.cloud`
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/data/pinList` | List pins (filtered, paged) |
//! | DELETE | `/pinning/unpin/{hash}` | Unpin content |
//! | POST   | `/pinning/pinJSONToIPFS` | Upload and pin a JSON document |
//! | GET    | `/data/testAuthentication` | Check credentials |

use abisync_core::PinName;
use serde_json::Value;

use crate::error::{decode_json, ensure_success, PinataError};
use crate::types::{
    AuthenticationResponse, PinJsonRequest, PinList, PinNameMetadata, PinOptions, PinRecord,
    PinResponse, CID_VERSION, STATUS_PINNED,
};

/// Client for the Pinata pinning API.
#[derive(Debug, Clone)]
pub struct PinningClient {
    http: reqwest::Client,
    base_url: url::Url,
    page_limit: u32,
}

impl PinningClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, page_limit: u32) -> Self {
        Self {
            http,
            base_url,
            page_limit: page_limit.max(1),
        }
    }

    /// Fetch one page of pinned records filtered by metadata name.
    ///
    /// Calls `GET {base_url}/data/pinList?status=pinned&metadata[name]={name}`.
    pub async fn list_page(&self, name: &PinName, offset: u64) -> Result<PinList, PinataError> {
        let endpoint = "GET /data/pinList";
        let url = crate::endpoint_url(&self.base_url, "data/pinList");
        let limit = self.page_limit.to_string();
        let offset = offset.to_string();

        let sent = self
            .http
            .get(&url)
            .query(&[
                ("status", STATUS_PINNED),
                ("metadata[name]", name.as_str()),
                ("pageLimit", limit.as_str()),
                ("pageOffset", offset.as_str()),
            ])
            .send()
            .await;
        let resp = ensure_success(endpoint, sent).await?;
        decode_json(endpoint, resp).await
    }

    /// List every pinned record whose metadata name is exactly `name`.
    ///
    /// Pages through `/data/pinList` until `count` rows have been seen or
    /// a short page comes back. Pinata's name filter is not an exact match,
    /// so rows carrying a different name are dropped here.
    pub async fn list(&self, name: &PinName) -> Result<Vec<PinRecord>, PinataError> {
        let mut seen: u64 = 0;
        let mut rows = Vec::new();

        loop {
            let page = self.list_page(name, seen).await?;
            let page_len = page.rows.len() as u64;
            seen += page_len;
            rows.extend(page.rows);

            if page_len == 0 || page_len < u64::from(self.page_limit) || seen >= page.count {
                break;
            }
            tracing::debug!(name = %name, seen, count = page.count, "fetching next pin list page");
        }

        let total = rows.len();
        rows.retain(|row| row.is_named(name.as_str()));
        if rows.len() != total {
            tracing::debug!(
                name = %name,
                dropped = total - rows.len(),
                "ignored pins whose name only partially matched"
            );
        }
        Ok(rows)
    }

    /// Unpin content by hash.
    ///
    /// Calls `DELETE {base_url}/pinning/unpin/{hash}`.
    pub async fn unpin(&self, hash: &str) -> Result<(), PinataError> {
        let endpoint = format!("DELETE /pinning/unpin/{hash}");
        let url = crate::endpoint_url(&self.base_url, &format!("pinning/unpin/{hash}"));

        let sent = self.http.delete(&url).send().await;
        ensure_success(&endpoint, sent).await?;
        Ok(())
    }

    /// Upload `content` and pin it under `name` as CIDv0.
    ///
    /// Calls `POST {base_url}/pinning/pinJSONToIPFS`.
    pub async fn pin_json(&self, content: &Value, name: &PinName) -> Result<PinResponse, PinataError> {
        let endpoint = "POST /pinning/pinJSONToIPFS";
        let url = crate::endpoint_url(&self.base_url, "pinning/pinJSONToIPFS");
        let body = PinJsonRequest {
            pinata_content: content,
            pinata_metadata: PinNameMetadata {
                name: name.as_str(),
            },
            pinata_options: PinOptions {
                cid_version: CID_VERSION,
            },
        };

        let sent = self.http.post(&url).json(&body).send().await;
        let resp = ensure_success(endpoint, sent).await?;
        decode_json(endpoint, resp).await
    }

    /// Check that the configured credentials are accepted.
    ///
    /// Calls `GET {base_url}/data/testAuthentication`.
    pub async fn test_authentication(&self) -> Result<AuthenticationResponse, PinataError> {
        let endpoint = "GET /data/testAuthentication";
        let url = crate::endpoint_url(&self.base_url, "data/testAuthentication");

        let sent = self.http.get(&url).send().await;
        let resp = ensure_success(endpoint, sent).await?;
        decode_json(endpoint, resp).await
    }
}
