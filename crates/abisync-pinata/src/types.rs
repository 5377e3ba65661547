//! Request/response types matching the Pinata pinning API.
//!
//! Fields use `#[serde(default)]` where Pinata may omit or null them.
//! Unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value of the `status` filter selecting live pins.
pub const STATUS_PINNED: &str = "pinned";

/// CID version requested for uploads. Version 0 keeps `Qm...` hashes.
pub const CID_VERSION: u8 = 0;

/// User metadata attached to a pin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PinMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub keyvalues: Option<Value>,
}

/// One row of `GET /data/pinList`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub ipfs_pin_hash: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub date_pinned: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_unpinned: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: PinMetadata,
}

impl PinRecord {
    /// Whether the pin's metadata name is exactly `name`.
    pub fn is_named(&self, name: &str) -> bool {
        self.metadata.name.as_deref() == Some(name)
    }
}

/// A page of `GET /data/pinList`.
#[derive(Debug, Clone, Deserialize)]
pub struct PinList {
    /// Total matching pins across all pages.
    pub count: u64,
    #[serde(default)]
    pub rows: Vec<PinRecord>,
}

/// Response of `POST /pinning/pinJSONToIPFS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PinResponse {
    pub ipfs_hash: String,
    #[serde(default)]
    pub pin_size: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, rename = "isDuplicate")]
    pub is_duplicate: Option<bool>,
}

/// Body of `POST /pinning/pinJSONToIPFS`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PinJsonRequest<'a> {
    pub pinata_content: &'a Value,
    pub pinata_metadata: PinNameMetadata<'a>,
    pub pinata_options: PinOptions,
}

#[derive(Debug, Serialize)]
pub(crate) struct PinNameMetadata<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PinOptions {
    pub cid_version: u8,
}

/// Response of `GET /data/testAuthentication`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticationResponse {
    #[serde(default)]
    pub message: String,
}
