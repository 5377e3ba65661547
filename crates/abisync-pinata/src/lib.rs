//! # abisync-pinata -- Typed Rust client for Pinata
//!
//! Provides typed access to the parts of Pinata abisync uses:
//! - **Pinning** via `api.pinata.cloud` (list, unpin, pin JSON, auth check)
//! - **Gateway** content fetch via `gateway.pinata.cloud/ipfs` (or any
//!   IPFS HTTP gateway)
//!
//! ## Architecture
//!
//! [`PinataClient`] holds one sub-client per remote surface and implements
//! [`PinningService`], the seam the sync workflows are written against.
//!
//! ## Authentication
//!
//! API calls carry the `pinata_api_key` / `pinata_secret_api_key` headers.
//! Gateway calls carry none.
//!
//! ## Retries
//!
//! None. A failed call is returned to the caller as-is.

pub mod config;
pub mod error;
pub mod gateway;
pub mod pinning;
pub mod service;
pub mod types;

pub use config::{ConfigError, PinataConfig};
pub use error::PinataError;
pub use service::PinningService;
pub use types::{PinRecord, PinResponse};

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "pinata_api_key";
/// Header carrying the API secret.
pub const API_SECRET_HEADER: &str = "pinata_secret_api_key";

/// Top-level Pinata client. Holds sub-clients for the API and the gateway.
#[derive(Debug, Clone)]
pub struct PinataClient {
    pinning: pinning::PinningClient,
    gateway: gateway::GatewayClient,
}

impl PinataClient {
    /// Create a new Pinata client from configuration.
    pub fn new(config: PinataConfig) -> Result<Self, PinataError> {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, credential_header(&config.api_key)?);
        headers.insert(API_SECRET_HEADER, credential_header(&config.api_secret)?);

        let api_http = http_builder(config.timeout_secs)
            .default_headers(headers)
            .build()
            .map_err(|e| PinataError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        let gateway_http = http_builder(config.timeout_secs)
            .build()
            .map_err(|e| PinataError::Http {
                endpoint: "gateway_init".into(),
                source: e,
            })?;

        Ok(Self {
            pinning: pinning::PinningClient::new(api_http, config.api_url, config.page_limit),
            gateway: gateway::GatewayClient::new(gateway_http, config.gateway_url),
        })
    }

    /// Access the pinning API client.
    pub fn pinning(&self) -> &pinning::PinningClient {
        &self.pinning
    }

    /// Access the gateway client.
    pub fn gateway(&self) -> &gateway::GatewayClient {
        &self.gateway
    }
}

fn http_builder(timeout_secs: Option<u64>) -> reqwest::ClientBuilder {
    let builder = reqwest::Client::builder();
    match timeout_secs {
        Some(secs) => builder.timeout(Duration::from_secs(secs)),
        None => builder,
    }
}

fn credential_header(value: &str) -> Result<HeaderValue, PinataError> {
    let mut header =
        HeaderValue::from_str(value).map_err(|_| PinataError::Config(ConfigError::InvalidCredential))?;
    header.set_sensitive(true);
    Ok(header)
}

/// Join `path` onto `base`, tolerating a base with or without a trailing `/`.
pub(crate) fn endpoint_url(base: &url::Url, path: &str) -> String {
    format!("{}/{}", base.as_str().trim_end_matches('/'), path.trim_start_matches('/'))
}
