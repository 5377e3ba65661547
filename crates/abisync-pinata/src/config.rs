//! Pinata client configuration.
//!
//! Credentials come from the environment; base URLs default to Pinata's
//! production API and public gateway and can be overridden for staging,
//! dedicated gateways, or tests.

use url::Url;
use zeroize::Zeroizing;

/// Environment variable holding the Pinata API key.
pub const API_KEY_VAR: &str = "PINATA_API_KEY";
/// Environment variable holding the Pinata API secret.
pub const API_SECRET_VAR: &str = "PINATA_API_SECRET";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "PINATA_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "https://api.pinata.cloud";
const DEFAULT_GATEWAY_URL: &str = "https://gateway.pinata.cloud/ipfs";

/// Largest page Pinata serves from `/data/pinList`.
pub const DEFAULT_PAGE_LIMIT: u32 = 1000;

/// Configuration for connecting to Pinata.
///
/// Custom `Debug` implementation redacts the credentials.
#[derive(Clone)]
pub struct PinataConfig {
    /// Pinning API base URL. Default: <https://api.pinata.cloud>
    pub api_url: Url,
    /// Gateway base; content is fetched from `{gateway_url}/{hash}`.
    /// Default: <https://gateway.pinata.cloud/ipfs>
    pub gateway_url: Url,
    pub api_key: Zeroizing<String>,
    pub api_secret: Zeroizing<String>,
    /// Request timeout in seconds. `None` leaves the HTTP client default.
    pub timeout_secs: Option<u64>,
    /// Rows requested per `/data/pinList` page.
    pub page_limit: u32,
}

impl std::fmt::Debug for PinataConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinataConfig")
            .field("api_url", &self.api_url)
            .field("gateway_url", &self.gateway_url)
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("page_limit", &self.page_limit)
            .finish()
    }
}

impl PinataConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PINATA_API_KEY` (required)
    /// - `PINATA_API_SECRET` (required)
    /// - `PINATA_API_URL` (default: `https://api.pinata.cloud`)
    /// - `PINATA_GATEWAY_URL` (default: `https://gateway.pinata.cloud/ipfs`)
    /// - `PINATA_TIMEOUT_SECS` (default: unset, no timeout)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = required_var(API_KEY_VAR)?;
        let api_secret = required_var(API_SECRET_VAR)?;

        Ok(Self {
            api_url: env_url("PINATA_API_URL", DEFAULT_API_URL)?,
            gateway_url: env_url("PINATA_GATEWAY_URL", DEFAULT_GATEWAY_URL)?,
            api_key,
            api_secret,
            timeout_secs: env_timeout(TIMEOUT_VAR)?,
            page_limit: DEFAULT_PAGE_LIMIT,
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// The API is served at the root and the gateway under `/ipfs`.
    pub fn local_mock(base_url: &str, key: &str, secret: &str) -> Result<Self, ConfigError> {
        let api_url =
            Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e.to_string()))?;
        let gateway_url = api_url
            .join("ipfs")
            .map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e.to_string()))?;
        Ok(Self {
            api_url,
            gateway_url,
            api_key: Zeroizing::new(key.to_string()),
            api_secret: Zeroizing::new(secret.to_string()),
            timeout_secs: Some(5),
            page_limit: DEFAULT_PAGE_LIMIT,
        })
    }
}

/// An unset or empty credential variable counts as missing.
fn required_var(var: &'static str) -> Result<Zeroizing<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(Zeroizing::new(value)),
        _ => Err(ConfigError::MissingCredentials(var)),
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// An unset or empty timeout means none; anything else must be whole seconds.
fn env_timeout(var: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidTimeout(var.to_string(), raw)),
        _ => Ok(None),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set (both PINATA_API_KEY and PINATA_API_SECRET are required)")]
    MissingCredentials(&'static str),
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid timeout for {0}: {1:?} is not a whole number of seconds")]
    InvalidTimeout(String, String),
    #[error("credential contains characters not allowed in an HTTP header")]
    InvalidCredential,
}
