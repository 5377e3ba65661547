//! Pinata client error types.

/// Errors from Pinata API and gateway calls.
#[derive(Debug, thiserror::Error)]
pub enum PinataError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Pinata (or the gateway) returned a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

/// Map a send result to a response with a 2xx status.
pub(crate) async fn ensure_success(
    endpoint: &str,
    sent: Result<reqwest::Response, reqwest::Error>,
) -> Result<reqwest::Response, PinataError> {
    let resp = sent.map_err(|source| PinataError::Http {
        endpoint: endpoint.to_string(),
        source,
    })?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(PinataError::ApiError {
            endpoint: endpoint.to_string(),
            status,
            body,
        });
    }

    Ok(resp)
}

/// Decode a JSON response body.
pub(crate) async fn decode_json<T: serde::de::DeserializeOwned>(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<T, PinataError> {
    resp.json().await.map_err(|source| PinataError::Deserialization {
        endpoint: endpoint.to_string(),
        source,
    })
}
