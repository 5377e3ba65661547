//! # Auth Subcommand
//!
//! Checks that the Pinata credentials in the environment are accepted.

use anyhow::{Context, Result};

/// Execute the auth subcommand.
pub async fn run_auth() -> Result<u8> {
    let client = crate::connect()?;
    let resp = client
        .pinning()
        .test_authentication()
        .await
        .context("Pinata rejected the credentials")?;
    println!("OK: {}", resp.message);
    Ok(0)
}
