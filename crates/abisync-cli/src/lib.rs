//! # abisync-cli -- Keep Contract ABIs Pinned on IPFS
//!
//! Provides the `abisync` command-line interface.
//!
//! ## Subcommands
//!
//! - `abisync upload <NAME>`: bundle the ABIs listed in `.uploadAbi.json`
//!   and pin them under `NAME`, replacing any previous pin.
//! - `abisync download <NAME>`: fetch the bundle pinned under `NAME` and
//!   rebuild `artifacts/contracts/<path>/<Contract>/<Contract>.json`.
//! - `abisync pins <NAME>`: list pins carrying `NAME`.
//! - `abisync auth`: check the Pinata credentials.
//!
//! ```bash
//! export PINATA_API_KEY=... PINATA_API_SECRET=...
//! abisync upload my-dapp
//! abisync download my-dapp --artifacts-dir artifacts
//! ```
//!
//! Library code returns errors; only `main` decides the exit status.

pub mod auth;
pub mod download;
pub mod pins;
pub mod upload;
pub mod workflow;

use anyhow::{Context, Result};

use abisync_pinata::{PinataClient, PinataConfig};

/// Build a Pinata client from the environment.
pub fn connect() -> Result<PinataClient> {
    let config = PinataConfig::from_env().context("cannot load Pinata configuration")?;
    tracing::debug!(?config, "loaded Pinata configuration");
    PinataClient::new(config).context("cannot build Pinata client")
}
