//! # Download Subcommand
//!
//! Fetches the bundle pinned under a name and writes one artifact per
//! contract into the artifacts directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use abisync_core::layout::DEFAULT_ARTIFACTS_DIR;
use abisync_core::{ArtifactLayout, PinName};
use abisync_pinata::PinningService;

use crate::workflow::{download_bundle, DownloadOptions, SyncError};

/// Arguments for the `abisync download` subcommand.
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Name the bundle was pinned under.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Artifacts directory to write into.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Name each output directory after its source file (`Token.sol/`)
    /// instead of the contract (`Token/`).
    #[arg(long)]
    pub with_source_extension: bool,
}

/// Execute the download subcommand.
pub async fn run_download(args: &DownloadArgs) -> Result<u8> {
    PinName::new(args.name.as_str()).map_err(SyncError::from)?;
    let client = crate::connect()?;
    download_with(&client, args).await
}

/// Download through an already constructed service.
pub async fn download_with<S: PinningService>(service: &S, args: &DownloadArgs) -> Result<u8> {
    let layout = ArtifactLayout::new(&args.artifacts_dir);
    let options = DownloadOptions {
        with_source_extension: args.with_source_extension,
    };
    let report = download_bundle(service, &args.name, &layout, options).await?;

    if report.is_ambiguous() {
        println!(
            "WARN: {} pins are named {}; restored from {}",
            report.matched, report.name, report.hash
        );
    }
    for artifact in &report.written {
        println!("WROTE: {}", artifact.path.display());
    }
    println!(
        "OK: restored {} contracts from {} cid={}",
        report.written.len(),
        report.name,
        report.hash
    );
    Ok(0)
}
