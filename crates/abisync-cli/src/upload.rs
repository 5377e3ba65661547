//! # Upload Subcommand
//!
//! Bundles the ABIs listed in the manifest and pins them under a name,
//! replacing any earlier pin with that name.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use abisync_core::layout::DEFAULT_ARTIFACTS_DIR;
use abisync_core::manifest::DEFAULT_MANIFEST;
use abisync_core::{ArtifactLayout, PinName};
use abisync_pinata::PinningService;

use crate::workflow::{upload_manifest, SyncError};

/// Arguments for the `abisync upload` subcommand.
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Name to pin the bundle under.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Manifest listing the contracts to include.
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Compiler artifacts directory.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,
}

/// Execute the upload subcommand.
pub async fn run_upload(args: &UploadArgs) -> Result<u8> {
    PinName::new(args.name.as_str()).map_err(SyncError::from)?;
    let client = crate::connect()?;
    upload_with(&client, args).await
}

/// Upload through an already constructed service.
pub async fn upload_with<S: PinningService>(service: &S, args: &UploadArgs) -> Result<u8> {
    let layout = ArtifactLayout::new(&args.artifacts_dir);
    let report = upload_manifest(service, &args.name, &args.manifest, &layout).await?;

    for hash in &report.replaced {
        println!("UNPINNED: {hash}");
    }
    println!(
        "OK: pinned {} cid={} contracts={}",
        report.name,
        report.pin.ipfs_hash,
        report.contracts.join(",")
    );
    Ok(0)
}
