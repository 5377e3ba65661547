//! # Sync Workflows
//!
//! The upload and download sequences, written against [`PinningService`]
//! so the remote side can be swapped for a test double.
//!
//! ## Upload
//!
//! 1. Validate the name (no remote call on failure).
//! 2. List pinned records with that name and unpin every one of them.
//! 3. Build the bundle keyed by artifact contract name.
//! 4. Pin it under the name as CIDv0.
//!
//! An existing pin is *replaced*, not treated as an error.
//!
//! ## Download
//!
//! 1. Validate the name (no remote call, no filesystem change on failure).
//! 2. Create the contracts root.
//! 3. List pins; none is `NotFound`, several is a warning and the first wins.
//! 4. Fetch the bundle from the gateway and write each contract back.
//!
//! Writes are not transactional: a failing write leaves earlier files in
//! place and later ones unwritten.

use std::path::Path;

use abisync_core::{
    resolve_manifest, ArtifactLayout, BundleDocument, BundleError, ManifestError, PinName,
    PinNameError, ResolvedContract, WrittenArtifact,
};
use abisync_pinata::{PinResponse, PinataError, PinningService};

/// Errors that end a sync run.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The pin name is empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] PinNameError),

    /// The manifest or an artifact it lists could not be resolved.
    #[error(transparent)]
    ManifestResolution(#[from] ManifestError),

    /// A pin-list, unpin, upload, or fetch call failed.
    #[error("remote service error: {0}")]
    RemoteService(#[from] PinataError),

    /// No pinned content carries the requested name.
    #[error("no pinned content named {name:?}")]
    NotFound { name: String },

    /// The fetched content is not a bundle document.
    #[error("content {hash} is not an ABI bundle: {source}")]
    MalformedBundle {
        hash: String,
        source: serde_json::Error,
    },

    /// The bundle could not be encoded for upload.
    #[error("failed to encode bundle: {0}")]
    Encode(#[source] serde_json::Error),

    /// Writing a fetched contract to disk failed.
    #[error(transparent)]
    Bundle(#[from] BundleError),
}

/// Outcome of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadReport {
    pub name: PinName,
    pub pin: PinResponse,
    /// Hashes unpinned before the upload.
    pub replaced: Vec<String>,
    /// Contract names in the uploaded bundle.
    pub contracts: Vec<String>,
}

/// Download behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadOptions {
    /// Name output directories `<contract><extension>` instead of `<contract>`.
    pub with_source_extension: bool,
}

/// Outcome of a successful download.
#[derive(Debug, Clone)]
pub struct DownloadReport {
    pub name: PinName,
    /// Hash the bundle was fetched from.
    pub hash: String,
    /// Number of pinned records sharing the name.
    pub matched: usize,
    pub written: Vec<WrittenArtifact>,
}

impl DownloadReport {
    /// More than one pin carried the name; the first was used.
    pub fn is_ambiguous(&self) -> bool {
        self.matched > 1
    }
}

/// Replace whatever is pinned under `name` with a bundle of `contracts`.
pub async fn upload_bundle<S: PinningService>(
    service: &S,
    name: &str,
    contracts: &[ResolvedContract],
) -> Result<UploadReport, SyncError> {
    let name = PinName::new(name)?;

    let existing = service.list_pins(&name).await?;
    if !existing.is_empty() {
        tracing::info!(name = %name, count = existing.len(), "a pin with this name exists; unpinning it first");
    }
    let mut replaced = Vec::with_capacity(existing.len());
    for pin in existing {
        service.unpin(&pin.ipfs_pin_hash).await?;
        tracing::info!(name = %name, hash = %pin.ipfs_pin_hash, "unpinned");
        replaced.push(pin.ipfs_pin_hash);
    }

    let bundle = BundleDocument::from_contracts(contracts);
    let content = serde_json::to_value(&bundle).map_err(SyncError::Encode)?;
    let pin = service.pin_json(&content, &name).await?;
    tracing::info!(
        name = %name,
        hash = %pin.ipfs_hash,
        contracts = bundle.len(),
        "pinned ABI bundle"
    );

    Ok(UploadReport {
        name,
        pin,
        replaced,
        contracts: bundle.contract_names().map(str::to_string).collect(),
    })
}

/// Validate `name`, resolve the manifest, then upload.
///
/// Manifest resolution completes before the first remote call, so a missing
/// artifact never leaves the remote side half-updated.
pub async fn upload_manifest<S: PinningService>(
    service: &S,
    name: &str,
    manifest_path: &Path,
    layout: &ArtifactLayout,
) -> Result<UploadReport, SyncError> {
    PinName::new(name)?;
    let contracts = resolve_manifest(manifest_path, layout)?;
    tracing::debug!(
        manifest = %manifest_path.display(),
        contracts = contracts.len(),
        "resolved manifest"
    );
    upload_bundle(service, name, &contracts).await
}

/// Fetch the bundle pinned under `name` and write its contracts to disk.
pub async fn download_bundle<S: PinningService>(
    service: &S,
    name: &str,
    layout: &ArtifactLayout,
    options: DownloadOptions,
) -> Result<DownloadReport, SyncError> {
    let name = PinName::new(name)?;
    layout.ensure_contracts_root()?;

    let pins = service.list_pins(&name).await?;
    let Some(first) = pins.first() else {
        return Err(SyncError::NotFound {
            name: name.to_string(),
        });
    };
    if pins.len() > 1 {
        tracing::warn!(
            name = %name,
            count = pins.len(),
            using = %first.ipfs_pin_hash,
            "more than one pin carries this name; using the first"
        );
    }
    let hash = first.ipfs_pin_hash.clone();

    let content = service.fetch(&hash).await?;
    let bundle: BundleDocument =
        serde_json::from_value(content).map_err(|source| SyncError::MalformedBundle {
            hash: hash.clone(),
            source,
        })?;

    let mut written = Vec::with_capacity(bundle.len());
    for (contract_name, entry) in &bundle.contracts {
        written.push(layout.write_contract(contract_name, entry, options.with_source_extension)?);
    }
    tracing::info!(name = %name, hash = %hash, files = written.len(), "restored ABI bundle");

    Ok(DownloadReport {
        name,
        hash,
        matched: pins.len(),
        written,
    })
}
