//! # Manifest Reader
//!
//! Reads the upload manifest (`.uploadAbi.json` by default):
//!
//! ```json
//! { "files": ["Token.sol", "tokens/ERC20.sol"] }
//! ```
//!
//! and resolves every identifier to its compiled artifact. Resolution is
//! strict: the first identifier without an artifact aborts the whole run,
//! before anything is sent anywhere.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ManifestError;
use crate::layout::ArtifactLayout;
use crate::paths;

/// Default manifest location, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = ".uploadAbi.json";

/// The parsed manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Contract identifiers, in order.
    pub files: Vec<String>,
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ManifestError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// The subset of a compiled artifact abisync cares about.
///
/// Compiler output carries many more fields (bytecode, link references,
/// ...); they are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: Value,
}

impl ContractArtifact {
    /// Read and parse an artifact file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::ArtifactRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ManifestError::ArtifactParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A manifest entry resolved against its artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedContract {
    /// Name declared by the artifact (may differ from the identifier).
    pub contract_name: String,
    pub abi: Value,
    /// Directory portion of the identifier, or `"."`.
    pub directory_path: String,
    /// Recognized source suffix (`".sol"`), or `""`.
    pub extension: String,
    /// Where the artifact was read from.
    pub artifact_path: PathBuf,
}

/// Resolve a single manifest identifier.
pub fn resolve_identifier(
    layout: &ArtifactLayout,
    identifier: &str,
) -> Result<ResolvedContract, ManifestError> {
    if let Some(reason) = paths::escape_reason(identifier) {
        return Err(ManifestError::UnsafeIdentifier {
            identifier: identifier.to_string(),
            reason,
        });
    }
    let (directory, leaf) = paths::split_identifier(identifier);
    if paths::artifact_stem(leaf).is_empty() {
        return Err(ManifestError::EmptyStem {
            identifier: identifier.to_string(),
        });
    }

    let artifact_path = layout.artifact_path(identifier);
    if !artifact_path.is_file() {
        return Err(ManifestError::MissingArtifact {
            identifier: identifier.to_string(),
            path: artifact_path,
        });
    }

    let artifact = ContractArtifact::load(&artifact_path)?;
    tracing::debug!(
        identifier,
        contract = %artifact.contract_name,
        path = %artifact_path.display(),
        "resolved manifest entry"
    );

    Ok(ResolvedContract {
        contract_name: artifact.contract_name,
        abi: artifact.abi,
        directory_path: directory.to_string(),
        extension: paths::detect_extension(identifier).to_string(),
        artifact_path,
    })
}

/// Read the manifest at `manifest_path` and resolve every entry.
///
/// # Errors
///
/// Fails on the first unreadable manifest, empty or escaping identifier,
/// missing artifact, or malformed artifact. No partial result is returned.
pub fn resolve_manifest(
    manifest_path: &Path,
    layout: &ArtifactLayout,
) -> Result<Vec<ResolvedContract>, ManifestError> {
    let manifest = Manifest::load(manifest_path)?;
    if manifest.files.is_empty() {
        tracing::warn!(manifest = %manifest_path.display(), "manifest lists no files");
    }

    manifest
        .files
        .iter()
        .enumerate()
        .map(|(index, identifier)| {
            if identifier.is_empty() {
                return Err(ManifestError::EmptyIdentifier { index });
            }
            resolve_identifier(layout, identifier)
        })
        .collect()
}
