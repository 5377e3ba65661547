//! # Artifact Layout
//!
//! The on-disk artifacts directory: where compiled artifacts are read from
//! on upload and where reconstructed artifacts are written on download.
//!
//! ```text
//! artifacts/                     <- artifacts root
//!   contracts/                   <- contracts root
//!     Token.sol/Token.json       <- compiler output (read)
//!     ./Token/Token.json         <- reconstructed (written)
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::bundle::BundledContract;
use crate::error::BundleError;
use crate::paths;

/// Default artifacts root, relative to the working directory.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Subdirectory of the artifacts root holding per-source outputs.
pub const CONTRACTS_DIR: &str = "contracts";

/// Location of the artifacts tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    artifacts_root: PathBuf,
}

/// A reconstructed artifact that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub contract_name: String,
    pub source_name: String,
    pub path: PathBuf,
}

/// File body of a reconstructed artifact.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReconstructedArtifact<'a> {
    contract_name: &'a str,
    source_name: &'a str,
    abi: &'a Value,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACTS_DIR)
    }
}

impl ArtifactLayout {
    pub fn new(artifacts_root: impl Into<PathBuf>) -> Self {
        Self {
            artifacts_root: artifacts_root.into(),
        }
    }

    pub fn artifacts_root(&self) -> &Path {
        &self.artifacts_root
    }

    /// `<artifacts-root>/contracts`.
    pub fn contracts_root(&self) -> PathBuf {
        self.artifacts_root.join(CONTRACTS_DIR)
    }

    /// Compiled artifact location for a manifest identifier.
    pub fn artifact_path(&self, identifier: &str) -> PathBuf {
        paths::artifact_path(&self.contracts_root(), identifier)
    }

    /// Create the contracts root (and parents) if absent.
    pub fn ensure_contracts_root(&self) -> Result<PathBuf, BundleError> {
        let root = self.contracts_root();
        std::fs::create_dir_all(&root).map_err(|source| BundleError::CreateDir {
            path: root.clone(),
            source,
        })?;
        Ok(root)
    }

    /// Write one bundle entry back to disk as
    /// `<contracts-root>/<path>/<leaf>/<contractName>.json`.
    ///
    /// The leaf directory is the contract name, or the contract name plus
    /// its source extension when `with_source_extension` is set. Stored
    /// paths and names are validated before anything is created.
    pub fn write_contract(
        &self,
        contract_name: &str,
        entry: &BundledContract,
        with_source_extension: bool,
    ) -> Result<WrittenArtifact, BundleError> {
        paths::check_contract_name(contract_name)?;
        paths::check_stored_path(contract_name, &entry.path)?;

        let leaf = paths::output_leaf(contract_name, &entry.extension, with_source_extension);
        let dir = paths::output_dir(&self.contracts_root(), &entry.path, &leaf);
        std::fs::create_dir_all(&dir).map_err(|source| BundleError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let source_name = paths::source_name(CONTRACTS_DIR, &entry.path, &leaf, contract_name);
        let body = ReconstructedArtifact {
            contract_name,
            source_name: &source_name,
            abi: &entry.abi,
        };
        let mut json = serde_json::to_string_pretty(&body)?;
        json.push('\n');

        let path = dir.join(format!("{contract_name}.json"));
        std::fs::write(&path, json).map_err(|source| BundleError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(contract = contract_name, path = %path.display(), "wrote artifact");

        Ok(WrittenArtifact {
            contract_name: contract_name.to_string(),
            source_name,
            path,
        })
    }
}
