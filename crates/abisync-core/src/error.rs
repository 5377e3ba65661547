//! # Error Types
//!
//! One enum per concern. Manifest resolution failures are fatal for an
//! upload run; bundle errors are fatal for a download run. Neither is
//! retried or skipped.

use std::path::PathBuf;

use thiserror::Error;

/// The logical pin name was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PinNameError {
    /// Empty or whitespace-only name.
    #[error("pin name must not be empty")]
    Empty,
}

/// Failure while reading the manifest or an artifact it references.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest is not `{ "files": [string, ...] }`.
    #[error("malformed manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// An entry in `files` is the empty string.
    #[error("manifest entry #{index} is empty")]
    EmptyIdentifier { index: usize },

    /// The identifier has no file stem to derive an artifact name from
    /// (e.g. `"tokens/"` or `".sol"`).
    #[error("manifest entry {identifier:?} does not name a contract")]
    EmptyStem { identifier: String },

    /// The identifier is absolute or climbs out of the contracts root, so
    /// its directory could never be restored on download.
    #[error("manifest entry {identifier:?} is not a path under the contracts root: {reason}")]
    UnsafeIdentifier {
        identifier: String,
        reason: &'static str,
    },

    /// The compiled artifact for an identifier does not exist.
    #[error("{} doesn't exist (manifest entry {identifier:?})", .path.display())]
    MissingArtifact { identifier: String, path: PathBuf },

    /// The artifact exists but could not be read.
    #[error("failed to read artifact {}: {source}", .path.display())]
    ArtifactRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The artifact lacks `contractName`/`abi` or is not JSON.
    #[error("malformed artifact {}: {source}", .path.display())]
    ArtifactParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Failure while writing a fetched bundle back to disk.
#[derive(Error, Debug)]
pub enum BundleError {
    /// A stored path or contract name would land outside the contracts root.
    #[error("refusing to write contract {contract:?}: {reason} ({value:?})")]
    UnsafePath {
        contract: String,
        value: String,
        reason: &'static str,
    },

    /// Directory creation failed.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing an artifact file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serializing an artifact failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
