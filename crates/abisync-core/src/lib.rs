//! # abisync-core -- Manifest, Paths, and the ABI Bundle
//!
//! Everything abisync does that does not touch the network lives here:
//!
//! - [`manifest`] reads `.uploadAbi.json` and resolves each identifier to a
//!   compiled artifact on disk.
//! - [`paths`] holds the pure string/path derivations shared by the upload
//!   and download directions.
//! - [`bundle`] is the single JSON document that is pinned and fetched.
//! - [`layout`] owns the artifacts directory and writes reconstructed
//!   artifacts back into it.
//!
//! ## Crate Policy
//!
//! - No network access and no async.
//! - No `.unwrap()` outside tests.
//! - Errors are typed (`thiserror`); the CLI decides how to report them.

pub mod bundle;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod name;
pub mod paths;

pub use bundle::{BundleDocument, BundledContract};
pub use error::{BundleError, ManifestError, PinNameError};
pub use layout::{ArtifactLayout, WrittenArtifact};
pub use manifest::{resolve_manifest, ContractArtifact, Manifest, ResolvedContract};
pub use name::PinName;
