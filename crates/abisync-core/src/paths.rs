//! # Path Derivation
//!
//! Pure functions that turn manifest identifiers into artifact paths on the
//! way up, and stored `path`/`extension` metadata into output paths on the
//! way down.
//!
//! ## Identifier Convention
//!
//! The compiler writes one output directory per *source file*, named after
//! the source file itself:
//!
//! ```text
//! artifacts/contracts/Token.sol/Token.json
//! artifacts/contracts/tokens/ERC20.sol/ERC20.json
//! ```
//!
//! so the manifest identifier (`Token.sol`, `tokens/ERC20.sol`) is used
//! verbatim as the directory, and its leaf, cut at the first `.`, names the
//! JSON file inside it.

use std::path::{Component, Path, PathBuf};

use crate::error::BundleError;

/// Source-file suffixes recognized as extension markers.
pub const SOURCE_EXTENSIONS: &[&str] = &[".sol", ".vy"];

/// Directory path recorded for identifiers without a separator.
pub const CURRENT_DIR: &str = ".";

/// Return the recognized source suffix of `identifier`, or `""`.
pub fn detect_extension(identifier: &str) -> &'static str {
    SOURCE_EXTENSIONS
        .iter()
        .copied()
        .find(|ext| identifier.ends_with(ext))
        .unwrap_or("")
}

/// Split an identifier into `(directory, leaf)` at its last `/`.
///
/// Without a separator the directory is [`CURRENT_DIR`]. Multi-segment
/// directories stay joined: `a/b/C.sol` → `("a/b", "C.sol")`.
pub fn split_identifier(identifier: &str) -> (&str, &str) {
    match identifier.rsplit_once('/') {
        Some((dir, leaf)) => (dir, leaf),
        None => (CURRENT_DIR, identifier),
    }
}

/// Everything in `leaf` before its first `.`.
pub fn artifact_stem(leaf: &str) -> &str {
    leaf.split_once('.').map_or(leaf, |(stem, _)| stem)
}

/// `<contracts_root>/<identifier>/<stem>.json`.
pub fn artifact_path(contracts_root: &Path, identifier: &str) -> PathBuf {
    let (_, leaf) = split_identifier(identifier);
    contracts_root
        .join(identifier)
        .join(format!("{}.json", artifact_stem(leaf)))
}

/// Name of the per-contract output directory.
///
/// `Token` by default; `Token.sol` when the source extension is kept.
pub fn output_leaf(contract_name: &str, extension: &str, with_source_extension: bool) -> String {
    if with_source_extension {
        format!("{contract_name}{extension}")
    } else {
        contract_name.to_string()
    }
}

/// `<contracts_root>/<stored_path>/<leaf>`.
///
/// The stored path is joined verbatim, so `"."` yields
/// `artifacts/contracts/./Token`.
pub fn output_dir(contracts_root: &Path, stored_path: &str, leaf: &str) -> PathBuf {
    contracts_root.join(stored_path).join(leaf)
}

/// The `sourceName` recorded in a reconstructed artifact.
///
/// This is the written file's path relative to the artifacts root, with `/`
/// separators and `.`/empty segments dropped:
/// `("contracts", ".", "Token", "Token")` → `contracts/Token/Token.json`.
pub fn source_name(contracts_dir: &str, stored_path: &str, leaf: &str, contract_name: &str) -> String {
    let file = format!("{contract_name}.json");
    contracts_dir
        .split('/')
        .chain(stored_path.split('/'))
        .chain([leaf, file.as_str()])
        .filter(|segment| !segment.is_empty() && *segment != CURRENT_DIR)
        .collect::<Vec<_>>()
        .join("/")
}

/// Reject stored paths that would escape the contracts root.
pub fn check_stored_path(contract: &str, stored_path: &str) -> Result<(), BundleError> {
    let unsafe_path = |reason| BundleError::UnsafePath {
        contract: contract.to_string(),
        value: stored_path.to_string(),
        reason,
    };
    match escape_reason(stored_path) {
        Some(reason) => Err(unsafe_path(reason)),
        None => Ok(()),
    }
}

/// Why a relative path would leave the directory it is joined onto, if it
/// would. Applied to manifest identifiers and to stored bundle paths.
pub fn escape_reason(relative: &str) -> Option<&'static str> {
    let path = Path::new(relative);
    if path.has_root() || path.is_absolute() {
        return Some("absolute path");
    }
    if path.components().any(|c| matches!(c, Component::ParentDir | Component::Prefix(_))) {
        return Some("parent directory reference");
    }
    None
}

/// Reject contract names that are not a single plain path segment.
pub fn check_contract_name(contract: &str) -> Result<(), BundleError> {
    let unsafe_name = |reason| BundleError::UnsafePath {
        contract: contract.to_string(),
        value: contract.to_string(),
        reason,
    };
    if contract.is_empty() {
        return Err(unsafe_name("empty contract name"));
    }
    if contract.contains(&['/', '\\'][..]) {
        return Err(unsafe_name("path separator in contract name"));
    }
    if contract == "." || contract == ".." {
        return Err(unsafe_name("relative directory as contract name"));
    }
    Ok(())
}
