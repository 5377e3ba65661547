//! # Bundle Document
//!
//! The single JSON object pinned for a name:
//!
//! ```json
//! {
//!   "contracts": {
//!     "Token": { "abi": [], "path": ".", "extension": ".sol" }
//!   }
//! }
//! ```
//!
//! Keys are artifact-declared contract names. The map is ordered, so the
//! same set of contracts always serializes to the same bytes and pins to
//! the same CIDv0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::manifest::ResolvedContract;
use crate::paths::CURRENT_DIR;

/// The aggregate document uploaded and downloaded as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundleDocument {
    pub contracts: BTreeMap<String, BundledContract>,
}

/// One contract's entry in the bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BundledContractRepr")]
pub struct BundledContract {
    pub abi: Value,
    /// Directory portion of the manifest identifier (`"."` at top level).
    pub path: String,
    /// Source suffix of the manifest identifier (`".sol"`), or `""`.
    pub extension: String,
}

/// Accepted wire shapes for a bundle entry.
///
/// Bundles pinned by the earliest uploader stored the ABI array directly
/// under the contract name, without path metadata. `BareAbi` must stay
/// first: an untagged struct variant would also accept a JSON array.
#[derive(Deserialize)]
#[serde(untagged)]
enum BundledContractRepr {
    BareAbi(Vec<Value>),
    Described {
        abi: Value,
        #[serde(default = "current_dir")]
        path: String,
        #[serde(default)]
        extension: String,
    },
}

fn current_dir() -> String {
    CURRENT_DIR.to_string()
}

impl From<BundledContractRepr> for BundledContract {
    fn from(repr: BundledContractRepr) -> Self {
        match repr {
            BundledContractRepr::BareAbi(abi) => Self {
                abi: Value::Array(abi),
                path: current_dir(),
                extension: String::new(),
            },
            BundledContractRepr::Described {
                abi,
                path,
                extension,
            } => Self {
                abi,
                path,
                extension,
            },
        }
    }
}

impl BundleDocument {
    /// Build a bundle from resolved manifest entries.
    ///
    /// When two entries declare the same contract name the later one wins.
    pub fn from_contracts(contracts: &[ResolvedContract]) -> Self {
        let mut bundle = Self::default();
        for contract in contracts {
            let entry = BundledContract {
                abi: contract.abi.clone(),
                path: contract.directory_path.clone(),
                extension: contract.extension.clone(),
            };
            if bundle
                .contracts
                .insert(contract.contract_name.clone(), entry)
                .is_some()
            {
                tracing::warn!(
                    contract = %contract.contract_name,
                    artifact = %contract.artifact_path.display(),
                    "duplicate contract name in manifest; later entry replaces earlier one"
                );
            }
        }
        bundle
    }

    /// Contract names in key order.
    pub fn contract_names(&self) -> impl Iterator<Item = &str> {
        self.contracts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
