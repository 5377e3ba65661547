//! In-memory pinning service shared by the workflow tests.

#![allow(dead_code)]

use std::future::{ready, Future};
use std::path::Path;
use std::sync::Mutex;

use abisync_core::PinName;
use abisync_pinata::types::PinMetadata;
use abisync_pinata::{PinRecord, PinResponse, PinataError, PinningService};
use serde_json::Value;

#[derive(Debug, Clone)]
struct StoredPin {
    hash: String,
    name: String,
    content: Value,
}

#[derive(Debug, Default)]
struct State {
    pins: Vec<StoredPin>,
    calls: Vec<String>,
    next_id: u64,
}

/// Pins held in memory. Every call is recorded so tests can assert that
/// nothing reached the "network".
#[derive(Debug, Default)]
pub struct InMemoryPins {
    state: Mutex<State>,
}

impl InMemoryPins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `content` under `name` directly, bypassing the call log.
    pub fn seed(&self, name: &str, content: Value) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let hash = format!("QmSeed{}", state.next_id);
        state.pins.push(StoredPin {
            hash: hash.clone(),
            name: name.to_string(),
            content,
        });
        hash
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn hashes_named(&self, name: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .pins
            .iter()
            .filter(|p| p.name == name)
            .map(|p| p.hash.clone())
            .collect()
    }

    pub fn content(&self, hash: &str) -> Option<Value> {
        self.state
            .lock()
            .unwrap()
            .pins
            .iter()
            .find(|p| p.hash == hash)
            .map(|p| p.content.clone())
    }
}

fn not_found(endpoint: String) -> PinataError {
    PinataError::ApiError {
        endpoint,
        status: 404,
        body: "not found".into(),
    }
}

impl PinningService for InMemoryPins {
    fn list_pins(
        &self,
        name: &PinName,
    ) -> impl Future<Output = Result<Vec<PinRecord>, PinataError>> + Send {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("list {name}"));
        let rows = state
            .pins
            .iter()
            .filter(|p| p.name == name.as_str())
            .map(|p| PinRecord {
                id: None,
                ipfs_pin_hash: p.hash.clone(),
                size: None,
                date_pinned: None,
                date_unpinned: None,
                metadata: PinMetadata {
                    name: Some(p.name.clone()),
                    keyvalues: None,
                },
            })
            .collect();
        ready(Ok(rows))
    }

    fn unpin(&self, hash: &str) -> impl Future<Output = Result<(), PinataError>> + Send {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("unpin {hash}"));
        let before = state.pins.len();
        state.pins.retain(|p| p.hash != hash);
        let result = if state.pins.len() < before {
            Ok(())
        } else {
            Err(not_found(format!("DELETE /pinning/unpin/{hash}")))
        };
        ready(result)
    }

    fn pin_json(
        &self,
        content: &Value,
        name: &PinName,
    ) -> impl Future<Output = Result<PinResponse, PinataError>> + Send {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("pin {name}"));
        state.next_id += 1;
        let hash = format!("QmPinned{}", state.next_id);
        state.pins.push(StoredPin {
            hash: hash.clone(),
            name: name.to_string(),
            content: content.clone(),
        });
        ready(Ok(PinResponse {
            ipfs_hash: hash,
            pin_size: None,
            timestamp: None,
            is_duplicate: None,
        }))
    }

    fn fetch(&self, hash: &str) -> impl Future<Output = Result<Value, PinataError>> + Send {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("fetch {hash}"));
        let result = state
            .pins
            .iter()
            .find(|p| p.hash == hash)
            .map(|p| p.content.clone())
            .ok_or_else(|| not_found(format!("GET gateway/{hash}")));
        ready(result)
    }
}

/// Write a compiled artifact where the compiler would put it.
pub fn write_artifact(artifacts_root: &Path, identifier: &str, body: &Value) {
    let leaf = identifier.rsplit('/').next().unwrap();
    let stem = leaf.split('.').next().unwrap();
    let dir = artifacts_root.join("contracts").join(identifier);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{stem}.json")), serde_json::to_vec_pretty(body).unwrap())
        .unwrap();
}

/// Write a manifest listing `files` and return its path.
pub fn write_manifest(dir: &Path, files: &[&str]) -> std::path::PathBuf {
    let path = dir.join(".uploadAbi.json");
    std::fs::write(&path, serde_json::json!({ "files": files }).to_string()).unwrap();
    path
}

/// Parse a JSON file.
pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
