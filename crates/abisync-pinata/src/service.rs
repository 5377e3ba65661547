//! # Pinning Service Seam
//!
//! The four remote operations the sync workflows need, behind a trait so
//! the workflows take the service as a parameter. [`PinataClient`] is the
//! production implementation; tests substitute an in-memory one.

use std::future::Future;

use abisync_core::PinName;
use serde_json::Value;

use crate::error::PinataError;
use crate::types::{PinRecord, PinResponse};
use crate::PinataClient;

/// Remote pin management plus content fetch.
pub trait PinningService {
    /// Every pinned record named exactly `name`, in service order.
    fn list_pins(
        &self,
        name: &PinName,
    ) -> impl Future<Output = Result<Vec<PinRecord>, PinataError>> + Send;

    /// Remove the pin for `hash`.
    fn unpin(&self, hash: &str) -> impl Future<Output = Result<(), PinataError>> + Send;

    /// Upload `content` and pin it under `name`.
    fn pin_json(
        &self,
        content: &Value,
        name: &PinName,
    ) -> impl Future<Output = Result<PinResponse, PinataError>> + Send;

    /// Fetch pinned content by hash.
    fn fetch(&self, hash: &str) -> impl Future<Output = Result<Value, PinataError>> + Send;
}

impl PinningService for PinataClient {
    fn list_pins(
        &self,
        name: &PinName,
    ) -> impl Future<Output = Result<Vec<PinRecord>, PinataError>> + Send {
        self.pinning().list(name)
    }

    fn unpin(&self, hash: &str) -> impl Future<Output = Result<(), PinataError>> + Send {
        self.pinning().unpin(hash)
    }

    fn pin_json(
        &self,
        content: &Value,
        name: &PinName,
    ) -> impl Future<Output = Result<PinResponse, PinataError>> + Send {
        self.pinning().pin_json(content, name)
    }

    fn fetch(&self, hash: &str) -> impl Future<Output = Result<Value, PinataError>> + Send {
        self.gateway().fetch_json(hash)
    }
}
