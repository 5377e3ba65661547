//! # Pin Name
//!
//! The logical name a bundle is pinned under. The pinning service does not
//! enforce uniqueness, so a name identifies a *group* of pins rather than a
//! single record.

use serde::Serialize;

use crate::error::PinNameError;

/// A validated, non-empty pin name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PinName(String);

impl PinName {
    /// Validate and wrap a pin name.
    ///
    /// # Errors
    ///
    /// Returns [`PinNameError::Empty`] for empty or whitespace-only names.
    pub fn new(name: impl Into<String>) -> Result<Self, PinNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PinNameError::Empty);
        }
        Ok(Self(name))
    }

    /// Access the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PinName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PinName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for PinName {
    type Err = PinNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
