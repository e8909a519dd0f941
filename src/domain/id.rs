//! Orchestrator resource identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Path-like identifier of an application or group (e.g. `/team/service`).
///
/// The inner String is private so every id is read through [`as_str`](Self::as_str)
/// or [`path`](Self::path). The stored value is exactly what the descriptor
/// declared; normalization only happens when building request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create a new `ResourceId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as declared.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty (or only slashes and whitespace).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().trim_matches('/').is_empty()
    }

    /// Absolute form of the id, always starting with a single `/`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.0.trim().trim_start_matches('/'))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
