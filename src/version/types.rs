//! Common types for version resolution

use serde::{Deserialize, Serialize};

/// An artifact offered by the store: its path and modification timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub path: String,
    #[serde(default)]
    pub modified: String,
}

impl Candidate {
    pub fn new(path: impl Into<String>, modified: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            modified: modified.into(),
        }
    }
}

/// Public version record emitted to the CI system
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    /// Ordering key of the artifact
    pub version: String,
    /// Path of the artifact in the repository
    pub file: String,
}

impl Version {
    /// Cursor key carried by this record, None when empty
    pub fn cursor(&self) -> Option<&str> {
        Some(self.version.as_str()).filter(|v| !v.is_empty())
    }
}
