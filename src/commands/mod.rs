//! Resource operations
//!
//! - [`check`]: discover versions newer than the last emitted one
//! - [`select`]: derive the version and properties of files about to be uploaded

pub mod check;
pub mod select;

use serde::{Deserialize, Serialize};

use crate::version::types::Version;

/// Name/value pair shown alongside an emitted version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub value: String,
}

impl Metadata {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Response of an operation emitting a single version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub version: Version,
    pub metadata: Vec<Metadata>,
}
