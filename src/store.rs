//! Artifact store client boundary
//!
//! Searching the remote repository is delegated to an [`ArtifactStore`]. The
//! resolution logic only ever sees the materialized candidate list.

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::config::{Source, add_trailing_slash};
use crate::version::types::Candidate;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Search failed: {0}")]
    Search(String),
}

/// Search query sent to the artifact store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Repository folder pattern, always ending with `/`
    pub pattern: String,
    /// Properties the artifacts must carry, in `key=v1,v2;key2=v3` form
    pub props: String,
}

impl SearchQuery {
    pub fn from_source(source: &Source) -> Self {
        Self {
            pattern: add_trailing_slash(&source.repository),
            props: source.props.to_string(),
        }
    }
}

/// Trait for listing the artifacts of a repository
#[cfg_attr(test, automock)]
pub trait ArtifactStore {
    fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, StoreError>;
}

/// Store over a candidate list that was already fetched by the caller
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    candidates: Vec<Candidate>,
}

impl InMemoryStore {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl ArtifactStore for InMemoryStore {
    fn search(&self, _query: &SearchQuery) -> Result<Vec<Candidate>, StoreError> {
        Ok(self.candidates.clone())
    }
}
