use anyhow::Context;
use tracing::info;

use crate::config::CheckRequest;
use crate::store::{ArtifactStore, SearchQuery};
use crate::version::resolver::resolve_versions;
use crate::version::types::Version;

/// Search the store and resolve the versions to emit, oldest first
///
/// An empty list means nothing new; it is not an error.
pub fn check<S: ArtifactStore>(store: &S, request: &CheckRequest) -> anyhow::Result<Vec<Version>> {
    let filter = request.source.validate(true)?;
    let query = SearchQuery::from_source(&request.source);

    info!("Searching '{}' with props '{}'", query.pattern, query.props);
    let candidates = store
        .search(&query)
        .context("error when trying to find latest file")?;

    Ok(resolve_versions(&candidates, &filter, request.cursor()))
}
