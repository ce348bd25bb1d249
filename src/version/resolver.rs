//! Resolution of discovered versions
//!
//! Check mode turns a candidate list into the ordered versions newer than (or
//! equal to) the cursor. Selection mode derives the version record of freshly
//! uploaded files.

use tracing::{debug, info};

use crate::config::join_repository_path;
use crate::version::error::FilterError;
use crate::version::filter::Filter;
use crate::version::types::{Candidate, Version};

/// Resolve the versions to emit, oldest first
///
/// Non-matching candidates are dropped, as are keys strictly older than the
/// cursor. The cursor itself is kept so that re-polling always yields the
/// latest known version. An empty cursor keeps every match.
pub fn resolve_versions(
    candidates: &[Candidate],
    filter: &Filter,
    cursor: Option<&str>,
) -> Vec<Version> {
    let cursor = cursor.filter(|c| !c.is_empty());

    let mut versions: Vec<Version> = candidates
        .iter()
        .filter_map(|candidate| {
            let key = filter.match_key(&candidate.path, &candidate.modified)?;
            if let Some(cursor) = cursor
                && filter.less(&key, cursor)
            {
                debug!("Skipping '{}': '{}' is older than '{}'", candidate.path, key, cursor);
                return None;
            }
            Some(Version {
                version: key,
                file: candidate.path.clone(),
            })
        })
        .collect();

    versions.sort_by(|a, b| filter.mode().compare(&a.version, &b.version));

    info!(
        "Resolved {} version(s) from {} candidate(s)",
        versions.len(),
        candidates.len()
    );
    versions
}

/// Key of a single uploaded artifact, using `now` as its modification time
///
/// Empty when the path does not match the filter.
pub fn select_key(filter: &Filter, path: &str, now: &str) -> String {
    filter.match_key(path, now).unwrap_or_default()
}

/// Keep the file names matching the filter, in their original order
pub fn select_upload_files(
    filter: &Filter,
    names: &[String],
    now: &str,
) -> Result<Vec<String>, FilterError> {
    let selected: Vec<String> = names
        .iter()
        .filter(|name| filter.match_key(name, now).is_some())
        .cloned()
        .collect();

    if selected.is_empty() {
        return Err(FilterError::NoMatchingFiles {
            filter: filter.pattern().to_string(),
        });
    }
    Ok(selected)
}

/// Version record of an upload: the last selected file becomes the new cursor
pub fn select_version(
    filter: &Filter,
    repository: &str,
    files: &[String],
    now: &str,
) -> Option<Version> {
    let last = files.last()?;
    Some(Version {
        version: select_key(filter, last, now),
        file: join_repository_path(repository, last),
    })
}
