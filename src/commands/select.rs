use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::commands::{Metadata, Response};
use crate::config::{SelectRequest, remove_starting_slash};
use crate::properties::{Properties, PropertiesFileParser};
use crate::version::resolver::{select_upload_files, select_version};
use crate::version::timestamp::format_timestamp;

/// Merge properties from the source, the params and the optional properties file
///
/// The file path is resolved against `base_dir`.
pub fn merge_properties(request: &SelectRequest, base_dir: &Path) -> anyhow::Result<Properties> {
    let file_props = match &request.params.props_filename {
        Some(filename) if !filename.is_empty() => {
            let path = base_dir.join(remove_starting_slash(filename));
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("could not read properties from file '{}'", filename))?;
            PropertiesFileParser
                .parse(&content)
                .with_context(|| format!("invalid yaml format in file '{}'", filename))?
        }
        _ => Properties::new(),
    };

    Ok(Properties::merge_layers([
        &request.source.props,
        &request.params.props,
        &file_props,
    ]))
}

/// Names of the regular files in `directory`, sorted by name
pub fn list_upload_files(directory: &Path) -> anyhow::Result<Vec<String>> {
    let entries = std::fs::read_dir(directory)
        .with_context(|| format!("could not list files in directory '{}'", directory.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("could not list files in directory '{}'", directory.display()))?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => warn!("Skipping non UTF-8 file name {:?}", name),
        }
    }
    names.sort();
    Ok(names)
}

/// Select the files to upload and derive the version they will be emitted as
///
/// Files are listed from `params.directory` under `base_dir`. Fails when the
/// directory cannot be read or no file matches the filter.
pub fn select(
    request: &SelectRequest,
    base_dir: &Path,
    now: DateTime<Utc>,
) -> anyhow::Result<Response> {
    let filter = request.source.validate(false)?;
    let props = merge_properties(request, base_dir)?;
    let now = format_timestamp(now);

    let directory = base_dir.join(remove_starting_slash(&request.params.directory));
    let names = list_upload_files(&directory)?;
    let files = select_upload_files(&filter, &names, &now)
        .with_context(|| format!("in directory '{}'", request.params.directory))?;
    for file in &files {
        info!("selected '{}' for '{}'", file, request.source.repository);
    }

    let version = select_version(&filter, &request.source.repository, &files, &now)
        .unwrap_or_default();

    let mut metadata = vec![Metadata::new("props", props.to_string())];
    metadata.extend(files.into_iter().map(|file| Metadata::new("file", file)));

    Ok(Response { version, metadata })
}
