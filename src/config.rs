use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::properties::Properties;
use crate::version::error::FilterError;
use crate::version::filter::Filter;
use crate::version::types::{Candidate, Version};

/// Filter used when the source does not define one
pub const DEFAULT_FILTER: &str = ".*";

/// Log level used when the source does not define one
pub const DEFAULT_LOG_LEVEL: &str = "ERROR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("you must provide a repository (e.g.: 'bucket/folder/')")]
    MissingRepository,

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Resource source configuration, shared by every request
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Source {
    /// Repository folder to search, e.g. `bucket/folder/`
    pub repository: String,
    /// Regex selecting artifacts and, through its named group, their ordering
    pub filter: String,
    /// Properties the artifacts are searched by and tagged with
    pub props: Properties,
    pub log_level: String,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            repository: String::new(),
            filter: DEFAULT_FILTER.to_string(),
            props: Properties::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Source {
    /// Validate the source and compile its filter
    pub fn validate(&self, require_repository: bool) -> Result<Filter, ConfigError> {
        if require_repository && self.repository.is_empty() {
            return Err(ConfigError::MissingRepository);
        }
        Ok(Filter::compile(&self.filter)?)
    }

    /// Log verbosity; unknown levels fall back to INFO
    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level.to_uppercase().as_str() {
            "OFF" => LevelFilter::OFF,
            "ERROR" => LevelFilter::ERROR,
            "WARN" => LevelFilter::WARN,
            "DEBUG" => LevelFilter::DEBUG,
            "TRACE" => LevelFilter::TRACE,
            _ => LevelFilter::INFO,
        }
    }
}

/// Request for discovering new versions
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CheckRequest {
    pub source: Source,
    /// Last version already emitted, absent on the first check
    pub version: Option<Version>,
    /// Artifacts listed by the artifact store client
    pub candidates: Vec<Candidate>,
}

impl CheckRequest {
    pub fn cursor(&self) -> Option<&str> {
        self.version.as_ref().and_then(Version::cursor)
    }
}

/// Parameters of an upload
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SelectParams {
    /// Directory, relative to the working directory, holding the files to upload
    pub directory: String,
    /// Properties to tag the uploaded artifacts with
    pub props: Properties,
    /// YAML file, relative to the working directory, with more properties
    pub props_filename: Option<String>,
}

/// Request for deriving the version of uploaded files
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SelectRequest {
    pub source: Source,
    pub params: SelectParams,
}

pub fn add_trailing_slash(path: &str) -> String {
    if !path.is_empty() && !path.ends_with('/') {
        format!("{}/", path)
    } else {
        path.to_string()
    }
}

pub fn remove_starting_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Path of a file inside the repository folder
pub fn join_repository_path(repository: &str, name: &str) -> String {
    format!("{}{}", add_trailing_slash(repository), remove_starting_slash(name))
}
