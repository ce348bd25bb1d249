use thiserror::Error;

/// Error type for the `key=v1,v2;key2=v3` textual form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertiesError {
    #[error("Invalid property entry '{0}': expected key=value")]
    InvalidEntry(String),
}

/// Error type for reading a properties file
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to parse the file structure
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    /// Tree-sitter related error
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}
