use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid filter '{pattern}', must be valid regexp: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("no file matching filter '{filter}'")]
    NoMatchingFiles { filter: String },
}

impl FilterError {
    #[must_use]
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}
