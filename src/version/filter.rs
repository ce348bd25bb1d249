//! Filter engine
//!
//! Compiles a user pattern into a regex plus an [`OrderingMode`]. The mode is
//! chosen by the named capture group the pattern defines:
//! - `(?P<version>...)` - semver ordering of the captured text
//! - `(?P<asc>...)` - lexicographic ordering of the captured text
//! - `(?P<desc>...)` - reverse lexicographic ordering of the captured text
//! - none of the above - ordering by modification timestamp

use regex::Regex;
use tracing::{debug, warn};

use crate::version::error::FilterError;
use crate::version::mode::OrderingMode;

/// A compiled filter pattern
#[derive(Debug, Clone)]
pub struct Filter {
    regex: Regex,
    mode: OrderingMode,
}

impl Filter {
    /// Compile a pattern, selecting the ordering mode from its capture group names
    ///
    /// When several ordering groups are present, `version` wins over `asc`,
    /// which wins over `desc`.
    pub fn compile(pattern: &str) -> Result<Self, FilterError> {
        let regex =
            Regex::new(pattern).map_err(|e| FilterError::invalid_pattern(pattern, &e.to_string()))?;

        let present: Vec<OrderingMode> = OrderingMode::GROUPS
            .iter()
            .filter(|(name, _)| regex.capture_names().flatten().any(|n| n == *name))
            .map(|(_, mode)| *mode)
            .collect();

        if present.len() > 1 {
            warn!(
                "Filter '{}' defines several ordering groups, using '{}'",
                pattern,
                present[0].as_str()
            );
        }

        let mode = present.first().copied().unwrap_or(OrderingMode::Timestamp);
        debug!("Compiled filter '{}' with mode '{}'", pattern, mode.as_str());

        Ok(Self { regex, mode })
    }

    pub fn mode(&self) -> OrderingMode {
        self.mode
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Match an artifact identifier and extract its ordering key
    ///
    /// Returns None when the identifier does not match, or when the extracted
    /// key is empty (an optional ordering group that did not participate, or an
    /// empty modification time).
    pub fn match_key(&self, identifier: &str, modified_at: &str) -> Option<String> {
        let captures = self.regex.captures(identifier)?;
        let key = match self.mode.group_name() {
            None => modified_at,
            Some(name) => captures.name(name).map_or("", |m| m.as_str()),
        };
        (!key.is_empty()).then(|| key.to_string())
    }

    /// Returns true when key `a` is strictly older than key `b`
    pub fn less(&self, a: &str, b: &str) -> bool {
        self.mode.less(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TS: &str = "2024-01-01T00:00:00.000Z";

    #[rstest]
    #[case(".*", OrderingMode::Timestamp)]
    #[case(r"^release-(\d+)\.zip$", OrderingMode::Timestamp)]
    #[case(r"^release-(?P<version>.+)\.zip$", OrderingMode::Semver)]
    #[case(r"^build-(?<asc>\d+)$", OrderingMode::Ascending)]
    #[case(r"^build-(?P<desc>\d+)$", OrderingMode::Descending)]
    #[case(r"^(?P<desc>\w+)-(?P<asc>\w+)$", OrderingMode::Ascending)]
    #[case(r"^(?P<desc>\w+)-(?P<asc>\w+)-(?P<version>.+)$", OrderingMode::Semver)]
    #[case(r"^(?P<other>.+)$", OrderingMode::Timestamp)]
    fn compile_selects_mode_from_group_names(#[case] pattern: &str, #[case] expected: OrderingMode) {
        assert_eq!(Filter::compile(pattern).unwrap().mode(), expected);
    }

    #[test]
    fn compile_rejects_invalid_regex() {
        let err = Filter::compile("release-(").unwrap_err();
        assert!(matches!(err, FilterError::InvalidPattern { ref pattern, .. } if pattern == "release-("));
    }

    #[rstest]
    #[case("release-1.2.0.zip")]
    #[case("anything/at/all")]
    fn timestamp_mode_key_is_modified_at(#[case] identifier: &str) {
        let filter = Filter::compile(".*").unwrap();
        assert_eq!(filter.match_key(identifier, TS), Some(TS.to_string()));
    }

    #[test]
    fn timestamp_mode_with_empty_modified_at_is_not_a_match() {
        let filter = Filter::compile(".*").unwrap();
        assert_eq!(filter.match_key("a.zip", ""), None);
    }

    #[rstest]
    #[case(r"^release-(?P<version>\d+\.\d+\.\d+)\.zip$", "release-1.10.0.zip", Some("1.10.0"))]
    #[case(r"^release-(?P<version>\d+\.\d+\.\d+)\.zip$", "release-1.10.0.tgz", None)]
    #[case(r"build-(?P<asc>\d+)", "path/build-42/out", Some("42"))]
    #[case(r"^a(?P<version>\d+)?$", "a", None)]
    #[case(r"^a(?P<version>\d+)?$", "a7", Some("7"))]
    fn match_key_extracts_captured_group(
        #[case] pattern: &str,
        #[case] identifier: &str,
        #[case] expected: Option<&str>,
    ) {
        let filter = Filter::compile(pattern).unwrap();
        assert_eq!(filter.match_key(identifier, TS), expected.map(str::to_string));
    }

    #[test]
    fn match_key_is_deterministic() {
        let filter = Filter::compile(r"^release-(?P<version>.+)\.zip$").unwrap();
        let first = filter.match_key("release-2.0.0.zip", TS);
        let second = filter.match_key("release-2.0.0.zip", TS);
        assert_eq!(first, second);
    }
}
