//! Ordering semantics for version keys
//!
//! Each compiled filter carries exactly one [`OrderingMode`]. Keys that cannot be
//! parsed under the mode (timestamp, semver) are classified before comparison and
//! always sort after keys that can, so sorting never fails.

use std::cmp::Ordering;

use crate::version::semver::parse_version;
use crate::version::timestamp::parse_timestamp;

/// How version keys are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderingMode {
    /// Key is the artifact modification time
    Timestamp,
    /// Key is the `asc` capture, compared lexicographically
    Ascending,
    /// Key is the `desc` capture, compared in reverse lexicographic order
    Descending,
    /// Key is the `version` capture, compared by semver precedence
    Semver,
}

impl OrderingMode {
    /// Capture group names that select a mode, in precedence order
    pub const GROUPS: [(&'static str, OrderingMode); 3] = [
        ("version", OrderingMode::Semver),
        ("asc", OrderingMode::Ascending),
        ("desc", OrderingMode::Descending),
    ];

    /// Name of the capture group holding the key, None for timestamp mode
    pub fn group_name(&self) -> Option<&'static str> {
        match self {
            OrderingMode::Timestamp => None,
            OrderingMode::Ascending => Some("asc"),
            OrderingMode::Descending => Some("desc"),
            OrderingMode::Semver => Some("version"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingMode::Timestamp => "ts",
            OrderingMode::Ascending => "asc",
            OrderingMode::Descending => "desc",
            OrderingMode::Semver => "version",
        }
    }

    /// Returns true when `a` is strictly older than `b` under this mode
    pub fn less(&self, a: &str, b: &str) -> bool {
        match self {
            OrderingMode::Timestamp => {
                fail_soft_less(parse_timestamp(a), || parse_timestamp(b), Ord::cmp)
            }
            OrderingMode::Ascending => a < b,
            OrderingMode::Descending => b < a,
            // Build metadata does not take part in precedence
            OrderingMode::Semver => fail_soft_less(
                parse_version(a),
                || parse_version(b),
                |a: &semver::Version, b: &semver::Version| a.cmp_precedence(b),
            ),
        }
    }

    /// Total ordering derived from [`OrderingMode::less`], suitable for `sort_by`
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Unparseable `a` is never less; parseable `a` is less than unparseable `b`.
fn fail_soft_less<T>(
    a: Option<T>,
    b: impl FnOnce() -> Option<T>,
    cmp: impl FnOnce(&T, &T) -> Ordering,
) -> bool {
    let Some(a) = a else {
        return false;
    };
    match b() {
        Some(b) => cmp(&a, &b) == Ordering::Less,
        None => true,
    }
}
