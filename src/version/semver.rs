use semver::Version;

/// Parse a version key into a semver::Version, normalizing partial versions.
///
/// Accepts an optional leading `v` and pads partial versions with zeros. Only
/// the numeric core is padded; a pre-release or build suffix is kept as is.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "1-rc1" -> Version(1, 0, 0-rc1)
/// - "1.2.3-rc.1" -> Version(1, 2, 3-rc.1)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let (core, suffix) = version.split_at(version.find(['-', '+']).unwrap_or(version.len()));
    let parts: Vec<&str> = core.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0{}", parts[0], suffix),
        2 => format!("{}.{}.0{}", parts[0], parts[1], suffix),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}
