use artifact_resource::version::filter::Filter;
use artifact_resource::version::mode::OrderingMode;
use artifact_resource::version::resolver::resolve_versions;
use artifact_resource::version::types::Candidate;

fn keys(candidates: &[Candidate], pattern: &str, cursor: Option<&str>) -> Vec<String> {
    let filter = Filter::compile(pattern).unwrap();
    resolve_versions(candidates, &filter, cursor)
        .into_iter()
        .map(|v| v.version)
        .collect()
}

#[test]
fn semver_releases_are_ordered_semantically_from_cursor() {
    let candidates = vec![
        Candidate::new("release-1.2.0.zip", "2024-01-03T00:00:00.000Z"),
        Candidate::new("release-1.10.0.zip", "2024-01-01T00:00:00.000Z"),
        Candidate::new("release-1.3.0.zip", "2024-01-02T00:00:00.000Z"),
    ];

    let result = keys(
        &candidates,
        r"^release-(?P<version>\d+\.\d+\.\d+)\.zip$",
        Some("1.2.0"),
    );

    assert_eq!(result, vec!["1.2.0", "1.3.0", "1.10.0"]);
}

#[test]
fn timestamp_mode_first_check_returns_oldest_first() {
    let candidates = vec![
        Candidate::new("build-b.tgz", "2024-01-02T00:00:00.000Z"),
        Candidate::new("build-a.tgz", "2024-01-01T00:00:00.000Z"),
    ];

    let result = keys(&candidates, r"\.tgz$", None);

    assert_eq!(
        result,
        vec!["2024-01-01T00:00:00.000Z", "2024-01-02T00:00:00.000Z"]
    );
}

#[test]
fn repolling_with_latest_cursor_is_idempotent() {
    let candidates = vec![
        Candidate::new("app-build-0007", ""),
        Candidate::new("app-build-0012", ""),
        Candidate::new("app-build-0003", ""),
    ];
    let pattern = r"^app-build-(?P<asc>\d+)$";

    let first = keys(&candidates, pattern, None);
    let latest = first.last().cloned().unwrap();
    let second = keys(&candidates, pattern, Some(&latest));

    assert_eq!(first, vec!["0003", "0007", "0012"]);
    assert_eq!(second, vec![latest]);
}

#[test]
fn pattern_without_ordering_group_keys_by_modification_time() {
    let candidates = vec![
        Candidate::new("a/one.bin", "2024-05-01T10:00:00.000Z"),
        Candidate::new("a/two.bin", "2024-04-01T10:00:00.000Z"),
        Candidate::new("b/three.bin", "2024-06-01T10:00:00.000Z"),
    ];
    let filter = Filter::compile(r"^a/").unwrap();
    assert_eq!(filter.mode(), OrderingMode::Timestamp);

    for candidate in &candidates {
        if let Some(key) = filter.match_key(&candidate.path, &candidate.modified) {
            assert_eq!(key, candidate.modified);
        }
    }

    let versions = resolve_versions(&candidates, &filter, Some("2024-04-15T00:00:00.000Z"));
    let files: Vec<&str> = versions.iter().map(|v| v.file.as_str()).collect();
    assert_eq!(files, vec!["a/one.bin"]);
}

#[test]
fn empty_candidate_list_is_not_an_error() {
    let result = keys(&[], ".*", Some("2024-01-01T00:00:00.000Z"));
    assert!(result.is_empty());
}
