use std::fs;

use artifact_resource::commands::select::{merge_properties, select};
use artifact_resource::config::SelectRequest;
use chrono::{TimeZone, Utc};
use serde_json::json;
use tempfile::TempDir;

fn request(props_filename: &str) -> SelectRequest {
    serde_json::from_value(json!({
        "source": {
            "repository": "bucket/releases",
            "filter": "^release-(?P<version>.+)\\.zip$",
            "props": { "team": ["core"] }
        },
        "params": {
            "directory": "out",
            "props": { "team": ["ops"], "build": ["42"] },
            "props_filename": props_filename
        }
    }))
    .unwrap()
}

/// Working directory with the upload files under `out/`
fn workdir(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    fs::create_dir(&out).unwrap();
    for file in files {
        fs::write(out.join(file), "artifact").unwrap();
    }
    temp_dir
}

#[test]
fn merge_properties_layers_file_after_source_and_params() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("props.yml"),
        "team: [core, qa]\ncommit: abc123\n",
    )
    .unwrap();

    let props = merge_properties(&request("/props.yml"), temp_dir.path()).unwrap();

    assert_eq!(props.to_string(), "team=core,ops,qa;build=42;commit=abc123");
}

#[test]
fn select_reports_merged_properties_and_version() {
    let temp_dir = workdir(&["release-2.0.0.zip"]);
    fs::write(temp_dir.path().join("props.yml"), "channel: stable\n").unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let response = select(&request("props.yml"), temp_dir.path(), now).unwrap();

    assert_eq!(response.version.version, "2.0.0");
    assert_eq!(response.version.file, "bucket/releases/release-2.0.0.zip");
    assert_eq!(response.metadata[0].name, "props");
    assert_eq!(
        response.metadata[0].value,
        "team=core,ops;build=42;channel=stable"
    );
}

#[test]
fn select_fails_on_invalid_properties_file() {
    let temp_dir = workdir(&["release-2.0.0.zip"]);
    fs::write(temp_dir.path().join("props.yml"), "team: [core\n").unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let err = select(&request("props.yml"), temp_dir.path(), now).unwrap_err();

    assert!(err.to_string().contains("invalid yaml format"));
}

#[test]
fn select_lists_upload_files_from_params_directory() {
    let temp_dir = workdir(&["release-1.9.0.zip", "checksums.txt", "release-2.1.0.zip"]);
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let response = select(&request(""), temp_dir.path(), now).unwrap();

    assert_eq!(response.version.version, "2.1.0");
    assert_eq!(response.version.file, "bucket/releases/release-2.1.0.zip");
    let files: Vec<&str> = response
        .metadata
        .iter()
        .filter(|m| m.name == "file")
        .map(|m| m.value.as_str())
        .collect();
    assert_eq!(files, vec!["release-1.9.0.zip", "release-2.1.0.zip"]);
}

#[test]
fn select_fails_when_params_directory_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let err = select(&request(""), temp_dir.path(), now).unwrap_err();

    assert!(format!("{:#}", err).contains("could not list files in directory"));
}
