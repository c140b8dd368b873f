use std::fs;
use std::path::Path;

use tempfile::TempDir;

use sigboard_sessions::{BaseLocation, LoadError, SessionLoader};

fn loader_for(dir: &Path) -> SessionLoader {
    SessionLoader::new(BaseLocation::Dir(dir.to_path_buf()))
}

/// Helper: populate a fixture directory with a manifest and session files.
fn create_fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();

    fs::write(
        dir.path().join("index.json"),
        r#"{"files":["sess_a.json","sess_b.json","sess_c.json"]}"#,
    )
    .unwrap();

    fs::write(
        dir.path().join("sess_a.json"),
        r#"{"session_id":"sess_a","country":"US","summary":{"status":"pass"},
            "generated_at":"2026-07-01T10:00:00Z"}"#,
    )
    .unwrap();

    fs::write(
        dir.path().join("sess_b.json"),
        r#"{"session_id":"sess_b","country":"DE","tier":"P0","summary":{"status":"fail"},
            "checks":[{"name":"latency","status":"FAIL"}],
            "generated_at":"2026-07-01T11:00:00Z"}"#,
    )
    .unwrap();

    fs::write(
        dir.path().join("sess_c.json"),
        r#"{"session_id":"sess_c","summary":{"status":"warn"}}"#,
    )
    .unwrap();

    dir
}

// ============================================================
// Loader tests - Directory base
// ============================================================

#[tokio::test]
async fn test_load_all_from_directory() {
    let dir = create_fixture_dir();
    let sessions = loader_for(dir.path()).load_all().await.unwrap();

    assert_eq!(sessions.len(), 3);
    let ids: Vec<&str> = sessions
        .iter()
        .filter_map(|s| s.session_id.as_deref())
        .collect();
    assert!(ids.contains(&"sess_a"));
    assert!(ids.contains(&"sess_b"));
    assert!(ids.contains(&"sess_c"));
}

#[tokio::test]
async fn test_missing_session_file_is_dropped() {
    let dir = create_fixture_dir();
    fs::remove_file(dir.path().join("sess_b.json")).unwrap();

    let sessions = loader_for(dir.path()).load_all().await.unwrap();

    assert_eq!(sessions.len(), 2);
    assert!(sessions
        .iter()
        .all(|s| s.session_id.as_deref() != Some("sess_b")));
}

#[tokio::test]
async fn test_malformed_session_file_is_dropped() {
    let dir = create_fixture_dir();
    fs::write(dir.path().join("sess_c.json"), "not json {{{").unwrap();

    let sessions = loader_for(dir.path()).load_all().await.unwrap();

    assert_eq!(sessions.len(), 2);
}

#[tokio::test]
async fn test_session_with_extra_fields_still_parses() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.json"), r#"{"files":["s.json"]}"#).unwrap();
    fs::write(
        dir.path().join("s.json"),
        r#"{"session_id":"s","probe_version":"9.1","internal":{"debug":true}}"#,
    )
    .unwrap();

    let sessions = loader_for(dir.path()).load_all().await.unwrap();

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].session_id.as_deref(), Some("s"));
}

// ============================================================
// Loader tests - Manifest failures are fatal
// ============================================================

#[tokio::test]
async fn test_missing_manifest_is_error() {
    let dir = TempDir::new().unwrap();

    let err = loader_for(dir.path()).load_all().await.unwrap_err();

    assert!(matches!(err, LoadError::ManifestRead(_)));
}

#[tokio::test]
async fn test_malformed_manifest_is_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.json"), "[not a manifest").unwrap();

    let err = loader_for(dir.path()).load_all().await.unwrap_err();

    assert!(matches!(err, LoadError::ManifestParse(_)));
}

// ============================================================
// Loader tests - Manifest variants
// ============================================================

#[tokio::test]
async fn test_manifest_with_session_ids() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("index.json"),
        r#"{"sessions":["sess_a","sess_b"]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("sess_a.json"),
        r#"{"session_id":"sess_a","summary":{"status":"pass"}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("sess_b.json"),
        r#"{"session_id":"sess_b","summary":{"status":"warn"}}"#,
    )
    .unwrap();

    let sessions = loader_for(dir.path()).load_all().await.unwrap();

    assert_eq!(sessions.len(), 2);
}

#[tokio::test]
async fn test_manifest_files_take_precedence_over_ids() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("index.json"),
        r#"{"files":["real.json"],"sessions":["ghost"]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("real.json"),
        r#"{"session_id":"real"}"#,
    )
    .unwrap();

    let sessions = loader_for(dir.path()).load_all().await.unwrap();

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].session_id.as_deref(), Some("real"));
}

#[tokio::test]
async fn test_empty_manifest_loads_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.json"), r#"{"files":[]}"#).unwrap();

    let sessions = loader_for(dir.path()).load_all().await.unwrap();

    assert!(sessions.is_empty());
}
