use super::*;

use axum::Json;
use axum::extract::State;
use tempfile::TempDir;

use crate::state::AppState;
use crate::state::test_helpers::test_app_state;

fn seeded_state(dir: &TempDir, body: &str) -> AppState {
    let path = dir.path().join("resume.md");
    std::fs::write(&path, body).expect("write resume fixture");
    test_app_state(vec![path], dir.path().to_path_buf())
}

#[tokio::test]
async fn resume_returns_the_structured_profile() {
    let dir = TempDir::new().expect("tempdir");
    let state = seeded_state(
        &dir,
        "# Jane Doe\n\nEngineer.\n\nGitHub: https://github.com/janedoe\n",
    );

    let Json(profile) = resume(State(state)).await;
    assert_eq!(profile.name, "Jane Doe");
    assert_eq!(profile.summary, "Engineer.");
    assert_eq!(profile.github, "https://github.com/janedoe");
}

#[tokio::test]
async fn resume_json_shape_matches_the_page_data_contract() {
    let dir = TempDir::new().expect("tempdir");
    let state = seeded_state(&dir, "# Jane Doe\n");

    let Json(profile) = resume(State(state)).await;
    let json = serde_json::to_value(&profile).expect("profile serializes");
    for key in ["title", "name", "summary", "linkedin", "github", "projects", "paragraphs"] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}

#[tokio::test]
async fn resume_serves_cached_profile_on_repeat_calls() {
    let dir = TempDir::new().expect("tempdir");
    let state = seeded_state(&dir, "# Jane Doe\n");

    let Json(first) = resume(State(state.clone())).await;
    assert_eq!(first.name, "Jane Doe");

    // Source disappears; the cache (default TTL) keeps serving.
    std::fs::remove_file(dir.path().join("resume.md")).expect("remove resume fixture");
    let Json(second) = resume(State(state)).await;
    assert_eq!(second.name, "Jane Doe");
}
