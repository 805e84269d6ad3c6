use super::*;

use axum::extract::State;
use axum::response::Html;
use profile::Profile;
use tempfile::TempDir;

use crate::state::test_helpers::test_app_state;

#[test]
fn photo_url_falls_back_to_placeholder() {
    let dir = TempDir::new().expect("tempdir");
    assert_eq!(photo_url(dir.path()), PLACEHOLDER_PHOTO_URL);
}

#[test]
fn photo_url_prefers_bundled_photo() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("photo.jpg"), b"jpg").expect("write photo fixture");
    assert_eq!(photo_url(dir.path()), "/static/photo.jpg");
}

#[test]
fn render_escapes_profile_text() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_app_state(Vec::new(), dir.path().to_path_buf());
    let profile = Profile {
        name: "Ada <script>".to_owned(),
        summary: "Systems engineer".to_owned(),
        projects: vec!["- Reveal engine".to_owned()],
        ..Profile::default()
    };

    let page =
        render_portfolio(&state.renderer, &profile, PLACEHOLDER_PHOTO_URL).expect("render");

    assert!(page.contains("Ada &lt;script&gt;"));
    assert!(!page.contains("Ada <script>"));
    assert!(page.contains("Systems engineer"));
    assert!(page.contains("- Reveal engine"));
}

#[test]
fn rendered_page_carries_reveal_markers() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_app_state(Vec::new(), dir.path().to_path_buf());
    let profile = Profile { name: "Jane".to_owned(), ..Profile::default() };

    let page =
        render_portfolio(&state.renderer, &profile, PLACEHOLDER_PHOTO_URL).expect("render");

    assert!(page.contains("slide-in"));
    assert!(page.contains("/static/style.css"));
    assert!(page.contains("/static/pkg/reveal.js"));
}

#[tokio::test]
async fn home_renders_even_with_no_readable_sources() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_app_state(
        vec![dir.path().join("missing.md")],
        dir.path().to_path_buf(),
    );

    let Html(page) = home(State(state)).await.expect("home should render");
    assert!(page.contains("Unable to read resume file"));
}
