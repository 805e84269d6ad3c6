use super::*;

use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use crate::services::cache::ProfileCache;

fn write_resume(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("write resume fixture");
    path
}

#[test]
fn parse_paths_splits_trims_and_skips_empty_entries() {
    let paths = parse_paths(" a.md , ,b.md,,  ");
    assert_eq!(paths, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
}

#[tokio::test]
async fn load_prefers_paths_that_exist() {
    let dir = TempDir::new().expect("tempdir");
    let existing = write_resume(&dir, "resume.md", "# Jane Doe\n\nEngineer.\n");
    let missing = dir.path().join("missing.md");

    let loader = ResumeLoader::new(vec![missing, existing]);
    let profile = loader.load().await;

    assert_eq!(profile.name, "Jane Doe");
    assert!(
        !profile
            .paragraphs
            .iter()
            .any(|p| p.contains("Unable to read resume file")),
        "placeholder should not appear when a real source exists"
    );
}

#[tokio::test]
async fn load_surfaces_placeholders_when_nothing_exists() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("missing.md");

    let loader = ResumeLoader::new(vec![missing]);
    let profile = loader.load().await;

    // The placeholder paragraph is the only content, so it lands in `name`.
    assert!(profile.name.contains("Unable to read resume file"));
    assert!(profile.name.contains("missing.md"));
}

#[tokio::test]
async fn load_merges_sources_and_drops_duplicate_paragraphs() {
    let dir = TempDir::new().expect("tempdir");
    let first = write_resume(&dir, "a.md", "# Jane Doe\n\nShared line.\n\nOnly in A.\n");
    let second = write_resume(&dir, "b.md", "Shared line.\n\nOnly in B.\n");

    let loader = ResumeLoader::new(vec![first, second]);
    let profile = loader.load().await;

    assert_eq!(profile.name, "Jane Doe");
    let shared_count = std::iter::once(&profile.summary)
        .chain(profile.paragraphs.iter())
        .filter(|p| p.as_str() == "Shared line.")
        .count();
    assert_eq!(shared_count, 1);
    assert!(profile.paragraphs.contains(&"Only in B.".to_owned()));
}

#[tokio::test]
async fn cached_profile_serves_from_cache_within_ttl() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_resume(&dir, "resume.md", "# Jane Doe\n\nEngineer.\n");

    let loader = ResumeLoader::new(vec![path.clone()]);
    let cache = ProfileCache::with_ttl(Duration::from_secs(300));

    let first = cached_profile(&cache, &loader).await;
    assert_eq!(first.name, "Jane Doe");

    // Source disappears; the cached profile keeps serving.
    std::fs::remove_file(&path).expect("remove resume fixture");
    let second = cached_profile(&cache, &loader).await;
    assert_eq!(second.name, "Jane Doe");
}

#[tokio::test]
async fn cached_profile_rebuilds_after_expiry() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_resume(&dir, "resume.md", "# Before\n");

    let loader = ResumeLoader::new(vec![path.clone()]);
    let cache = ProfileCache::with_ttl(Duration::ZERO);

    let first = cached_profile(&cache, &loader).await;
    assert_eq!(first.name, "Before");

    // Let the zero-TTL entry age past its own store instant.
    tokio::time::sleep(Duration::from_millis(5)).await;
    std::fs::write(&path, "# After\n").expect("rewrite resume fixture");
    let second = cached_profile(&cache, &loader).await;
    assert_eq!(second.name, "After");
}
