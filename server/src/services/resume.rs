//! Resume loading and profile assembly.
//!
//! ARCHITECTURE
//! ============
//! The loader owns the configured source paths and degrades per-file:
//! unreadable sources become placeholder documents naming the failing path,
//! so the page and API always render. Parsing, merging, and field extraction
//! live in the `profile` crate.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use std::path::{Path, PathBuf};

use profile::{Document, Profile};

use super::cache::ProfileCache;

const DEFAULT_RESUME_PATHS: &str = "resume.md,Resume.md";

/// Loads and assembles the profile from the configured resume sources.
#[derive(Clone, Debug)]
pub struct ResumeLoader {
    paths: Vec<PathBuf>,
}

impl ResumeLoader {
    #[must_use]
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Loader over `RESUME_PATHS` (comma-separated; empty entries ignored).
    #[must_use]
    pub fn from_env() -> Self {
        let raw = std::env::var("RESUME_PATHS").unwrap_or_else(|_| DEFAULT_RESUME_PATHS.to_owned());
        Self::new(parse_paths(&raw))
    }

    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Build the profile from disk.
    ///
    /// Paths that exist are preferred; when none exist the configured list is
    /// used as-is so unreadable paths surface as placeholder content instead
    /// of an empty page. Loading never fails.
    pub async fn load(&self) -> Profile {
        let existing: Vec<PathBuf> = self
            .paths
            .iter()
            .filter(|path| path.exists())
            .cloned()
            .collect();
        let chosen = if existing.is_empty() { self.paths.clone() } else { existing };

        let mut documents = Vec::with_capacity(chosen.len());
        for path in &chosen {
            match tokio::fs::read_to_string(path).await {
                Ok(source) => documents.push(profile::parse_document(&source)),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "resume file unreadable");
                    documents.push(placeholder_document(path));
                }
            }
        }
        profile::build_profile(&profile::merge_documents(documents))
    }
}

/// Cache-through profile fetch used by the page and API routes.
pub async fn cached_profile(cache: &ProfileCache, loader: &ResumeLoader) -> Profile {
    if let Some(profile) = cache.get() {
        return profile;
    }
    let profile = loader.load().await;
    cache.put(profile.clone());
    tracing::debug!(ttl_secs = cache.ttl().as_secs(), "profile cache refreshed");
    profile
}

fn parse_paths(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn placeholder_document(path: &Path) -> Document {
    Document {
        title: profile::DEFAULT_TITLE.to_owned(),
        paragraphs: vec![format!("Unable to read resume file: {}", path.display())],
    }
}
