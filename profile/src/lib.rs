//! Shared resume model and profile extraction pipeline.
//!
//! This crate owns the data shapes used by both the server and the page
//! template: raw resume sources parsed into paragraph [`Document`]s, merged
//! across files, then distilled into a structured [`Profile`]. Resume sources
//! are Markdown; extraction is heuristic and total, so any input produces a
//! profile (with empty fields where nothing matched).

use std::collections::HashSet;
use std::sync::LazyLock;

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Title used when a source has no usable first paragraph.
pub const DEFAULT_TITLE: &str = "Resume";

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid URL pattern"));
static PROJECT_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bproject\b").expect("valid project pattern"));
static NUMBERED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("valid numbered-line pattern"));

// =============================================================================
// DOCUMENT
// =============================================================================

/// One parsed resume source: a title and its non-empty text paragraphs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// First paragraph of the source, or [`DEFAULT_TITLE`].
    pub title: String,
    /// Plain-text paragraphs in source order, trimmed, empties removed.
    pub paragraphs: Vec<String>,
}

/// Extract text paragraphs from a Markdown resume source.
///
/// Headings, paragraphs, and list items each become one paragraph. List items
/// keep a leading `"- "` so downstream extraction can route them the same way
/// as hand-written bullet lines. Inline formatting is dropped; only text is
/// kept.
#[must_use]
pub fn parse_document(source: &str) -> Document {
    fn flush(current: &mut String, item_depth: usize, paragraphs: &mut Vec<String>) {
        let text = current.trim().to_owned();
        current.clear();
        if text.is_empty() {
            return;
        }
        if item_depth > 0 {
            paragraphs.push(format!("- {text}"));
        } else {
            paragraphs.push(text);
        }
    }

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut item_depth: usize = 0;

    for event in Parser::new(source) {
        match event {
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::SoftBreak | Event::HardBreak => current.push(' '),
            Event::Start(Tag::Item) => {
                flush(&mut current, item_depth, &mut paragraphs);
                item_depth += 1;
            }
            Event::End(TagEnd::Item) => {
                flush(&mut current, item_depth, &mut paragraphs);
                item_depth = item_depth.saturating_sub(1);
            }
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::CodeBlock) => {
                flush(&mut current, item_depth, &mut paragraphs);
            }
            _ => {}
        }
    }
    flush(&mut current, item_depth, &mut paragraphs);

    let title = paragraphs
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_TITLE.to_owned());
    Document { title, paragraphs }
}

/// Merge parsed documents into one.
///
/// Paragraph order is preserved across sources; exact duplicates are dropped,
/// keeping the first occurrence. The title comes from the first document with
/// a non-empty title, falling back to [`DEFAULT_TITLE`].
#[must_use]
pub fn merge_documents<I>(docs: I) -> Document
where
    I: IntoIterator<Item = Document>,
{
    let mut combined: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut title: Option<String> = None;

    for doc in docs {
        if title.is_none() && !doc.title.is_empty() {
            title = Some(doc.title);
        }
        for paragraph in doc.paragraphs {
            if seen.contains(&paragraph) {
                continue;
            }
            seen.insert(paragraph.clone());
            combined.push(paragraph);
        }
    }

    Document {
        title: title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
        paragraphs: combined,
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// Structured profile distilled from a merged resume document.
///
/// This is the JSON shape served by `GET /api/resume` and the data fed to the
/// portfolio page template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Document title (usually the resume headline).
    pub title: String,
    /// Candidate name — the first paragraph.
    pub name: String,
    /// First free-text paragraph not captured by another field.
    pub summary: String,
    /// LinkedIn URL, or the whole matching line when no URL was present.
    pub linkedin: String,
    /// GitHub URL, or the whole matching line when no URL was present.
    pub github: String,
    /// Project-like lines: bullet lines, numbered lines, or lines mentioning
    /// the word "project".
    pub projects: Vec<String>,
    /// Remaining prose paragraphs, in order.
    pub paragraphs: Vec<String>,
}

/// Distill a merged document into a [`Profile`].
///
/// The first paragraph becomes the name. Each later paragraph is routed to
/// exactly one field: the first line mentioning "linkedin" and the first
/// mentioning "github" fill those fields (URL extracted when present),
/// project-like lines accumulate under `projects`, the first leftover becomes
/// the summary, and the rest land in `paragraphs`.
#[must_use]
pub fn build_profile(merged: &Document) -> Profile {
    let paras = &merged.paragraphs;
    let name = paras
        .first()
        .cloned()
        .unwrap_or_else(|| merged.title.clone());

    let mut summary = String::new();
    let mut linkedin = String::new();
    let mut github = String::new();
    let mut projects: Vec<String> = Vec::new();
    let mut other: Vec<String> = Vec::new();

    for paragraph in paras.iter().skip(1) {
        let lower = paragraph.to_lowercase();
        if linkedin.is_empty() && lower.contains("linkedin") {
            linkedin = extract_url_or_line(paragraph);
            continue;
        }
        if github.is_empty() && lower.contains("github") {
            github = extract_url_or_line(paragraph);
            continue;
        }
        if is_project_line(paragraph) {
            projects.push(paragraph.trim().to_owned());
            continue;
        }
        if summary.is_empty() {
            summary = paragraph.trim().to_owned();
        } else {
            other.push(paragraph.trim().to_owned());
        }
    }

    Profile {
        title: merged.title.clone(),
        name,
        summary,
        linkedin,
        github,
        projects,
        paragraphs: other,
    }
}

/// First URL in the line, or the trimmed line itself.
fn extract_url_or_line(paragraph: &str) -> String {
    URL_RE
        .find(paragraph)
        .map_or_else(|| paragraph.trim().to_owned(), |m| m.as_str().to_owned())
}

fn is_project_line(paragraph: &str) -> bool {
    let trimmed = paragraph.trim();
    PROJECT_WORD_RE.is_match(paragraph)
        || trimmed.starts_with('-')
        || paragraph.contains('\u{2022}')
        || NUMBERED_LINE_RE.is_match(trimmed)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
