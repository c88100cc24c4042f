//! Document-to-text extraction.
//!
//! Takes a contract export on disk and produces cleaned text: page-number
//! artifacts stripped, whitespace collapsed. Input and extraction failures
//! are the only hard failures in the whole pipeline; everything downstream
//! degrades instead.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document not found: {path}")]
    NotFound { path: String },

    #[error("unsupported document type '{extension}': only plain-text exports (.txt, .md) are supported")]
    UnsupportedType { extension: String },

    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("document {path} contains no text after cleanup")]
    Empty { path: String },
}

#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Display name, taken from the file name.
    pub name: String,
    pub text: String,
}

static PAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*page\s+\d+(?:\s+of\s+\d+)?\s*$").expect("static page marker pattern")
});

static NUMBER_ONLY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s*$").expect("static number line pattern"));

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("static space run pattern"));

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("static blank run pattern"));

const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "text"];

pub fn extract_text(path: &Path) -> Result<ExtractedDocument, ExtractError> {
    let display = path.display().to_string();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ExtractError::UnsupportedType { extension });
    }

    if !path.exists() {
        return Err(ExtractError::NotFound { path: display });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ExtractError::Unreadable {
        path: display.clone(),
        source,
    })?;

    let text = clean_text(&raw);
    if text.is_empty() {
        return Err(ExtractError::Empty { path: display });
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document")
        .to_string();

    Ok(ExtractedDocument { name, text })
}

/// Strips pagination artifacts and collapses excessive whitespace.
pub fn clean_text(raw: &str) -> String {
    let kept: Vec<&str> = raw
        .lines()
        .filter(|line| !PAGE_MARKER.is_match(line) && !NUMBER_ONLY_LINE.is_match(line))
        .collect();

    let joined = kept.join("\n");
    let collapsed_spaces = SPACE_RUNS.replace_all(&joined, " ");
    let collapsed_blanks = BLANK_RUNS.replace_all(&collapsed_spaces, "\n\n");

    collapsed_blanks.trim().to_string()
}
