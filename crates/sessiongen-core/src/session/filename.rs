//! Filesystem-safe document names derived from titles.

use once_cell::sync::Lazy;
use regex::Regex;

/// Extension of generated documents.
pub const DOCUMENT_EXTENSION: &str = ".md";

static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9\s]").expect("valid filename regex"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Turns a display title into a markdown filename.
///
/// Characters other than ASCII letters, digits and whitespace are deleted,
/// then each whitespace run becomes a single `-`. A title with nothing left
/// after stripping yields the bare extension `.md`; callers writing files
/// must treat an empty stem themselves.
///
/// ```
/// use sessiongen_core::session::filename::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Foo \u{2014} bar Keynote"), "Foo-bar-Keynote.md");
/// ```
pub fn sanitize_filename(title: &str) -> String {
    let stripped = DISALLOWED_CHARS.replace_all(title, "");
    let stem = WHITESPACE_RUN.replace_all(stripped.trim(), "-");
    format!("{}{}", stem, DOCUMENT_EXTENSION)
}
