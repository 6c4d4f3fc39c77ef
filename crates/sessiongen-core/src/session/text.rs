//! Text cleaning rules for abstracts and bios.

/// Marker the data source uses for "intentionally left blank".
const PLACEHOLDER: &str = ".";

/// Paragraph break after line-ending normalization.
const PARAGRAPH_BREAK: &str = "\n\n";

/// Continuation that renders a following paragraph as a markdown block quote.
const QUOTED_PARAGRAPH_BREAK: &str = "\n>\n> ";

/// Converts CRLF line endings to LF and trims surrounding whitespace.
///
/// Idempotent: cleaning a cleaned string returns it unchanged.
pub fn clean_text(raw: &str) -> String {
    raw.replace("\r\n", "\n").trim().to_string()
}

/// Whether cleaned text carries content, i.e. is neither empty nor `.`.
pub fn is_present(cleaned: &str) -> bool {
    !cleaned.is_empty() && cleaned != PLACEHOLDER
}

/// Quotes every paragraph after the first.
///
/// Each `\n\n` becomes `\n>\n> `. Applied once per presenter; running it on
/// already quoted text is not a no-op.
pub fn quote_paragraphs(cleaned: &str) -> String {
    cleaned.replace(PARAGRAPH_BREAK, QUOTED_PARAGRAPH_BREAK)
}
