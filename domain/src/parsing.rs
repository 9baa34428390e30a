//! Model output parsing for the report pipeline.
//!
//! Pure text handling with no I/O: each function turns raw model output
//! into a typed value or a [`ParseError`] describing why it could not.
//!
//! # Functions
//!
//! | Function | Stage | Produces |
//! |----------|-------|----------|
//! | [`split_paragraphs`] | Reframing | up to `max` [`Paragraph`]s |
//! | [`extract_search_query`] | Enrichment | short image-search phrase |
//! | [`extract_image_url`] | Enrichment | one [`ImageReference`] |

use crate::report::{ImageReference, Paragraph};
use crate::util::truncate_str;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Longest search query kept, in words
pub const MAX_QUERY_WORDS: usize = 10;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>()\[\]"'`]+"#).expect("URL pattern is a valid regex")
});

/// Why a model response could not be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("model returned no paragraphs")]
    NoParagraphs,

    #[error("model returned an empty search query")]
    EmptyQuery,

    #[error("no usable image URL in model response: {0}")]
    NoUrl(String),
}

/// Split reframing output into paragraphs.
///
/// The text is split on blank lines, each piece trimmed, empty pieces
/// dropped, and the result truncated to `max` entries. Fewer than `max`
/// paragraphs are returned as-is; zero is an error.
pub fn split_paragraphs(raw: &str, max: usize) -> Result<Vec<Paragraph>, ParseError> {
    let normalized = raw.replace("\r\n", "\n");

    let paragraphs: Vec<Paragraph> = normalized
        .trim()
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .take(max)
        .map(Paragraph::new)
        .collect();

    if paragraphs.is_empty() {
        return Err(ParseError::NoParagraphs);
    }
    Ok(paragraphs)
}

/// Extract the image-search phrase from the model's first enrichment turn.
///
/// Takes the first non-empty line, strips a leading `Query:` label and
/// surrounding quotes, and keeps at most [`MAX_QUERY_WORDS`] words.
pub fn extract_search_query(raw: &str) -> Result<String, ParseError> {
    let line = raw
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or(ParseError::EmptyQuery)?;

    let line = strip_label(line, "query:");
    let line = line.trim_matches(|c: char| matches!(c, '"' | '\'' | '`' | '*') || c.is_whitespace());

    let query = line
        .split_whitespace()
        .take(MAX_QUERY_WORDS)
        .collect::<Vec<_>>()
        .join(" ");

    if query.is_empty() {
        return Err(ParseError::EmptyQuery);
    }
    Ok(query)
}

/// Extract the selected image URL from the model's final enrichment turn.
///
/// The model is asked for a bare URL but may wrap it in markdown, angle
/// brackets, emphasis markers or a sentence. The first `http(s)` URL found
/// is used.
pub fn extract_image_url(raw: &str) -> Result<ImageReference, ParseError> {
    let no_url = || ParseError::NoUrl(truncate_str(raw.trim(), 200).to_string());

    let candidate = URL_PATTERN.find(raw).ok_or_else(no_url)?.as_str();
    let candidate = candidate.trim_end_matches(['.', ',', ';', ':', '!', '?', '*', '_']);

    match url::Url::parse(candidate) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {
            Ok(ImageReference::new(candidate))
        }
        _ => Err(no_url()),
    }
}

fn strip_label<'a>(line: &'a str, label: &str) -> &'a str {
    match line.get(..label.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(label) => &line[label.len()..],
        _ => line,
    }
}
