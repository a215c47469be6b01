//! Text processing utilities.
//!
//! Splits input into paragraphs, sentences, and words. The rules are
//! deliberately plain: regex splits with no abbreviation or decimal
//! awareness, so that counts stay comparable with earlier releases.

use regex::Regex;
use std::sync::LazyLock;

/// Blank-line paragraph separator: two line breaks with only whitespace between.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// One or more terminators followed by whitespace or end of text.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s|$)").expect("valid regex"));

/// A maximal run of word characters (letters, digits, underscore).
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// Split text into paragraphs (separated by blank lines).
///
/// Fragments that are empty after trimming are dropped.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split text into sentences on runs of `.`, `!` or `?`.
///
/// A run only ends a sentence when whitespace or the end of the text follows
/// it, so `3.14` and `example.com` stay inside one sentence. The terminators
/// themselves are not part of the returned fragments.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract words in order of appearance, keeping their original case.
///
/// Punctuation is never part of a word; `don't` yields `don` and `t`.
pub fn extract_words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}
