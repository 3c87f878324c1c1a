//! Compiled regex patterns for extraction and summarization.
//!
//! All patterns are compiled once at first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Extraction Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches price-like tokens: a currency symbol, an optional whitespace
/// character, then digits optionally followed by digits, commas and periods.
///
/// The `(?i)` flag has no effect on this pattern but is kept so the pattern
/// text stays identical to the published one.
pub static PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\$|€|£)\s?[0-9]+[0-9,.]*").expect("PRICE regex")
});

// =============================================================================
// Summarization Patterns
// =============================================================================

/// Matches a sentence: a run of non-terminators closed by `.`, `!` or `?`.
pub static SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^.!?]+[.!?]").expect("SENTENCE regex")
});

/// Matches a word token: ASCII letters, digits and apostrophes.
pub static WORD_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9']+").expect("WORD_TOKEN regex")
});
