//! Frequency-based extractive summarization.
//!
//! Sentences are scored by the corpus frequency of their non-stopword
//! tokens; the best `k` are returned in reading order. No stemming, no
//! language detection, no randomness: the same input always yields the same
//! summary.

use std::collections::HashMap;

use tracing::debug;

use crate::patterns::{SENTENCE, WORD_TOKEN};

/// Number of sentences returned when the caller asks for zero.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Common English function words excluded from scoring.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "to", "of", "in", "on", "for", "with", "is", "are", "was",
    "were", "be", "been", "by", "as", "at", "from", "that", "this", "it", "its", "we", "you",
    "your",
];

/// A sentence's position in the input and its relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSentence {
    /// 0-based index into [`split_sentences`] output.
    pub index: usize,
    /// Sum of corpus frequencies of the sentence's non-stopword tokens.
    pub score: f64,
}

/// Check whether a lowercase token is a stopword.
#[must_use]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Split text into sentences.
///
/// A sentence is a run of characters other than `.`, `!` and `?` closed by
/// one of them. Text after the last terminator is dropped. Input without any
/// terminator is returned whole as a single sentence, so the result is never
/// empty (it may hold one empty string).
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let sentences: Vec<&str> = SENTENCE.find_iter(text).map(|m| m.as_str()).collect();
    if sentences.is_empty() {
        return vec![text];
    }
    sentences
}

/// Word tokens of `text` (ASCII letters, digits, apostrophes), original case.
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Lowercased non-stopword token counts of `text`.
#[must_use]
pub fn word_frequencies(text: &str) -> HashMap<String, f64> {
    let mut freq = HashMap::new();
    for token in tokenize(text) {
        let lower = token.to_lowercase();
        if is_stopword(&lower) {
            continue;
        }
        *freq.entry(lower).or_insert(0.0) += 1.0;
    }
    freq
}

/// Score every non-blank sentence of `text`, in document order.
///
/// The frequency table is built from the sentences joined with single
/// spaces, so text dropped by [`split_sentences`] does not count.
#[must_use]
pub fn score_sentences(text: &str) -> Vec<ScoredSentence> {
    let sentences = split_sentences(text);
    let freq = word_frequencies(&sentences.join(" "));

    sentences
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.trim().is_empty())
        .map(|(index, s)| {
            let score = tokenize(s.trim())
                .into_iter()
                .map(str::to_lowercase)
                .filter(|t| !is_stopword(t))
                .map(|t| freq.get(&t).copied().unwrap_or(0.0))
                .sum();
            ScoredSentence { index, score }
        })
        .collect()
}

/// Select the `k` highest-scoring sentences of `text`, in reading order.
///
/// `k == 0` selects [`DEFAULT_SUMMARY_SENTENCES`]. When fewer than `k`
/// non-blank sentences exist, all of them are returned. Ties are broken by
/// position: the sort by score is stable, so among equal scores the earlier
/// sentence is selected first.
///
/// # Example
///
/// ```rust
/// use pagebrief::summarize;
///
/// let text = "Rust is fast. Rust is safe. Lunch was fine.";
/// let summary = summarize(text, 2);
/// assert_eq!(summary, ["Rust is fast.", "Rust is safe."]);
/// ```
#[must_use]
pub fn summarize(text: &str, k: usize) -> Vec<String> {
    let k = if k == 0 { DEFAULT_SUMMARY_SENTENCES } else { k };

    let sentences = split_sentences(text);
    let mut scored = score_sentences(text);

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(k);
    scored.sort_by_key(|s| s.index);

    debug!(
        sentences = sentences.len(),
        selected = scored.len(),
        requested = k,
        "summarized text"
    );

    scored
        .into_iter()
        .map(|s| sentences[s.index].trim().to_string())
        .collect()
}
