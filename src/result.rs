//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// Result of content extraction from an HTML document.
///
/// Serializes to the JSON shape returned by `GET /api/fetch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// URL the document was fetched from (empty when unknown).
    pub url: String,

    /// Trimmed text of the first `<title>`, or empty.
    pub title: String,

    /// Visible text outside script/style/nav/footer/header, whitespace-collapsed.
    pub text: String,

    /// Flattened h1-h3 text in document order. Not deduplicated.
    pub headings: Vec<String>,

    /// Distinct `href` values of `<a>` elements, sorted ascending.
    pub links: Vec<String>,

    /// Price-like substrings of `text`, first-occurrence order, deduplicated.
    pub prices: Vec<String>,
}

impl ExtractResult {
    /// Title and main text joined by a blank line, the input used for
    /// page summaries.
    #[must_use]
    pub fn summary_input(&self) -> String {
        format!("{}\n\n{}", self.title, self.text)
    }
}
