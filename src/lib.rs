//! # pagebrief
//!
//! Web page content extraction and frequency-based extractive summarization.
//!
//! Two independent components do the work:
//!
//! - the **extractor** walks a parsed HTML tree and returns the page title,
//!   visible main text, h1-h3 headings, a sorted set of link targets and
//!   price-like tokens found in the text;
//! - the **summarizer** picks the sentences whose words are most frequent
//!   across the text and returns them in reading order.
//!
//! Both are pure functions over in-memory input. The optional `fetch` and
//! `server` features add an HTTP fetcher and a small JSON API around them.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagebrief::{extract, summarize};
//!
//! let html = r#"<html><head><title>Deals</title></head>
//! <body><nav><a href="/home">Home</a></nav>
//! <p>Kettles are on sale for $19.99 today. Kettles boil water fast.</p></body></html>"#;
//!
//! let result = extract(html);
//! assert_eq!(result.title, "Deals");
//! assert_eq!(result.links, ["/home"]);
//! assert_eq!(result.prices, ["$19.99"]);
//!
//! let summary = summarize(&result.text, 1);
//! assert_eq!(summary.len(), 1);
//! ```
//!
//! ## Features
//!
//! - `fetch`: [`fetch::Fetcher`], an HTTP client that feeds the extractor
//! - `cli`: the `extract_stdin` and `summarize_stdin` tools
//! - `server` (default): the JSON API and the `server` binary

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Read-only DOM traversal over `dom_query` documents.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Frequency-based extractive summarization.
pub mod summarize;

/// URL validation for fetch targets.
pub mod url_utils;

/// HTTP fetching of pages to extract.
#[cfg(feature = "fetch")]
pub mod fetch;

/// JSON API over extraction and summarization.
#[cfg(feature = "server")]
pub mod server;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract_document, find_prices, get_headings, get_links, get_main_text, get_title};
pub use options::{Options, DEFAULT_HEADING_TAGS, DEFAULT_SKIP_TAGS};
pub use result::ExtractResult;
pub use summarize::{summarize, ScoredSentence, DEFAULT_SUMMARY_SENTENCES};

/// Extracts structured content from an HTML document using default options.
///
/// Never fails: malformed or empty markup yields empty fields.
///
/// # Example
///
/// ```rust
/// use pagebrief::extract;
///
/// let result = extract("<body><script>ignore()</script><p>Hello  world</p></body>");
/// assert_eq!(result.text, "Hello world");
/// ```
#[must_use]
pub fn extract(html: &str) -> ExtractResult {
    extract_with_options(html, &Options::default())
}

/// Extracts structured content from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use pagebrief::{extract_with_options, Options};
///
/// let options = Options {
///     url: Some("https://example.com/".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options("<h1>Hi</h1>", &options);
/// assert_eq!(result.url, "https://example.com/");
/// assert_eq!(result.headings, ["Hi"]);
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractResult {
    let document = dom::parse(html);
    extract::extract_document(&document, options)
}

/// Extracts structured content from HTML bytes with automatic encoding detection.
///
/// The charset is read from `<meta charset>` or `<meta http-equiv>`;
/// without a declaration the bytes are read as UTF-8. Invalid sequences are
/// replaced with U+FFFD.
///
/// # Example
///
/// ```rust
/// use pagebrief::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Tea \xA35</p></body></html>";
/// let result = extract_bytes(html);
/// assert_eq!(result.prices, ["\u{a3}5"]);
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> ExtractResult {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts structured content from HTML bytes with custom options and
/// automatic encoding detection.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ExtractResult {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
