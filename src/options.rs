//! Configuration options for content extraction.
//!
//! The `Options` struct controls which elements the extractor treats as
//! headings and which subtrees it leaves out of the main text.

/// Tags whose subtrees never contribute to the main text.
pub const DEFAULT_SKIP_TAGS: &[&str] = &["script", "style", "nav", "footer", "header"];

/// Tags collected as headings.
pub const DEFAULT_HEADING_TAGS: &[&str] = &["h1", "h2", "h3"];

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use pagebrief::Options;
///
/// let options = Options {
///     url: Some("https://example.com/item".to_string()),
///     ..Options::default()
/// };
/// assert_eq!(options.heading_tags, ["h1", "h2", "h3"]);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Source URL of the document, copied verbatim into `ExtractResult.url`.
    ///
    /// Default: `None` (empty string in the result)
    pub url: Option<String>,

    /// Element names collected as headings, compared case-insensitively.
    ///
    /// Default: `h1`, `h2`, `h3`
    pub heading_tags: Vec<String>,

    /// Element names whose subtrees are left out of the main text.
    ///
    /// The test is applied at the element itself, before descending.
    ///
    /// Default: `script`, `style`, `nav`, `footer`, `header`
    pub skip_tags: Vec<String>,
}

impl Options {
    pub(crate) fn is_heading(&self, tag: &str) -> bool {
        self.heading_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub(crate) fn is_skipped(&self, tag: &str) -> bool {
        self.skip_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            heading_tags: DEFAULT_HEADING_TAGS.iter().map(ToString::to_string).collect(),
            skip_tags: DEFAULT_SKIP_TAGS.iter().map(ToString::to_string).collect(),
        }
    }
}
