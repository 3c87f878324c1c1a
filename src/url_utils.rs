//! URL utilities for validating fetch targets.

use url::Url;

use crate::error::{Error, Result};

/// Parse and validate a URL the fetcher is asked to retrieve.
///
/// The input is trimmed; it must be an absolute `http` or `https` URL with
/// a host.
///
/// # Example
///
/// ```rust
/// use pagebrief::url_utils::parse_fetch_url;
///
/// assert!(parse_fetch_url("https://example.com/a?b=1").is_ok());
/// assert!(parse_fetch_url("/relative/path").is_err());
/// ```
pub fn parse_fetch_url(url_str: &str) -> Result<Url> {
    let trimmed = url_str.trim();
    let invalid = |reason: &str| Error::InvalidUrl {
        url: url_str.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("empty url"));
    }

    let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid("unsupported scheme"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }

    Ok(url)
}
