//! HTTP fetching.
//!
//! A [`Fetcher`] performs a single GET with a fixed user agent, rejects
//! non-2xx responses, decodes the body to UTF-8 and hands it to the
//! extractor.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use tracing::{debug, info, warn};

use crate::encoding::decode_body;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::ExtractResult;
use crate::url_utils::parse_fetch_url;

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("pagebrief/", env!("CARGO_PKG_VERSION"));

/// Client-level timeout covering connect, request and body.
pub const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(12);

/// A fetched, decoded HTML page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL as requested by the caller.
    pub url: String,
    /// URL after redirects.
    pub final_url: String,
    /// Response status code.
    pub status: u16,
    /// `Content-Type` header value, if any.
    pub content_type: Option<String>,
    /// Body decoded to UTF-8.
    pub html: String,
}

/// HTTP fetcher for single pages.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use pagebrief::fetch::Fetcher;
///
/// # async fn run() -> pagebrief::Result<()> {
/// let fetcher = Fetcher::new()?;
/// let result = fetcher
///     .fetch_and_extract("https://example.com", Duration::from_secs(15))
///     .await?;
/// println!("{}", result.title);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Fetcher {
    /// Create a fetcher with the default user agent and client timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_CLIENT_TIMEOUT)
    }

    /// Create a fetcher whose client gives up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Set a custom user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Fetch `url`, failing if the whole exchange exceeds `deadline`.
    pub async fn fetch(&self, url: &str, deadline: Duration) -> Result<FetchedPage> {
        let parsed = parse_fetch_url(url)?;

        match tokio::time::timeout(deadline, self.fetch_inner(url, parsed)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(url = %url, ?deadline, "fetch deadline exceeded");
                Err(Error::Timeout(deadline))
            }
        }
    }

    async fn fetch_inner(&self, url: &str, parsed: url::Url) -> Result<FetchedPage> {
        debug!(url = %url, "HTTP fetch starting");

        let response = self
            .client
            .get(parsed)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                Error::Request(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "non-2xx response");
            return Err(Error::Status(status.to_string()));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let body = response.bytes().await?;
        let html = decode_body(&body, content_type.as_deref());

        info!(url = %url, status = status.as_u16(), bytes = body.len(), "fetched page");

        Ok(FetchedPage {
            url: url.to_string(),
            final_url,
            status: status.as_u16(),
            content_type,
            html,
        })
    }

    /// Fetch `url` and run extraction on the body with default options.
    pub async fn fetch_and_extract(&self, url: &str, deadline: Duration) -> Result<ExtractResult> {
        self.fetch_and_extract_with_options(url, deadline, &Options::default())
            .await
    }

    /// Fetch `url` and run extraction with `options`.
    ///
    /// `options.url` is replaced by the requested URL.
    pub async fn fetch_and_extract_with_options(
        &self,
        url: &str,
        deadline: Duration,
        options: &Options,
    ) -> Result<ExtractResult> {
        let page = self.fetch(url, deadline).await?;
        let options = Options {
            url: Some(page.url),
            ..options.clone()
        };
        Ok(crate::extract_with_options(&page.html, &options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_the_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("pagebrief/"));
    }

    #[tokio::test]
    async fn invalid_url_fails_before_any_request() {
        let fetcher = Fetcher::new().unwrap_or_else(|e| panic!("client: {e}"));
        let err = fetcher
            .fetch("not a url", Duration::from_secs(1))
            .await
            .err();

        assert!(err.is_some_and(|e| e.is_client_error()));
    }

    #[tokio::test]
    async fn unreachable_host_is_an_upstream_error() {
        let fetcher = Fetcher::with_timeout(Duration::from_secs(2))
            .unwrap_or_else(|e| panic!("client: {e}"));
        // Port 9 on loopback (discard) is closed on test hosts
        let err = fetcher
            .fetch("http://127.0.0.1:9/", Duration::from_secs(3))
            .await
            .err();

        assert!(err.is_some_and(|e| !e.is_client_error()));
    }
}
