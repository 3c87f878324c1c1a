//! Error types for pagebrief.
//!
//! Extraction and summarization never fail; they degrade to empty fields.
//! These errors come from the fetch layer that sits in front of them.

use std::time::Duration;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested URL could not be parsed or uses an unsupported scheme.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl {
        /// The URL as supplied by the caller.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP request failed before a response was received.
    #[cfg(feature = "fetch")]
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("non-2xx status: {0}")]
    Status(String),

    /// The fetch did not complete within its deadline.
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the
    /// upstream site.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. })
    }
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;
