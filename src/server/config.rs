//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

use crate::fetch::{DEFAULT_CLIENT_TIMEOUT, DEFAULT_USER_AGENT};

/// Sentences returned by the summarize and autopilot endpoints.
pub const API_SUMMARY_SENTENCES: usize = 5;

/// Runtime configuration for the HTTP API.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use pagebrief::server::ServerConfig;
///
/// let config = ServerConfig {
///     fetch_deadline: Duration::from_secs(5),
///     ..ServerConfig::default()
/// };
/// assert_eq!(config.summary_sentences, 5);
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to.
    ///
    /// Default: `0.0.0.0:8787`
    pub addr: SocketAddr,

    /// Deadline for `GET /api/fetch`.
    ///
    /// Default: 15s
    pub fetch_deadline: Duration,

    /// Deadline for the fetch inside `POST /api/autopilot`.
    ///
    /// Default: 20s
    pub autopilot_deadline: Duration,

    /// HTTP client timeout applied to every outbound request.
    ///
    /// Default: 12s
    pub client_timeout: Duration,

    /// Sentences per summary.
    ///
    /// Default: `5`
    pub summary_sentences: usize,

    /// User agent for outbound requests.
    ///
    /// Default: `pagebrief/<version>`
    pub user_agent: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8787)),
            fetch_deadline: Duration::from_secs(15),
            autopilot_deadline: Duration::from_secs(20),
            client_timeout: DEFAULT_CLIENT_TIMEOUT,
            summary_sentences: API_SUMMARY_SENTENCES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.addr.port(), 8787);
        assert_eq!(config.fetch_deadline, Duration::from_secs(15));
        assert_eq!(config.autopilot_deadline, Duration::from_secs(20));
        assert_eq!(config.client_timeout, Duration::from_secs(12));
        assert_eq!(config.summary_sentences, 5);
        assert!(config.user_agent.starts_with("pagebrief/"));
    }
}
