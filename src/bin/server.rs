//! HTTP API server: embedded UI plus the fetch, summarize and autopilot endpoints.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use pagebrief::server::{self, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "PAGEBRIEF_ADDR", default_value = "0.0.0.0:8787")]
    addr: SocketAddr,

    /// Deadline for /api/fetch, in seconds
    #[arg(long, env = "PAGEBRIEF_FETCH_DEADLINE", default_value_t = 15)]
    fetch_deadline: u64,

    /// Deadline for /api/autopilot, in seconds
    #[arg(long, env = "PAGEBRIEF_AUTOPILOT_DEADLINE", default_value_t = 20)]
    autopilot_deadline: u64,

    /// HTTP client timeout, in seconds
    #[arg(long, env = "PAGEBRIEF_CLIENT_TIMEOUT", default_value_t = 12)]
    client_timeout: u64,

    /// Sentences per summary
    #[arg(long, env = "PAGEBRIEF_SUMMARY_SENTENCES", default_value_t = server::API_SUMMARY_SENTENCES)]
    summary_sentences: usize,

    /// User agent for outbound requests
    #[arg(long, env = "PAGEBRIEF_USER_AGENT")]
    user_agent: Option<String>,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            addr: self.addr,
            fetch_deadline: Duration::from_secs(self.fetch_deadline),
            autopilot_deadline: Duration::from_secs(self.autopilot_deadline),
            client_timeout: Duration::from_secs(self.client_timeout),
            summary_sentences: self.summary_sentences,
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pagebrief=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Args::parse().into_config();
    let addr = config.addr;

    let state = AppState::new(config).context("Failed to create HTTP client")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!("listening on {}", addr);

    server::serve(listener, state).await.context("Server error")?;

    Ok(())
}
