//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS, USER_AGENT};

/// Initializes the HTTP client used to talk to the backend.
///
/// Creates a `reqwest::Client` configured with:
/// - The request timeout from the configuration
/// - A short TCP connect timeout, so an unreachable backend fails fast
/// - The crate User-Agent
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
