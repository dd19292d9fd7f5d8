//! HTTP client initialization.
//!
//! This module provides the function that builds the HTTP client used for page
//! fetches.

use std::time::Duration;

use crate::config::{ExtractorConfig, TCP_CONNECT_TIMEOUT_SECS};
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Overall request timeout from the configuration
/// - TCP connect timeout capped at the request timeout
/// - Redirects disabled, so the fetcher can record the redirect history itself
///
/// # Arguments
///
/// * `config` - Extractor configuration containing user-agent and timeout settings
///
/// # Returns
///
/// A configured HTTP client ready for making requests.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &ExtractorConfig) -> Result<reqwest::Client, reqwest::Error> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    let connect_timeout = Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS).min(timeout);
    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()
}
