//! HTTP fetcher implementation
//!
//! This module handles every HTTP request the scraper makes:
//! - Building one HTTP client with browser-like identification headers
//! - GET requests with a bounded timeout
//! - Error classification (transport failure vs. HTTP status)
//!
//! Nothing here retries. A failed fetch is reported to the caller, which
//! decides what to do with it.

use crate::config::HttpConfig;
use crate::ScrapeError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// The client sends the configured `User-Agent` and `Accept-Language`
/// headers on every request and gives up on a request after
/// `timeout_secs`.
///
/// # Example
///
/// ```
/// use shelfscrape::config::HttpConfig;
/// use shelfscrape::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, ScrapeError> {
    let mut headers = HeaderMap::new();
    let accept_language = HeaderValue::from_str(&config.accept_language).map_err(|e| {
        ScrapeError::InputValidation(format!(
            "invalid Accept-Language '{}': {}",
            config.accept_language, e
        ))
    })?;
    headers.insert(ACCEPT_LANGUAGE, accept_language);

    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Fetches pages over HTTP, one GET per call
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher from the HTTP configuration
    pub fn new(config: &HttpConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Fetches a URL and returns the response body
    ///
    /// # Errors
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | DNS failure, refused connection, timeout | `Connection` |
    /// | Body could not be read or decoded | `Connection` |
    /// | Non-2xx status | `HttpStatus` |
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| connection_error(url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| connection_error(url, source))
    }
}

/// Wraps a transport error, noting its kind in the debug log
fn connection_error(url: &str, source: reqwest::Error) -> ScrapeError {
    if source.is_timeout() {
        tracing::debug!("Request timeout for {}", url);
    } else if source.is_connect() {
        tracing::debug!("Connection failed for {}", url);
    }

    ScrapeError::Connection {
        url: url.to_string(),
        source,
    }
}
