//! HTTP download of installer scripts.

use crate::error::{DevbootError, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Fetches text resources over HTTP/HTTPS.
pub struct HttpFetcher {
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 60-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(60))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the body of `url` as text.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let fail = |message: String| DevbootError::Fetch {
            url: url.to_string(),
            message,
        };

        let client = Client::builder()
            .user_agent(concat!("devboot/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|e| fail(e.to_string()))?;

        tracing::debug!("Fetching {}", url);
        let response = client.get(url).send().map_err(|e| fail(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fail(format!("HTTP {}", response.status())));
        }

        response.text().map_err(|e| fail(e.to_string()))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}
