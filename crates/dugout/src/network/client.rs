//! Shared HTTP client wrapper
//!
//! Thin wrapper around `reqwest::blocking::Client` that centralizes
//! USER_AGENT, timeouts, and a small retry budget for transient failures.

use std::thread;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::network::{
    CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, RETRY_ATTEMPTS, RETRY_BASE_DELAY_MS, USER_AGENT,
};
use crate::error::{DugoutError, Result};

/// Shared HTTP client with standard configuration
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a new client with default dugout settings
    pub fn new() -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .build()?;
        Ok(Self { inner })
    }

    /// GET a URL and deserialize the JSON response.
    ///
    /// Non-2xx responses become `DugoutError::Upstream`. Transient failures
    /// (connect/timeout errors, 5xx) are retried with doubling delays up to
    /// the configured attempt budget.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut attempt = 0;
        loop {
            match self.get_json_once(url) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt + 1 < RETRY_ATTEMPTS => {
                    let delay = RETRY_BASE_DELAY_MS << attempt;
                    debug!(url, attempt, error = %e, "retrying upstream request in {delay}ms");
                    thread::sleep(Duration::from_millis(delay));
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn get_json_once<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.inner.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DugoutError::Upstream {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let data = resp.json::<T>()?;
        Ok(data)
    }

    /// Access the underlying reqwest client
    pub fn inner(&self) -> &reqwest::blocking::Client {
        &self.inner
    }
}
