//! Error types for dugout
//!
//! Centralized error handling using thiserror. Upstream failures are typed
//! and propagated; callers decide whether to surface or degrade.

use thiserror::Error;

/// Main error type for the dugout core
#[derive(Error, Debug)]
pub enum DugoutError {
    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status} for {url}")]
    Upstream { status: u16, url: String },

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// Result type alias for dugout
pub type Result<T> = std::result::Result<T, DugoutError>;

impl DugoutError {
    /// Whether retrying the same request could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            DugoutError::Network(e) => e.is_connect() || e.is_timeout(),
            DugoutError::Upstream { status, .. } => *status >= 500,
            DugoutError::UnexpectedShape(_) => false,
        }
    }
}

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("Could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_decode() {
        return "Invalid response from server".to_string();
    }
    format!("Network error: {e}")
}
