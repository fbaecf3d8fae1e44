//! Networking utilities
//!
//! Shared blocking HTTP client used by the upstream provider.

pub mod client;

pub use client::HttpClient;
