//! Dugout — MLB statistics core
//!
//! Upstream MLB Stats API client, typed output records, Pythagorean
//! expectation, and name-to-id resolution.
//!
//! ## Quick start
//!
//! ```no_run
//! use dugout::provider::{MlbStatsProvider, StatsProvider};
//! use dugout::season::current_season;
//!
//! let provider = MlbStatsProvider::new().unwrap();
//! let standings = provider.standings(current_season()).unwrap();
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod lookup;
pub mod network;
pub mod provider;
pub mod records;
pub mod season;
pub mod stats;

pub use error::{DugoutError, Result};
