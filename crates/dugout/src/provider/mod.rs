//! Upstream statistics providers
//!
//! The seam between tool logic and the MLB Stats API. Everything above
//! this module talks to the `StatsProvider` trait, so index building and
//! name resolution are testable against mocks.

pub mod mlb_stats;
pub mod traits;
pub mod types;

// Re-exports
pub use mlb_stats::MlbStatsProvider;
pub use traits::StatsProvider;
pub use types::{PlayerMatch, TeamStanding};
