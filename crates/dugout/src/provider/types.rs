//! Provider-facing domain types
//!
//! Flat shapes extracted from the upstream documents before the tool layer
//! reshapes them into output records.

use serde::Serialize;

/// One team's raw season-to-date standing (no derived stats)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    pub team_id: u32,
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub runs_scored: u32,
    pub runs_allowed: u32,
}

/// One hit from the upstream free-text player name search
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMatch {
    pub player_id: u64,
    pub player_name: String,
}
