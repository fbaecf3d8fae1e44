//! Typed output records
//!
//! Flattened, renamed schemas returned by the tool surface. Each record is
//! an explicit struct rather than an ad-hoc key/value map, so the
//! "no stats for that season" fallback is simply `Default::default()` with
//! the identifying fields filled in.

use serde::Serialize;

use crate::stats::PythagoreanExpectation;

/// A team's season-to-date standing, with derived Pythagorean record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStandingRecord {
    pub team_id: u32,
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub runs_scored: u32,
    pub runs_allowed: u32,
    pub pythagorean_wins: u32,
    pub pythagorean_losses: u32,
}

impl TeamStandingRecord {
    /// Attach a derived Pythagorean record to raw standing numbers
    pub fn new(
        team_id: u32,
        team_name: String,
        wins: u32,
        losses: u32,
        runs_scored: u32,
        runs_allowed: u32,
        pyth: PythagoreanExpectation,
    ) -> Self {
        Self {
            team_id,
            team_name,
            wins,
            losses,
            runs_scored,
            runs_allowed,
            pythagorean_wins: pyth.pythagorean_wins,
            pythagorean_losses: pyth.pythagorean_losses,
        }
    }
}

/// Aggregate batting line shared by team and player records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BattingLine {
    pub games: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub intentional_walks: u32,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
    pub runs: u32,
    pub rbi: u32,
    pub ground_outs: u32,
    pub air_outs: u32,
    pub hit_by_pitch: u32,
    pub at_bats: u32,
    pub plate_appearances: u32,
    pub batting_average: f64,
    pub on_base_percentage: f64,
    pub slugging_percentage: f64,
    pub ops: f64,
}

/// Aggregate pitching line shared by team and player records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PitchingLine {
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    pub games: u32,
    pub games_started: u32,
    pub innings_pitched: f64,
    pub hits: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub intentional_walks: u32,
    pub runs: u32,
    pub earned_runs: u32,
    pub ground_outs: u32,
    pub air_outs: u32,
    pub hit_by_pitch: u32,
    pub batters_faced: u32,
    pub blown_saves: u32,
    pub batting_average: f64,
    pub on_base_percentage: f64,
    pub slugging_percentage: f64,
    pub ops: f64,
    pub whip: f64,
    pub era: f64,
    pub strike_percentage: f64,
    pub strikeout_walk_ratio: f64,
    pub strikeout_per_9_inning: f64,
    pub walks_per_9_inning: f64,
    pub hits_per_9_inning: f64,
    pub home_runs_per_9_inning: f64,
}

/// A team's aggregate season batting statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamBattingRecord {
    pub team_id: u32,
    pub team_name: String,
    #[serde(flatten)]
    pub batting: BattingLine,
}

/// A team's aggregate season pitching statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamPitchingRecord {
    pub team_id: u32,
    pub team_name: String,
    #[serde(flatten)]
    pub pitching: PitchingLine,
}

/// A player's season batting statistics
///
/// `batting` stays zeroed when the player has no stats for the requested
/// season; name and age are still populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerBattingRecord {
    pub player_id: u64,
    pub player_name: String,
    pub age: u32,
    #[serde(flatten)]
    pub batting: BattingLine,
}

/// A player's season pitching statistics (same missing-season fallback)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerPitchingRecord {
    pub player_id: u64,
    pub player_name: String,
    pub age: u32,
    #[serde(flatten)]
    pub pitching: PitchingLine,
}

/// One player on a team's 40-man roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub player_id: u64,
    pub player_name: String,
    pub position: String,
}
