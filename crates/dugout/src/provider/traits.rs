//! Statistics provider trait
//!
//! Defines the interface the rest of the crate uses to reach the upstream
//! statistics service.

use crate::error::Result;
use crate::records::{
    PlayerBattingRecord, PlayerPitchingRecord, RosterEntry, TeamBattingRecord, TeamPitchingRecord,
};

use super::types::{PlayerMatch, TeamStanding};

/// A source of MLB season statistics
///
/// Implementations fetch one upstream document per call and return the
/// leaf fields the tool surface needs, already flattened and renamed.
pub trait StatsProvider: Send + Sync {
    /// Regular-season standings for one league and season
    fn league_standings(&self, league_id: u32, season: i32) -> Result<Vec<TeamStanding>>;

    /// Standings for both leagues, in league-id order
    fn standings(&self, season: i32) -> Result<Vec<TeamStanding>> {
        let mut teams = Vec::new();
        for league_id in crate::config::provider::LEAGUE_IDS {
            teams.extend(self.league_standings(league_id, season)?);
        }
        Ok(teams)
    }

    /// A team's aggregate season hitting statistics
    fn team_hitting(&self, team_id: u32, season: i32) -> Result<TeamBattingRecord>;

    /// A team's aggregate season pitching statistics
    fn team_pitching(&self, team_id: u32, season: i32) -> Result<TeamPitchingRecord>;

    /// A team's 40-man roster for a season
    fn roster(&self, team_id: u32, season: i32) -> Result<Vec<RosterEntry>>;

    /// A player's season hitting statistics (zero-filled when the player
    /// has no hitting line for that season)
    fn player_hitting(&self, player_id: u64, season: i32) -> Result<PlayerBattingRecord>;

    /// A player's season pitching statistics (same fallback)
    fn player_pitching(&self, player_id: u64, season: i32) -> Result<PlayerPitchingRecord>;

    /// Free-text player name search, best matches first
    fn search_players(&self, name: &str) -> Result<Vec<PlayerMatch>>;
}
