//! Player-team index
//!
//! Reverse lookup from player id to current team, built once at startup by
//! crawling the 40-man roster of every club in the static catalog. The
//! finished index is immutable; rebuilding replaces it wholesale.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::StaticTeamCatalog;
use crate::provider::StatsProvider;

/// Sentinel name for players absent from every roster at build time
pub const UNKNOWN: &str = "Unknown";

/// A player's current club, as of the index build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerTeamEntry {
    pub team_id: u32,
    pub team_name: String,
    pub player_name: String,
}

impl PlayerTeamEntry {
    /// The "Unknown" sentinel triple returned for absent player ids
    pub fn unknown() -> Self {
        Self {
            team_id: 0,
            team_name: UNKNOWN.to_string(),
            player_name: UNKNOWN.to_string(),
        }
    }
}

/// Player id -> current team mapping
#[derive(Debug, Default)]
pub struct PlayerTeamIndex {
    entries: HashMap<u64, PlayerTeamEntry>,
}

impl PlayerTeamIndex {
    /// Crawl every catalog team's 40-man roster for `season` and build the
    /// full index.
    ///
    /// A failed per-team roster fetch is logged and skipped so one upstream
    /// hiccup cannot block startup; that team simply contributes no entries.
    pub fn build(
        provider: &dyn StatsProvider,
        catalog: &StaticTeamCatalog,
        season: i32,
    ) -> Self {
        let mut entries = HashMap::new();
        for (team_id, team_name) in catalog.iter() {
            match provider.roster(team_id, season) {
                Ok(roster) => {
                    for player in roster {
                        entries.insert(
                            player.player_id,
                            PlayerTeamEntry {
                                team_id,
                                team_name: team_name.to_string(),
                                player_name: player.player_name,
                            },
                        );
                    }
                }
                Err(e) => {
                    warn!(team_id, team = team_name, error = %e, "skipping roster, fetch failed");
                }
            }
        }
        info!(players = entries.len(), season, "player-team index built");
        Self { entries }
    }

    /// Entry for a player id, if the player was on any roster at build time
    pub fn get(&self, player_id: u64) -> Option<&PlayerTeamEntry> {
        self.entries.get(&player_id)
    }

    /// Entry for a player id, degrading to the "Unknown" sentinel
    pub fn lookup(&self, player_id: u64) -> PlayerTeamEntry {
        self.get(player_id)
            .cloned()
            .unwrap_or_else(PlayerTeamEntry::unknown)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DugoutError, Result};
    use crate::provider::types::{PlayerMatch, TeamStanding};
    use crate::records::*;

    /// Mock provider serving fixed rosters, with one team optionally failing
    struct MockRosters {
        failing_team: Option<u32>,
    }

    impl StatsProvider for MockRosters {
        fn league_standings(&self, _league_id: u32, _season: i32) -> Result<Vec<TeamStanding>> {
            Ok(vec![])
        }

        fn team_hitting(&self, _team_id: u32, _season: i32) -> Result<TeamBattingRecord> {
            Ok(TeamBattingRecord::default())
        }

        fn team_pitching(&self, _team_id: u32, _season: i32) -> Result<TeamPitchingRecord> {
            Ok(TeamPitchingRecord::default())
        }

        fn roster(&self, team_id: u32, _season: i32) -> Result<Vec<RosterEntry>> {
            if self.failing_team == Some(team_id) {
                return Err(DugoutError::Upstream {
                    status: 503,
                    url: format!("/teams/{team_id}/roster"),
                });
            }
            // Two synthetic players per team, ids derived from the team id
            Ok(vec![
                RosterEntry {
                    player_id: u64::from(team_id) * 1000 + 1,
                    player_name: format!("Player A of {team_id}"),
                    position: "Pitcher".to_string(),
                },
                RosterEntry {
                    player_id: u64::from(team_id) * 1000 + 2,
                    player_name: format!("Player B of {team_id}"),
                    position: "Catcher".to_string(),
                },
            ])
        }

        fn player_hitting(&self, _player_id: u64, _season: i32) -> Result<PlayerBattingRecord> {
            Ok(PlayerBattingRecord::default())
        }

        fn player_pitching(&self, _player_id: u64, _season: i32) -> Result<PlayerPitchingRecord> {
            Ok(PlayerPitchingRecord::default())
        }

        fn search_players(&self, _name: &str) -> Result<Vec<PlayerMatch>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_build_indexes_every_rostered_player() {
        let provider = MockRosters { failing_team: None };
        let catalog = StaticTeamCatalog::new();
        let index = PlayerTeamIndex::build(&provider, &catalog, 2025);

        // 30 teams, two players each
        assert_eq!(index.len(), 60);
        let entry = index.get(147_001).unwrap();
        assert_eq!(entry.team_id, 147);
        assert_eq!(entry.team_name, "New York Yankees");
        assert_eq!(entry.player_name, "Player A of 147");
    }

    #[test]
    fn test_build_skips_failing_team() {
        let provider = MockRosters {
            failing_team: Some(147),
        };
        let catalog = StaticTeamCatalog::new();
        let index = PlayerTeamIndex::build(&provider, &catalog, 2025);

        // Yankees contribute nothing, the other 29 teams still do
        assert_eq!(index.len(), 58);
        assert!(index.get(147_001).is_none());
        assert!(index.get(120_001).is_some());
    }

    #[test]
    fn test_lookup_absent_player_is_unknown_sentinel() {
        let provider = MockRosters { failing_team: None };
        let catalog = StaticTeamCatalog::new();
        let index = PlayerTeamIndex::build(&provider, &catalog, 2025);

        let entry = index.lookup(999_999_999);
        assert_eq!(entry, PlayerTeamEntry::unknown());
        assert_eq!(entry.team_id, 0);
        assert_eq!(entry.team_name, "Unknown");
        assert_eq!(entry.player_name, "Unknown");
    }

    #[test]
    fn test_lookup_present_player_clones_entry() {
        let provider = MockRosters { failing_team: None };
        let catalog = StaticTeamCatalog::new();
        let index = PlayerTeamIndex::build(&provider, &catalog, 2025);

        let entry = index.lookup(120_002);
        assert_eq!(entry.team_name, "Washington Nationals");
        assert_eq!(entry.player_name, "Player B of 120");
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let provider = MockRosters { failing_team: None };
        let catalog = StaticTeamCatalog::new();
        let first = PlayerTeamIndex::build(&provider, &catalog, 2025);
        let second = PlayerTeamIndex::build(&provider, &catalog, 2025);

        assert_eq!(first.len(), second.len());
        for (id, entry) in &first.entries {
            assert_eq!(second.get(*id), Some(entry));
        }
    }

    #[test]
    fn test_default_index_is_empty() {
        let index = PlayerTeamIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.lookup(1), PlayerTeamEntry::unknown());
    }
}
