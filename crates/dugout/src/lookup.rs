//! Name-to-id resolution
//!
//! Team names resolve against the current season's standings with an
//! exact-then-substring policy; player names delegate to the upstream
//! name search and get enriched from the player-team index.

use serde::Serialize;

use crate::error::Result;
use crate::index::PlayerTeamIndex;
use crate::provider::types::TeamStanding;
use crate::provider::StatsProvider;

/// Sentinel player name returned when the search finds nothing
pub const NO_MATCH_NAME: &str = "NA";

/// A resolved team id/name pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTeam {
    pub team_id: u32,
    pub team_name: String,
}

/// Case-folded team name resolver
///
/// Holds (folded name, id, display name) triples in standings order, which
/// is the documented tie-break for substring matches: the first entry whose
/// folded name contains the query wins.
pub struct TeamNameResolver {
    entries: Vec<(String, u32, String)>,
}

impl TeamNameResolver {
    /// Build a resolver from season standings (all 30 teams, both leagues)
    pub fn from_standings(standings: &[TeamStanding]) -> Self {
        let entries = standings
            .iter()
            .map(|team| {
                (
                    fold(&team.team_name),
                    team.team_id,
                    team.team_name.clone(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Resolve a free-text team name.
    ///
    /// Exact case-folded match wins; otherwise the first entry containing
    /// the query as a substring. No match resolves to `None`.
    pub fn resolve(&self, query: &str) -> Option<ResolvedTeam> {
        let needle = fold(query);
        if needle.is_empty() {
            return None;
        }

        for (folded, id, display) in &self.entries {
            if *folded == needle {
                return Some(ResolvedTeam {
                    team_id: *id,
                    team_name: display.clone(),
                });
            }
        }

        for (folded, id, display) in &self.entries {
            if folded.contains(&needle) {
                return Some(ResolvedTeam {
                    team_id: *id,
                    team_name: display.clone(),
                });
            }
        }

        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A resolved player, optionally enriched with the current team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPlayer {
    pub player_id: u64,
    pub player_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

impl ResolvedPlayer {
    /// The NA/0 sentinel for a search with zero matches
    pub fn no_match() -> Self {
        Self {
            player_id: 0,
            player_name: NO_MATCH_NAME.to_string(),
            team_id: None,
            team_name: None,
        }
    }
}

/// Resolve a free-text player name via the upstream name search.
///
/// Takes the first match; zero matches yield the NA/0 sentinel. When the
/// resolved id is in the player-team index, the current team is attached.
pub fn resolve_player(
    provider: &dyn StatsProvider,
    index: &PlayerTeamIndex,
    name: &str,
) -> Result<ResolvedPlayer> {
    let matches = provider.search_players(name)?;
    let Some(first) = matches.into_iter().next() else {
        return Ok(ResolvedPlayer::no_match());
    };

    let (team_id, team_name) = match index.get(first.player_id) {
        Some(entry) => (Some(entry.team_id), Some(entry.team_name.clone())),
        None => (None, None),
    };

    Ok(ResolvedPlayer {
        player_id: first.player_id,
        player_name: first.player_name,
        team_id,
        team_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticTeamCatalog;
    use crate::error::{DugoutError, Result};
    use crate::provider::types::PlayerMatch;
    use crate::records::*;

    fn standing(team_id: u32, team_name: &str) -> TeamStanding {
        TeamStanding {
            team_id,
            team_name: team_name.to_string(),
            wins: 0,
            losses: 0,
            runs_scored: 0,
            runs_allowed: 0,
        }
    }

    fn resolver() -> TeamNameResolver {
        TeamNameResolver::from_standings(&[
            standing(147, "New York Yankees"),
            standing(121, "New York Mets"),
            standing(120, "Washington Nationals"),
            standing(140, "Texas Rangers"),
        ])
    }

    // ---- team resolution ----

    #[test]
    fn test_exact_case_insensitive_match() {
        let resolved = resolver().resolve("new york yankees").unwrap();
        assert_eq!(resolved.team_id, 147);
        assert_eq!(resolved.team_name, "New York Yankees");
    }

    #[test]
    fn test_exact_match_beats_substring() {
        // "new york yankees" is a substring-compatible query for both New
        // York clubs; the exact match must win regardless of order
        let r = TeamNameResolver::from_standings(&[
            standing(121, "New York Mets"),
            standing(147, "New York Yankees"),
        ]);
        let resolved = r.resolve("New York Yankees").unwrap();
        assert_eq!(resolved.team_id, 147);
    }

    #[test]
    fn test_substring_fallback() {
        let resolved = resolver().resolve("nationals").unwrap();
        assert_eq!(resolved.team_id, 120);
        assert_eq!(resolved.team_name, "Washington Nationals");
    }

    #[test]
    fn test_substring_tie_break_is_first_in_order() {
        // "new york" matches both; first in standings order wins
        let resolved = resolver().resolve("new york").unwrap();
        assert_eq!(resolved.team_id, 147);
    }

    #[test]
    fn test_query_whitespace_is_trimmed() {
        let resolved = resolver().resolve("  Texas Rangers  ").unwrap();
        assert_eq!(resolved.team_id, 140);
    }

    #[test]
    fn test_no_match_is_none() {
        assert!(resolver().resolve("Montreal Expos").is_none());
    }

    #[test]
    fn test_empty_query_is_none() {
        assert!(resolver().resolve("").is_none());
        assert!(resolver().resolve("   ").is_none());
    }

    #[test]
    fn test_resolver_from_empty_standings() {
        let r = TeamNameResolver::from_standings(&[]);
        assert!(r.is_empty());
        assert!(r.resolve("anything").is_none());
    }

    // ---- player resolution ----

    /// Mock provider with a canned search response
    struct MockSearch {
        matches: Vec<PlayerMatch>,
        fail: bool,
    }

    impl StatsProvider for MockSearch {
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
            // Only the Yankees roster carries our test player
            if team_id == 147 {
                Ok(vec![RosterEntry {
                    player_id: 592450,
                    player_name: "Aaron Judge".to_string(),
                    position: "Outfielder".to_string(),
                }])
            } else {
                Ok(vec![])
            }
        }

        fn player_hitting(&self, _player_id: u64, _season: i32) -> Result<PlayerBattingRecord> {
            Ok(PlayerBattingRecord::default())
        }

        fn player_pitching(&self, _player_id: u64, _season: i32) -> Result<PlayerPitchingRecord> {
            Ok(PlayerPitchingRecord::default())
        }

        fn search_players(&self, _name: &str) -> Result<Vec<PlayerMatch>> {
            if self.fail {
                return Err(DugoutError::Upstream {
                    status: 500,
                    url: "/people/search".to_string(),
                });
            }
            Ok(self.matches.clone())
        }
    }

    #[test]
    fn test_player_no_match_sentinel() {
        let provider = MockSearch {
            matches: vec![],
            fail: false,
        };
        let index = PlayerTeamIndex::default();
        let resolved = resolve_player(&provider, &index, "Nobody Atall").unwrap();
        assert_eq!(resolved, ResolvedPlayer::no_match());
        assert_eq!(resolved.player_id, 0);
        assert_eq!(resolved.player_name, "NA");
        assert!(resolved.team_id.is_none());
    }

    #[test]
    fn test_player_first_match_wins() {
        let provider = MockSearch {
            matches: vec![
                PlayerMatch {
                    player_id: 592450,
                    player_name: "Aaron Judge".to_string(),
                },
                PlayerMatch {
                    player_id: 111111,
                    player_name: "Aaron Judgeson".to_string(),
                },
            ],
            fail: false,
        };
        let index = PlayerTeamIndex::default();
        let resolved = resolve_player(&provider, &index, "Aaron Judge").unwrap();
        assert_eq!(resolved.player_id, 592450);
        assert_eq!(resolved.player_name, "Aaron Judge");
    }

    #[test]
    fn test_player_enriched_from_index() {
        let provider = MockSearch {
            matches: vec![PlayerMatch {
                player_id: 592450,
                player_name: "Aaron Judge".to_string(),
            }],
            fail: false,
        };
        let catalog = StaticTeamCatalog::new();
        let index = PlayerTeamIndex::build(&provider, &catalog, 2025);
        let resolved = resolve_player(&provider, &index, "Aaron Judge").unwrap();
        assert_eq!(resolved.team_id, Some(147));
        assert_eq!(resolved.team_name.as_deref(), Some("New York Yankees"));
    }

    #[test]
    fn test_player_search_error_propagates() {
        let provider = MockSearch {
            matches: vec![],
            fail: true,
        };
        let index = PlayerTeamIndex::default();
        let result = resolve_player(&provider, &index, "Aaron Judge");
        assert!(result.is_err());
    }

    #[test]
    fn test_no_match_serializes_without_team_keys() {
        let v = serde_json::to_value(ResolvedPlayer::no_match()).unwrap();
        assert_eq!(v["player_name"], "NA");
        assert_eq!(v["player_id"], 0);
        assert!(v.get("team_id").is_none());
        assert!(v.get("team_name").is_none());
    }
}
