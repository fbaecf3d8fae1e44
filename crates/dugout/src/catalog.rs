//! Static team catalog
//!
//! The 30 MLB clubs with their Stats API ids. Used to validate requested
//! team ids and to drive the player-team index crawl. Definition order is
//! the deliberate tie-break order for substring name matches.

/// The 30 MLB team ids and display names, keyed by the Stats API ids.
const TEAMS: [(u32, &str); 30] = [
    (108, "Los Angeles Angels"),
    (109, "Arizona Diamondbacks"),
    (110, "Baltimore Orioles"),
    (111, "Boston Red Sox"),
    (112, "Chicago Cubs"),
    (113, "Cincinnati Reds"),
    (114, "Cleveland Guardians"),
    (115, "Colorado Rockies"),
    (116, "Detroit Tigers"),
    (117, "Houston Astros"),
    (118, "Kansas City Royals"),
    (119, "Los Angeles Dodgers"),
    (120, "Washington Nationals"),
    (121, "New York Mets"),
    (133, "Athletics"),
    (134, "Pittsburgh Pirates"),
    (135, "San Diego Padres"),
    (136, "Seattle Mariners"),
    (137, "San Francisco Giants"),
    (138, "St. Louis Cardinals"),
    (139, "Tampa Bay Rays"),
    (140, "Texas Rangers"),
    (141, "Toronto Blue Jays"),
    (142, "Minnesota Twins"),
    (143, "Philadelphia Phillies"),
    (144, "Atlanta Braves"),
    (145, "Chicago White Sox"),
    (146, "Miami Marlins"),
    (147, "New York Yankees"),
    (158, "Milwaukee Brewers"),
];

/// Fixed mapping of the 30 known team ids to display names
///
/// Constant for the life of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTeamCatalog;

impl StaticTeamCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Whether `team_id` is one of the 30 known clubs
    pub fn contains(&self, team_id: u32) -> bool {
        TEAMS.iter().any(|&(id, _)| id == team_id)
    }

    /// Display name for a known team id
    pub fn name_of(&self, team_id: u32) -> Option<&'static str> {
        TEAMS
            .iter()
            .find(|&&(id, _)| id == team_id)
            .map(|&(_, name)| name)
    }

    /// Iterate over all (id, name) entries in definition order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &'static str)> {
        TEAMS.iter().copied()
    }

    /// Number of catalog entries (always 30)
    pub fn len(&self) -> usize {
        TEAMS.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
