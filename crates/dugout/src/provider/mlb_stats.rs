//! MLB Stats API provider
//!
//! Implementation of `StatsProvider` for the public MLB Stats API
//! (<https://statsapi.mlb.com/>).

use serde::Deserialize;

use crate::config::provider::DEFAULT_BASE_URL;
use crate::error::{DugoutError, Result};
use crate::network::HttpClient;
use crate::records::{
    BattingLine, PitchingLine, PlayerBattingRecord, PlayerPitchingRecord, RosterEntry,
    TeamBattingRecord, TeamPitchingRecord,
};

use super::traits::StatsProvider;
use super::types::{PlayerMatch, TeamStanding};

// =============================================================================
// Internal API response types (serde)
// =============================================================================

#[derive(Debug, Deserialize)]
struct StandingsResponse {
    #[serde(default)]
    records: Vec<DivisionStandings>,
}

#[derive(Debug, Deserialize)]
struct DivisionStandings {
    #[serde(rename = "teamRecords", default)]
    team_records: Vec<RawTeamRecord>,
}

#[derive(Debug, Deserialize)]
struct RawTeamRecord {
    team: RawTeamRef,
    #[serde(rename = "leagueRecord")]
    league_record: RawLeagueRecord,
    #[serde(rename = "runsScored", default)]
    runs_scored: u32,
    #[serde(rename = "runsAllowed", default)]
    runs_allowed: u32,
}

#[derive(Debug, Deserialize)]
struct RawTeamRef {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawLeagueRecord {
    wins: u32,
    losses: u32,
}

/// Envelope for `/teams/{id}/stats` responses
#[derive(Debug, Deserialize)]
struct StatsEnvelope<T> {
    #[serde(default)]
    stats: Vec<StatGroup<T>>,
}

#[derive(Debug, Deserialize)]
struct StatGroup<T> {
    #[serde(default)]
    splits: Vec<StatSplit<T>>,
}

#[derive(Debug, Deserialize)]
struct StatSplit<T> {
    #[serde(default)]
    team: Option<RawTeamRef>,
    stat: T,
}

#[derive(Debug, Deserialize)]
struct RosterResponse {
    #[serde(default)]
    roster: Vec<RawRosterSlot>,
}

#[derive(Debug, Deserialize)]
struct RawRosterSlot {
    person: RawPersonRef,
    #[serde(default)]
    position: RawPosition,
}

#[derive(Debug, Deserialize)]
struct RawPersonRef {
    id: u64,
    #[serde(rename = "fullName")]
    full_name: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawPosition {
    #[serde(default)]
    name: String,
}

/// Envelope for `/people/{id}?hydrate=stats(...)` responses
#[derive(Debug, Deserialize)]
struct PeopleResponse<T> {
    #[serde(default)]
    people: Vec<RawPerson<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
struct RawPerson<T> {
    id: u64,
    #[serde(rename = "fullName")]
    full_name: String,
    #[serde(rename = "currentAge", default)]
    current_age: u32,
    // Absent entirely when the player has no stats for the season
    stats: Option<Vec<StatGroup<T>>>,
}

#[derive(Debug, Deserialize)]
struct PeopleSearchResponse {
    #[serde(default)]
    people: Vec<RawPersonRef>,
}

/// Raw season hitting line — rate stats arrive as strings (e.g. ".276")
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawHittingLine {
    games_played: u32,
    hits: u32,
    doubles: u32,
    triples: u32,
    home_runs: u32,
    base_on_balls: u32,
    strike_outs: u32,
    intentional_walks: u32,
    stolen_bases: u32,
    caught_stealing: u32,
    runs: u32,
    rbi: u32,
    ground_outs: u32,
    air_outs: u32,
    hit_by_pitch: u32,
    at_bats: u32,
    plate_appearances: u32,
    avg: String,
    obp: String,
    slg: String,
    ops: String,
}

/// Raw season pitching line — rate stats arrive as strings
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawPitchingLine {
    wins: u32,
    losses: u32,
    saves: u32,
    games_played: u32,
    games_started: u32,
    innings_pitched: String,
    hits: u32,
    home_runs: u32,
    base_on_balls: u32,
    strike_outs: u32,
    intentional_walks: u32,
    runs: u32,
    earned_runs: u32,
    ground_outs: u32,
    air_outs: u32,
    hit_by_pitch: u32,
    batters_faced: u32,
    blown_saves: u32,
    avg: String,
    obp: String,
    slg: String,
    ops: String,
    whip: String,
    era: String,
    strike_percentage: String,
    strikeout_walk_ratio: String,
    strikeouts_per_9_inn: String,
    walks_per_9_inn: String,
    hits_per_9_inn: String,
    home_runs_per_9: String,
}

// =============================================================================
// Raw -> record conversions
// =============================================================================

/// Parse an upstream rate stat ("2.87", ".576"). The API uses placeholders
/// like "-.--" for undefined rates; those become 0.0.
fn parse_rate(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}

impl From<RawHittingLine> for BattingLine {
    fn from(raw: RawHittingLine) -> Self {
        BattingLine {
            games: raw.games_played,
            hits: raw.hits,
            doubles: raw.doubles,
            triples: raw.triples,
            home_runs: raw.home_runs,
            walks: raw.base_on_balls,
            strikeouts: raw.strike_outs,
            intentional_walks: raw.intentional_walks,
            stolen_bases: raw.stolen_bases,
            caught_stealing: raw.caught_stealing,
            runs: raw.runs,
            rbi: raw.rbi,
            ground_outs: raw.ground_outs,
            air_outs: raw.air_outs,
            hit_by_pitch: raw.hit_by_pitch,
            at_bats: raw.at_bats,
            plate_appearances: raw.plate_appearances,
            batting_average: parse_rate(&raw.avg),
            on_base_percentage: parse_rate(&raw.obp),
            slugging_percentage: parse_rate(&raw.slg),
            ops: parse_rate(&raw.ops),
        }
    }
}

impl From<RawPitchingLine> for PitchingLine {
    fn from(raw: RawPitchingLine) -> Self {
        PitchingLine {
            wins: raw.wins,
            losses: raw.losses,
            saves: raw.saves,
            games: raw.games_played,
            games_started: raw.games_started,
            innings_pitched: parse_rate(&raw.innings_pitched),
            hits: raw.hits,
            home_runs: raw.home_runs,
            walks: raw.base_on_balls,
            strikeouts: raw.strike_outs,
            intentional_walks: raw.intentional_walks,
            runs: raw.runs,
            earned_runs: raw.earned_runs,
            ground_outs: raw.ground_outs,
            air_outs: raw.air_outs,
            hit_by_pitch: raw.hit_by_pitch,
            batters_faced: raw.batters_faced,
            blown_saves: raw.blown_saves,
            batting_average: parse_rate(&raw.avg),
            on_base_percentage: parse_rate(&raw.obp),
            slugging_percentage: parse_rate(&raw.slg),
            ops: parse_rate(&raw.ops),
            whip: parse_rate(&raw.whip),
            era: parse_rate(&raw.era),
            strike_percentage: parse_rate(&raw.strike_percentage),
            strikeout_walk_ratio: parse_rate(&raw.strikeout_walk_ratio),
            strikeout_per_9_inning: parse_rate(&raw.strikeouts_per_9_inn),
            walks_per_9_inning: parse_rate(&raw.walks_per_9_inn),
            hits_per_9_inning: parse_rate(&raw.hits_per_9_inn),
            home_runs_per_9_inning: parse_rate(&raw.home_runs_per_9),
        }
    }
}

impl From<RawTeamRecord> for TeamStanding {
    fn from(raw: RawTeamRecord) -> Self {
        TeamStanding {
            team_id: raw.team.id,
            team_name: raw.team.name,
            wins: raw.league_record.wins,
            losses: raw.league_record.losses,
            runs_scored: raw.runs_scored,
            runs_allowed: raw.runs_allowed,
        }
    }
}

impl From<RawRosterSlot> for RosterEntry {
    fn from(raw: RawRosterSlot) -> Self {
        RosterEntry {
            player_id: raw.person.id,
            player_name: raw.person.full_name,
            position: raw.position.name,
        }
    }
}

/// Pull the first split out of a hydrated person's stat groups, if any
fn first_split<T>(stats: Option<Vec<StatGroup<T>>>) -> Option<T> {
    stats?
        .into_iter()
        .next()?
        .splits
        .into_iter()
        .next()
        .map(|split| split.stat)
}

// =============================================================================
// MlbStatsProvider
// =============================================================================

/// MLB Stats API provider
///
/// Blocking client over the public MLB Stats API. One HTTP GET per call,
/// bounded timeouts and retries via [`HttpClient`].
pub struct MlbStatsProvider {
    client: HttpClient,
    base_url: String,
}

impl MlbStatsProvider {
    /// Create a provider against the public API
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a provider with a custom base URL (for testing or proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
        })
    }

    /// Build a full API URL from an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn team_split<T>(&self, team_id: u32, season: i32, group: &str) -> Result<(String, T)>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let url = self.url(&format!(
            "/teams/{team_id}/stats?group={group}&stats=season&season={season}"
        ));
        let envelope: StatsEnvelope<T> = self.client.get_json(&url)?;
        let split = envelope
            .stats
            .into_iter()
            .next()
            .and_then(|g| g.splits.into_iter().next())
            .ok_or_else(|| {
                DugoutError::UnexpectedShape(format!(
                    "no season {group} split for team {team_id} in {season}"
                ))
            })?;
        let team_name = split.team.map(|t| t.name).unwrap_or_default();
        Ok((team_name, split.stat))
    }

    fn hydrated_person<T>(&self, player_id: u64, season: i32, group: &str) -> Result<RawPerson<T>>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let url = self.url(&format!(
            "/people/{player_id}?hydrate=stats(group=[{group}],type=season,season={season})"
        ));
        let response: PeopleResponse<T> = self.client.get_json(&url)?;
        response.people.into_iter().next().ok_or_else(|| {
            DugoutError::UnexpectedShape(format!("player {player_id} not found upstream"))
        })
    }
}

impl StatsProvider for MlbStatsProvider {
    fn league_standings(&self, league_id: u32, season: i32) -> Result<Vec<TeamStanding>> {
        let url = self.url(&format!(
            "/standings?standingsType=regularSeason&leagueId={league_id}&season={season}"
        ));
        let response: StandingsResponse = self.client.get_json(&url)?;
        Ok(response
            .records
            .into_iter()
            .flat_map(|division| division.team_records)
            .map(TeamStanding::from)
            .collect())
    }

    fn team_hitting(&self, team_id: u32, season: i32) -> Result<TeamBattingRecord> {
        let (team_name, raw): (String, RawHittingLine) =
            self.team_split(team_id, season, "hitting")?;
        Ok(TeamBattingRecord {
            team_id,
            team_name,
            batting: raw.into(),
        })
    }

    fn team_pitching(&self, team_id: u32, season: i32) -> Result<TeamPitchingRecord> {
        let (team_name, raw): (String, RawPitchingLine) =
            self.team_split(team_id, season, "pitching")?;
        Ok(TeamPitchingRecord {
            team_id,
            team_name,
            pitching: raw.into(),
        })
    }

    fn roster(&self, team_id: u32, season: i32) -> Result<Vec<RosterEntry>> {
        let url = self.url(&format!(
            "/teams/{team_id}/roster?rosterType=40Man&season={season}"
        ));
        let response: RosterResponse = self.client.get_json(&url)?;
        Ok(response.roster.into_iter().map(RosterEntry::from).collect())
    }

    fn player_hitting(&self, player_id: u64, season: i32) -> Result<PlayerBattingRecord> {
        let person: RawPerson<RawHittingLine> =
            self.hydrated_person(player_id, season, "hitting")?;
        let batting = first_split(person.stats).map(BattingLine::from).unwrap_or_default();
        Ok(PlayerBattingRecord {
            player_id: person.id,
            player_name: person.full_name,
            age: person.current_age,
            batting,
        })
    }

    fn player_pitching(&self, player_id: u64, season: i32) -> Result<PlayerPitchingRecord> {
        let person: RawPerson<RawPitchingLine> =
            self.hydrated_person(player_id, season, "pitching")?;
        let pitching = first_split(person.stats).map(PitchingLine::from).unwrap_or_default();
        Ok(PlayerPitchingRecord {
            player_id: person.id,
            player_name: person.full_name,
            age: person.current_age,
            pitching,
        })
    }

    fn search_players(&self, name: &str) -> Result<Vec<PlayerMatch>> {
        let url = self.url(&format!("/people/search?names={}", urlencoding::encode(name)));
        let response: PeopleSearchResponse = self.client.get_json(&url)?;
        Ok(response
            .people
            .into_iter()
            .map(|person| PlayerMatch {
                player_id: person.id,
                player_name: person.full_name,
            })
            .collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
