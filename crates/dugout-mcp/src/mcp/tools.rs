//! MCP tool definitions and handlers
//!
//! Each tool fetches one or more upstream documents through the shared
//! `StatsProvider`, reshapes them into typed records, and answers with a
//! pretty-printed JSON payload.
//!
//! Error policy follows the two observed tiers: statistics fetches fail
//! loudly (tool error carrying the underlying message), lookups degrade to
//! sentinel/empty results and never fail visibly.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::warn;

use dugout::catalog::StaticTeamCatalog;
use dugout::index::PlayerTeamIndex;
use dugout::lookup::{resolve_player, TeamNameResolver};
use dugout::provider::StatsProvider;
use dugout::records::TeamStandingRecord;
use dugout::season::{current_season, resolve_season};
use dugout::stats::{pythagorean_expectation, DEFAULT_EXPONENT};

use super::types::{ToolDefinition, ToolResult};

/// Shared state handed to every tool handler
pub struct Toolbox {
    pub provider: Box<dyn StatsProvider>,
    pub catalog: StaticTeamCatalog,
    pub index: Arc<PlayerTeamIndex>,
}

/// Schema fragment for the optional season parameter shared by most tools
fn season_param() -> Value {
    json!({
        "type": "integer",
        "description": "Season year (1877 to last completed season). Defaults to the current year."
    })
}

/// Return all tool definitions for tools/list
pub fn list_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "get_standings",
            description: "Get MLB standings for a season, for both the American and National League. \
                Each team's record includes wins, losses, runs scored/allowed, and the Pythagorean \
                expected wins and losses per Bill James.",
            input_schema: json!({
                "type": "object",
                "properties": { "season": season_param() }
            }),
        },
        ToolDefinition {
            name: "get_team_batting",
            description: "Get an MLB team's aggregate batting statistics for a season: hits, doubles, \
                triples, home runs, walks, strikeouts, stolen bases, runs, rbi, batting average, \
                on-base percentage, slugging percentage, ops, and more. Example: team_id 120 is the \
                Washington Nationals.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "team_id": { "type": "integer", "description": "MLB team id" },
                    "season": season_param()
                },
                "required": ["team_id"]
            }),
        },
        ToolDefinition {
            name: "get_team_pitching",
            description: "Get an MLB team's aggregate pitching statistics for a season: wins, losses, \
                saves, innings pitched, strikeouts, era, whip, opponent batting line, per-9-inning \
                rates, and more.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "team_id": { "type": "integer", "description": "MLB team id" },
                    "season": season_param()
                },
                "required": ["team_id"]
            }),
        },
        ToolDefinition {
            name: "get_roster",
            description: "Get a team's 40-man roster for a season, keyed by player id, with player \
                names and positions. Example: team_id 147 is the New York Yankees.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "team_id": { "type": "integer", "description": "MLB team id" },
                    "season": season_param()
                },
                "required": ["team_id"]
            }),
        },
        ToolDefinition {
            name: "get_player_batting",
            description: "Get an MLB player's season batting statistics, plus name and age. A player \
                with no batting line for the season gets zeroed statistics. Example: player_id 592450 \
                is Aaron Judge.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "player_id": { "type": "integer", "description": "MLB player id" },
                    "season": season_param()
                },
                "required": ["player_id"]
            }),
        },
        ToolDefinition {
            name: "get_player_pitching",
            description: "Get an MLB player's season pitching statistics, plus name and age. A player \
                with no pitching line for the season gets zeroed statistics.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "player_id": { "type": "integer", "description": "MLB player id" },
                    "season": season_param()
                },
                "required": ["player_id"]
            }),
        },
        ToolDefinition {
            name: "lookup_player",
            description: "Look up a player's MLB id by full name (e.g. \"Aaron Judge\"). Returns the \
                best match's name and id, with the player's current team when known. Returns \
                player_name \"NA\" and player_id 0 when nothing matches.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "player_name": { "type": "string", "description": "Player full name" }
                },
                "required": ["player_name"]
            }),
        },
        ToolDefinition {
            name: "lookup_team",
            description: "Look up a team's MLB id by name (e.g. \"New York Yankees\"). Exact \
                case-insensitive match first, then substring match. Returns an empty object when \
                nothing matches.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "team_name": { "type": "string", "description": "Team name" }
                },
                "required": ["team_name"]
            }),
        },
        ToolDefinition {
            name: "get_player_team",
            description: "Get the team a player currently belongs to, from the roster index built at \
                startup. Unknown player ids return team and player name \"Unknown\".",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "player_id": { "type": "integer", "description": "MLB player id" }
                },
                "required": ["player_id"]
            }),
        },
    ]
}

/// Dispatch a tool call to the appropriate handler
pub fn call_tool(name: &str, args: &Value, toolbox: &Toolbox) -> ToolResult {
    match name {
        "get_standings" => handle_standings(args, toolbox),
        "get_team_batting" => handle_team_batting(args, toolbox),
        "get_team_pitching" => handle_team_pitching(args, toolbox),
        "get_roster" => handle_roster(args, toolbox),
        "get_player_batting" => handle_player_batting(args, toolbox),
        "get_player_pitching" => handle_player_pitching(args, toolbox),
        "lookup_player" => handle_lookup_player(args, toolbox),
        "lookup_team" => handle_lookup_team(args, toolbox),
        "get_player_team" => handle_player_team(args, toolbox),
        _ => ToolResult::error(format!("Unknown tool: {name}")),
    }
}

// ---------------------------------------------------------------------------
// Argument helpers
// ---------------------------------------------------------------------------

fn arg_season(args: &Value) -> i32 {
    let requested = args.get("season").and_then(Value::as_i64).map(|v| v as i32);
    resolve_season(requested, current_season())
}

fn arg_u64(args: &Value, key: &str) -> Option<u64> {
    args.get(key).and_then(Value::as_u64)
}

fn arg_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

fn known_team_id(args: &Value, toolbox: &Toolbox) -> Result<u32, ToolResult> {
    let Some(team_id) = arg_u64(args, "team_id") else {
        return Err(ToolResult::error("Missing required parameter: team_id"));
    };
    let team_id = team_id as u32;
    if !toolbox.catalog.contains(team_id) {
        return Err(ToolResult::error(format!("Unrecognized team id: {team_id}")));
    }
    Ok(team_id)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn handle_standings(args: &Value, toolbox: &Toolbox) -> ToolResult {
    let season = arg_season(args);
    let standings = match toolbox.provider.standings(season) {
        Ok(s) => s,
        Err(e) => return ToolResult::error(format!("Standings fetch failed: {e}")),
    };

    // Keyed by team id, like the record map the API consumers expect
    let mut teams = Map::new();
    for team in standings {
        let games = i64::from(team.wins) + i64::from(team.losses);
        let pyth = pythagorean_expectation(
            i64::from(team.runs_scored),
            i64::from(team.runs_allowed),
            games,
            DEFAULT_EXPONENT,
        );
        let record = TeamStandingRecord::new(
            team.team_id,
            team.team_name,
            team.wins,
            team.losses,
            team.runs_scored,
            team.runs_allowed,
            pyth,
        );
        teams.insert(
            record.team_id.to_string(),
            serde_json::to_value(&record).unwrap_or(Value::Null),
        );
    }

    ToolResult::json(&json!({ "season": season, "teams": teams }))
}

fn handle_team_batting(args: &Value, toolbox: &Toolbox) -> ToolResult {
    let team_id = match known_team_id(args, toolbox) {
        Ok(id) => id,
        Err(result) => return result,
    };
    let season = arg_season(args);
    match toolbox.provider.team_hitting(team_id, season) {
        Ok(record) => ToolResult::json(&record),
        Err(e) => ToolResult::error(format!("Team batting fetch failed: {e}")),
    }
}

fn handle_team_pitching(args: &Value, toolbox: &Toolbox) -> ToolResult {
    let team_id = match known_team_id(args, toolbox) {
        Ok(id) => id,
        Err(result) => return result,
    };
    let season = arg_season(args);
    match toolbox.provider.team_pitching(team_id, season) {
        Ok(record) => ToolResult::json(&record),
        Err(e) => ToolResult::error(format!("Team pitching fetch failed: {e}")),
    }
}

fn handle_roster(args: &Value, toolbox: &Toolbox) -> ToolResult {
    let team_id = match known_team_id(args, toolbox) {
        Ok(id) => id,
        Err(result) => return result,
    };
    let season = arg_season(args);
    let roster = match toolbox.provider.roster(team_id, season) {
        Ok(r) => r,
        Err(e) => return ToolResult::error(format!("Roster fetch failed: {e}")),
    };

    let mut players = Map::new();
    for entry in roster {
        players.insert(
            entry.player_id.to_string(),
            serde_json::to_value(&entry).unwrap_or(Value::Null),
        );
    }
    ToolResult::json(&json!({
        "team_id": team_id,
        "season": season,
        "roster": players,
    }))
}

fn handle_player_batting(args: &Value, toolbox: &Toolbox) -> ToolResult {
    let Some(player_id) = arg_u64(args, "player_id") else {
        return ToolResult::error("Missing required parameter: player_id");
    };
    let season = arg_season(args);
    match toolbox.provider.player_hitting(player_id, season) {
        Ok(record) => ToolResult::json(&record),
        Err(e) => ToolResult::error(format!("Player batting fetch failed: {e}")),
    }
}

fn handle_player_pitching(args: &Value, toolbox: &Toolbox) -> ToolResult {
    let Some(player_id) = arg_u64(args, "player_id") else {
        return ToolResult::error("Missing required parameter: player_id");
    };
    let season = arg_season(args);
    match toolbox.provider.player_pitching(player_id, season) {
        Ok(record) => ToolResult::json(&record),
        Err(e) => ToolResult::error(format!("Player pitching fetch failed: {e}")),
    }
}

fn handle_lookup_player(args: &Value, toolbox: &Toolbox) -> ToolResult {
    let Some(player_name) = arg_str(args, "player_name") else {
        return ToolResult::error("Missing required parameter: player_name");
    };
    // Lookups degrade instead of failing: an upstream error yields the
    // same NA/0 sentinel as an empty search
    let resolved = match resolve_player(toolbox.provider.as_ref(), &toolbox.index, player_name) {
        Ok(r) => r,
        Err(e) => {
            warn!(player_name, error = %e, "player search failed, degrading to sentinel");
            dugout::lookup::ResolvedPlayer::no_match()
        }
    };
    ToolResult::json(&resolved)
}

fn handle_lookup_team(args: &Value, toolbox: &Toolbox) -> ToolResult {
    let Some(team_name) = arg_str(args, "team_name") else {
        return ToolResult::error("Missing required parameter: team_name");
    };
    let standings = match toolbox.provider.standings(current_season()) {
        Ok(s) => s,
        Err(e) => {
            warn!(team_name, error = %e, "standings fetch failed, degrading to empty result");
            return ToolResult::json(&json!({}));
        }
    };
    let resolver = TeamNameResolver::from_standings(&standings);
    match resolver.resolve(team_name) {
        Some(team) => ToolResult::json(&team),
        None => ToolResult::json(&json!({})),
    }
}

fn handle_player_team(args: &Value, toolbox: &Toolbox) -> ToolResult {
    let Some(player_id) = arg_u64(args, "player_id") else {
        return ToolResult::error("Missing required parameter: player_id");
    };
    let entry = toolbox.index.lookup(player_id);
    ToolResult::json(&json!({
        "player_id": player_id,
        "player_name": entry.player_name,
        "team_id": entry.team_id,
        "team_name": entry.team_name,
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
