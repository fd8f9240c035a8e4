//! Upstream payload shapes and their mapping into the canonical model.
//!
//! The roster service is not consistent: teams arrive wrapped or bare, players
//! arrive either nested with per-game stats or flat upper-snake rows with
//! season totals. Everything is funnelled into `crate::model` here so nothing
//! downstream has to care which endpoint produced a row.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::ApiError;
use crate::model::{Player, SeasonStats, StatLine, Team, Transaction};

// Lenient scalars

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

// Teams

#[derive(Deserialize)]
#[serde(untagged)]
enum TeamsPayload {
    Wrapped { teams: Vec<WireTeam> },
    Bare(Vec<WireTeam>),
}

#[derive(Deserialize)]
struct WireTeam {
    #[serde(default, deserialize_with = "lenient_string")]
    id: String,
    #[serde(alias = "fullName")]
    full_name: String,
    abbreviation: String,
}

impl From<WireTeam> for Team {
    fn from(wire: WireTeam) -> Self {
        Team {
            id: wire.id,
            full_name: wire.full_name,
            abbreviation: wire.abbreviation,
        }
    }
}

pub fn parse_teams(body: &str) -> Result<Vec<Team>, ApiError> {
    let teams = match serde_json::from_str::<TeamsPayload>(body)? {
        TeamsPayload::Wrapped { teams } | TeamsPayload::Bare(teams) => teams,
    };
    Ok(teams.into_iter().map(Team::from).collect())
}

// Players

#[derive(Deserialize)]
#[serde(untagged)]
enum PlayersPayload {
    Wrapped { players: Vec<WirePlayer> },
    Bare(Vec<WirePlayer>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WirePlayer {
    Nested(NestedPlayer),
    Flat(RosterRow),
}

/// `/api/players` and `/api/players/team/{abbr}`; stats are already per game
#[derive(Deserialize)]
struct NestedPlayer {
    name: String,
    #[serde(default)]
    team: Option<TeamRef>,
    #[serde(default)]
    last_season_stats: Option<NestedStats>,
    #[serde(default, deserialize_with = "lenient_f64")]
    star_value: Option<f64>,
}

#[derive(Deserialize)]
struct TeamRef {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    abbreviation: Option<String>,
}

#[derive(Deserialize, Default)]
struct NestedStats {
    #[serde(rename = "PTS", default, deserialize_with = "lenient_f64")]
    points: Option<f64>,
    #[serde(rename = "REB", default, deserialize_with = "lenient_f64")]
    rebounds: Option<f64>,
    #[serde(rename = "AST", default, deserialize_with = "lenient_f64")]
    assists: Option<f64>,
    #[serde(rename = "GP", default, deserialize_with = "lenient_f64")]
    games_played: Option<f64>,
}

/// `/api/rosters/players`; stats are season totals
#[derive(Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct RosterRow {
    player_name: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    team_abbreviation: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pts: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    reb: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    ast: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    gp: Option<f64>,
}

fn per_game_line(value: Option<f64>) -> StatLine {
    StatLine {
        per_game: value,
        total: None,
    }
}

fn total_line(value: Option<f64>) -> StatLine {
    StatLine {
        per_game: None,
        total: value,
    }
}

impl From<WirePlayer> for Player {
    fn from(wire: WirePlayer) -> Self {
        match wire {
            WirePlayer::Nested(p) => {
                let stats = p.last_season_stats.unwrap_or_default();
                Player {
                    name: p.name,
                    team_abbreviation: p.team.and_then(|t| t.abbreviation),
                    star_value: p.star_value,
                    season_stats: SeasonStats {
                        points: per_game_line(stats.points),
                        rebounds: per_game_line(stats.rebounds),
                        assists: per_game_line(stats.assists),
                        games_played: stats.games_played,
                    },
                }
            }
            WirePlayer::Flat(row) => Player {
                name: row.player_name,
                team_abbreviation: row.team_abbreviation,
                star_value: row.value,
                season_stats: SeasonStats {
                    points: total_line(row.pts),
                    rebounds: total_line(row.reb),
                    assists: total_line(row.ast),
                    games_played: row.gp,
                },
            },
        }
    }
}

pub fn parse_players(body: &str) -> Result<Vec<Player>, ApiError> {
    let players = match serde_json::from_str::<PlayersPayload>(body)? {
        PlayersPayload::Wrapped { players } | PlayersPayload::Bare(players) => players,
    };
    Ok(players.into_iter().map(Player::from).collect())
}

// Transactions

#[derive(Deserialize)]
struct WireTransaction {
    #[serde(rename = "TRANSACTION_DATE", default, deserialize_with = "lenient_string")]
    date: String,
    #[serde(rename = "PLAYER_SLUG", default, deserialize_with = "lenient_string")]
    player_slug: String,
    #[serde(rename = "TEAM_SLUG", default, deserialize_with = "lenient_string")]
    team_slug: String,
    #[serde(rename = "Transaction_Type", default, deserialize_with = "lenient_string")]
    transaction_type: String,
    #[serde(
        rename = "TRANSACTION_DESCRIPTION",
        default,
        deserialize_with = "lenient_string"
    )]
    description: String,
}

impl From<WireTransaction> for Transaction {
    fn from(wire: WireTransaction) -> Self {
        Transaction {
            date: wire.date,
            player_slug: wire.player_slug,
            team_slug: wire.team_slug,
            transaction_type: wire.transaction_type,
            description: wire.description,
        }
    }
}

/// `{ NBA_Player_Movement: { rows: [...] } }`
///
/// A missing or non-array `rows` is reported as `ApiError::MissingRows`.
pub fn parse_transactions(body: &str) -> Result<Vec<Transaction>, ApiError> {
    let mut payload: Value = serde_json::from_str(body)?;
    let rows = match payload
        .get_mut("NBA_Player_Movement")
        .and_then(|movement| movement.get_mut("rows"))
    {
        Some(rows @ Value::Array(_)) => rows.take(),
        _ => return Err(ApiError::MissingRows),
    };
    let rows: Vec<WireTransaction> = serde_json::from_value(rows)?;
    Ok(rows.into_iter().map(Transaction::from).collect())
}
