/// Roster grid: column set, filter + sort pipeline and empty-state messages
use crate::filter::filter_players;
use crate::model::Player;
use crate::stats::Stat;
use crate::table::{Alignment, CellValue, ColumnDef, SortKey, SortState, SortableGrid};

pub const LOADING_MESSAGE: &str = "Loading NBA players...";
pub const NO_SELECTION_MESSAGE: &str = "No players found. Please select a team.";
pub const EMPTY_TEAM_MESSAGE: &str = "No players found for this team.";
pub const EMPTY_LEAGUE_MESSAGE: &str = "No players found.";
pub const TEAM_PLACEHOLDER: &str = "-- Select a Team --";
pub const ALL_PLAYERS_LABEL: &str = "All players";

/// Column ids of `player_columns`, in display order
pub const PLAYER_COLUMN_IDS: [&str; 6] = ["name", "team", "stars", "pts", "reb", "ast"];

/// What the roster view is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamSelection {
    /// Nothing picked yet; no fetch is issued
    #[default]
    None,
    /// League-wide list from `/api/players`
    All,
    /// One team by abbreviation
    Team(String),
}

impl TeamSelection {
    pub fn is_none(&self) -> bool {
        matches!(self, TeamSelection::None)
    }
}

fn stat_column(id: &'static str, stat: Stat) -> ColumnDef<Player> {
    ColumnDef::new(
        id,
        stat.abbrev(),
        6,
        Alignment::Right,
        move |p: &Player| CellValue::Text(p.season_stats.display(stat)),
        move |p: &Player| SortKey::Number(p.per_game(stat)),
    )
}

/// Name, Team, Star, PTS, REB, AST
pub fn player_columns() -> Vec<ColumnDef<Player>> {
    vec![
        ColumnDef::new(
            "name",
            "Name",
            24,
            Alignment::Left,
            |p: &Player| CellValue::Text(p.name.clone()),
            |p: &Player| SortKey::Text(p.name.clone()),
        ),
        ColumnDef::new(
            "team",
            "Team",
            5,
            Alignment::Left,
            |p: &Player| CellValue::Text(p.team_display().to_string()),
            |p: &Player| SortKey::Text(p.team_display().to_string()),
        ),
        ColumnDef::new(
            "stars",
            "Star",
            7,
            Alignment::Left,
            |p: &Player| CellValue::Stars(p.star_value),
            |p: &Player| SortKey::Number(p.star_value.unwrap_or(0.0)),
        ),
        stat_column("pts", Stat::Points),
        stat_column("reb", Stat::Rebounds),
        stat_column("ast", Stat::Assists),
    ]
}

/// Grid over the roster columns with the given sort applied
pub fn player_grid(sort: Option<SortState>) -> SortableGrid<Player> {
    SortableGrid::new(player_columns()).with_sort(sort)
}

/// Rows to display: filtered by `term`, then ordered by the grid's sort
pub fn visible_players<'a>(
    players: &'a [Player],
    term: &str,
    grid: &SortableGrid<Player>,
) -> Vec<&'a Player> {
    grid.arrange(filter_players(players, term))
}

/// Message to show instead of rows, if any
///
/// `loaded` is the unfiltered roster and `visible` the count after filtering.
pub fn empty_message(
    selection: &TeamSelection,
    loaded: usize,
    visible: usize,
    term: &str,
) -> Option<String> {
    match selection {
        TeamSelection::None => Some(NO_SELECTION_MESSAGE.to_string()),
        TeamSelection::All if loaded == 0 => Some(EMPTY_LEAGUE_MESSAGE.to_string()),
        TeamSelection::Team(_) if loaded == 0 => Some(EMPTY_TEAM_MESSAGE.to_string()),
        _ if visible == 0 => Some(format!("No players match \"{}\".", term)),
        _ => None,
    }
}
