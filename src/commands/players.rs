use crate::config::{DisplayConfig, RosterSource};
use crate::data_provider::RosterDataProvider;
use crate::formatting::{fit_cell, format_header};
use crate::model::Player;
use crate::roster::{empty_message, player_grid, visible_players, TeamSelection};
use crate::table::SortState;
use anyhow::Result;
use tracing::error;

/// Options for the one-shot roster listing
#[derive(Debug, Clone, Default)]
pub struct PlayersQuery {
    pub team: Option<String>,
    pub search: String,
    pub sort: Option<SortState>,
}

impl PlayersQuery {
    fn selection(&self) -> TeamSelection {
        match &self.team {
            Some(abbr) => TeamSelection::Team(abbr.to_uppercase()),
            None => TeamSelection::All,
        }
    }
}

pub fn format_players(players: &[Player], query: &PlayersQuery, display: &DisplayConfig) -> String {
    let selection = query.selection();
    let title = match &selection {
        TeamSelection::Team(abbr) => format!("{} Roster", abbr),
        _ => "All Players".to_string(),
    };

    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(&title, true, display));
    output.push('\n');

    let grid = player_grid(query.sort.clone());
    let rows = visible_players(players, &query.search, &grid);
    if let Some(message) = empty_message(&selection, players.len(), rows.len(), &query.search) {
        output.push_str(&message);
        output.push('\n');
        return output;
    }

    let header: Vec<String> = grid
        .columns()
        .iter()
        .map(|c| fit_cell(&grid.header_label(c, &display.box_chars), c.width, c.align))
        .collect();
    let header = header.join(" ");
    output.push_str(header.trim_end());
    output.push('\n');

    let width: usize = grid.columns().iter().map(|c| c.width + 1).sum::<usize>() - 1;
    output.push_str(&display.box_chars.horizontal.repeat(width));
    output.push('\n');

    for player in rows {
        let line: Vec<String> = grid
            .columns()
            .iter()
            .zip(grid.cells(player))
            .map(|(c, cell)| fit_cell(&cell.display_text(&display.box_chars), c.width, c.align))
            .collect();
        output.push_str(line.join(" ").trim_end());
        output.push('\n');
    }
    output
}

/// Fetch and format the roster; a failed fetch shows the empty-roster message
pub async fn report(
    client: &dyn RosterDataProvider,
    source: RosterSource,
    query: &PlayersQuery,
    display: &DisplayConfig,
) -> String {
    let result = match &query.team {
        Some(abbr) => client.team_players(&abbr.to_uppercase(), source).await,
        None => client.all_players().await,
    };
    let players = match result {
        Ok(players) => players,
        Err(e) => {
            error!("Failed to fetch players: {}", e);
            Vec::new()
        }
    };
    format_players(&players, query, display)
}

pub async fn run(
    client: &dyn RosterDataProvider,
    source: RosterSource,
    query: PlayersQuery,
    display: &DisplayConfig,
) -> Result<()> {
    print!("{}", report(client, source, &query, display).await);
    println!();
    Ok(())
}
