/// RosterTable widget - team selector, search box and the sortable player grid
use crate::config::DisplayConfig;
use crate::formatting::fit_cell;
use crate::model::{Player, Team};
use crate::roster::{
    empty_message, player_grid, visible_players, TeamSelection, ALL_PLAYERS_LABEL,
    LOADING_MESSAGE, TEAM_PLACEHOLDER,
};
use crate::table::{CellValue, SortState};
use crate::tui::widgets::RenderableWidget;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

/// Lines above the grid: selector, search, blank
const PREAMBLE_HEIGHT: u16 = 3;

#[derive(Debug)]
pub struct RosterTable<'a> {
    pub teams: &'a [Team],
    pub players: &'a [Player],
    pub selection: &'a TeamSelection,
    pub search: &'a str,
    pub search_editing: bool,
    pub sort: Option<&'a SortState>,
    /// Highlighted header, only while the content has focus
    pub focused_column: Option<usize>,
    pub scroll_offset: usize,
    pub loading: bool,
}

impl<'a> RosterTable<'a> {
    fn selection_label(&self) -> String {
        match self.selection {
            TeamSelection::None => TEAM_PLACEHOLDER.to_string(),
            TeamSelection::All => ALL_PLAYERS_LABEL.to_string(),
            TeamSelection::Team(abbr) => self
                .teams
                .iter()
                .find(|t| &t.abbreviation == abbr)
                .map(Team::selector_label)
                .unwrap_or_else(|| abbr.clone()),
        }
    }

    fn render_preamble(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let width = area.width as usize;
        let label = "Team: ";
        buf.set_stringn(area.x, area.y, label, width, Style::default());
        buf.set_stringn(
            area.x + label.len() as u16,
            area.y,
            self.selection_label(),
            width.saturating_sub(label.len()),
            Style::default().fg(config.selection_fg),
        );

        if area.height < 2 {
            return;
        }
        let y = area.y + 1;
        let label = "Search: ";
        buf.set_stringn(area.x, y, label, width, Style::default());
        let x = area.x + label.len() as u16;
        let room = width.saturating_sub(label.len());
        if self.search_editing {
            let text = format!("{}_", self.search);
            buf.set_stringn(x, y, text, room, Style::default().add_modifier(Modifier::BOLD));
        } else if self.search.is_empty() {
            buf.set_stringn(x, y, "(press / to filter)", room, Style::default().fg(Color::DarkGray));
        } else {
            buf.set_stringn(x, y, self.search, room, Style::default());
        }
    }
}

impl RenderableWidget for RosterTable<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.render_preamble(area, buf, config);
        if area.height <= PREAMBLE_HEIGHT {
            return;
        }

        let width = area.width as usize;
        let mut y = area.y + PREAMBLE_HEIGHT;
        let bottom = area.y + area.height;

        if self.loading {
            buf.set_stringn(area.x, y, LOADING_MESSAGE, width, Style::default());
            return;
        }

        let grid = player_grid(self.sort.cloned());
        let rows = visible_players(self.players, self.search, &grid);
        if let Some(message) =
            empty_message(self.selection, self.players.len(), rows.len(), self.search)
        {
            buf.set_stringn(area.x, y, message, width, Style::default());
            return;
        }

        // Header
        let mut x = area.x;
        for (i, column) in grid.columns().iter().enumerate() {
            if x >= area.x + area.width {
                break;
            }
            let text = fit_cell(&grid.header_label(column, &config.box_chars), column.width, column.align);
            let style = if self.focused_column == Some(i) {
                Style::default()
                    .fg(config.selection_fg)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let room = (area.x + area.width - x) as usize;
            buf.set_stringn(x, y, &text, room, style);
            x += column.width as u16 + 1;
        }
        y += 1;
        if y >= bottom {
            return;
        }

        let grid_width: usize = grid.columns().iter().map(|c| c.width + 1).sum::<usize>() - 1;
        let separator = config.box_chars.horizontal.repeat(grid_width.min(width));
        buf.set_string(area.x, y, separator, Style::default());
        y += 1;

        // Rows
        for player in rows.iter().skip(self.scroll_offset) {
            if y >= bottom {
                break;
            }
            let mut x = area.x;
            for (column, cell) in grid.columns().iter().zip(grid.cells(player)) {
                if x >= area.x + area.width {
                    break;
                }
                let style = match cell {
                    CellValue::Stars(_) => Style::default().fg(config.star_fg),
                    CellValue::Text(_) => Style::default(),
                };
                let text = fit_cell(&cell.display_text(&config.box_chars), column.width, column.align);
                let room = (area.x + area.width - x) as usize;
                buf.set_stringn(x, y, &text, room, style);
                x += text.width() as u16 + 1;
            }
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_roster, create_mock_teams};
    use crate::tui::widgets::testing::*;

    fn lakers_table<'a>(
        teams: &'a [Team],
        players: &'a [Player],
        selection: &'a TeamSelection,
    ) -> RosterTable<'a> {
        RosterTable {
            teams,
            players,
            selection,
            search: "",
            search_editing: false,
            sort: None,
            focused_column: None,
            scroll_offset: 0,
            loading: false,
        }
    }

    #[test]
    fn test_roster_renders_grid_sorted_by_points() {
        let teams = create_mock_teams();
        let players = create_mock_roster("LAL");
        let selection = TeamSelection::Team("LAL".to_string());
        let sort = SortState {
            column_id: "pts".to_string(),
            descending: true,
        };
        let widget = RosterTable {
            sort: Some(&sort),
            ..lakers_table(&teams, &players, &selection)
        };
        let buf = render_widget_with_config(&widget, 60, 8, &test_config_ascii());

        assert_buffer(
            &buf,
            &[
                "Team: Los Angeles Lakers (LAL)",
                "Search: (press / to filter)",
                "",
                "Name                     Team  Star     PTS v    REB    AST",
                "-----------------------------------------------------------",
                "LeBron James             LAL   *****     25.7    7.3    8.3",
                "Anthony Davis            LAL   ****.     24.7   12.6    3.5",
                "Austin Reaves            LAL   ***..     15.9    4.3    5.5",
            ],
        );
    }

    #[test]
    fn test_stars_use_star_color_and_focus_highlights_header() {
        let teams = create_mock_teams();
        let players = create_mock_roster("LAL");
        let selection = TeamSelection::Team("LAL".to_string());
        let widget = RosterTable {
            focused_column: Some(0),
            ..lakers_table(&teams, &players, &selection)
        };
        let buf = render_widget(&widget, 60, 8);
        let config = test_config();

        assert_eq!(buffer_line(&buf, 5).chars().skip(31).take(5).collect::<String>(), "★★★★★");
        assert_eq!(buf[(31, 5)].fg, config.star_fg);
        assert_eq!(buf[(0, 3)].fg, config.selection_fg);
        assert_ne!(buf[(25, 3)].fg, config.selection_fg);
    }

    #[test]
    fn test_search_filters_and_shows_no_match_message() {
        let teams = create_mock_teams();
        let players = create_mock_roster("LAL");
        let selection = TeamSelection::Team("LAL".to_string());

        let widget = RosterTable {
            search: "reav",
            ..lakers_table(&teams, &players, &selection)
        };
        let buf = render_widget(&widget, 60, 7);
        assert_eq!(buffer_line(&buf, 1).trim_end(), "Search: reav");
        assert!(buffer_line(&buf, 5).starts_with("Austin Reaves"));
        assert_eq!(buffer_line(&buf, 6).trim(), "");

        let widget = RosterTable {
            search: "zz",
            search_editing: true,
            ..lakers_table(&teams, &players, &selection)
        };
        let buf = render_widget(&widget, 60, 5);
        assert_eq!(buffer_line(&buf, 1).trim_end(), "Search: zz_");
        assert_eq!(buffer_line(&buf, 3).trim_end(), "No players match \"zz\".");
    }

    #[test]
    fn test_placeholder_and_loading_messages() {
        let teams = create_mock_teams();
        let selection = TeamSelection::None;
        let buf = render_widget(&lakers_table(&teams, &[], &selection), 60, 5);
        assert_buffer(
            &buf,
            &[
                "Team: -- Select a Team --",
                "Search: (press / to filter)",
                "",
                "No players found. Please select a team.",
                "",
            ],
        );

        let selection = TeamSelection::Team("LAL".to_string());
        let widget = RosterTable {
            loading: true,
            ..lakers_table(&teams, &[], &selection)
        };
        let buf = render_widget(&widget, 60, 5);
        assert_eq!(buffer_line(&buf, 3).trim_end(), "Loading NBA players...");
    }

    #[test]
    fn test_empty_team_message() {
        let teams = create_mock_teams();
        let selection = TeamSelection::Team("BOS".to_string());
        let buf = render_widget(&lakers_table(&teams, &[], &selection), 60, 5);
        assert_eq!(buffer_line(&buf, 0).trim_end(), "Team: Boston Celtics (BOS)");
        assert_eq!(buffer_line(&buf, 3).trim_end(), "No players found for this team.");
    }

    #[test]
    fn test_scroll_offset_skips_rows() {
        let teams = create_mock_teams();
        let players = create_mock_roster("LAL");
        let selection = TeamSelection::Team("LAL".to_string());
        let widget = RosterTable {
            scroll_offset: 2,
            ..lakers_table(&teams, &players, &selection)
        };
        let buf = render_widget(&widget, 60, 8);
        assert!(buffer_line(&buf, 5).starts_with("Austin Reaves"));
        assert_eq!(buffer_line(&buf, 6).trim(), "");
    }
}
