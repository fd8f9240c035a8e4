use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::state::{AppState, LoadingKey};
use super::types::Tab;
use super::widgets::{RenderableWidget, RosterTable, StatusBar, TabBar, TransactionsTable};

/// Render the whole screen from state
///
/// Layout: tab bar (2 lines), tab content, status bar (2 lines).
pub fn render(state: &AppState, area: Rect, buf: &mut Buffer) {
    let config = &state.system.config.display;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let focused = state.navigation.content_focused;
    TabBar::new(state.navigation.current_tab, !focused).render(chunks[0], buf, config);

    match state.navigation.current_tab {
        Tab::Rosters => roster_table(state).render(chunks[1], buf, config),
        Tab::Transactions => transactions_table(state).render(chunks[1], buf, config),
    }

    let loading = !state.data.loading.is_empty();
    StatusBar::new(
        state.system.status_message.clone(),
        state.system.status_is_error,
    )
    .with_loading(loading)
    .with_last_refresh(state.system.last_refresh)
    .render(chunks[2], buf, config);
}

fn roster_table(state: &AppState) -> RosterTable<'_> {
    let roster = &state.ui.roster;
    RosterTable {
        teams: &state.data.teams,
        players: &state.data.players,
        selection: &roster.selection,
        search: &roster.search,
        search_editing: roster.search_editing,
        sort: roster.sort.as_ref(),
        focused_column: state
            .navigation
            .content_focused
            .then_some(roster.focused_column),
        scroll_offset: roster.scroll_offset,
        loading: state.data.is_loading(LoadingKey::Players),
    }
}

fn transactions_table(state: &AppState) -> TransactionsTable<'_> {
    TransactionsTable {
        transactions: state.data.transactions(),
        paginator: &state.ui.transactions.paginator,
        error: state
            .data
            .errors
            .get(&LoadingKey::Transactions)
            .map(String::as_str),
        loading: state.data.is_loading(LoadingKey::Transactions),
    }
}
