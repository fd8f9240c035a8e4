/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// It contains all the keyboard navigation logic for the TUI.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use super::action::{Action, RosterAction, TransactionsAction};
use super::state::AppState;
use super::types::Tab;

/// Keys typed into the roster search box
fn handle_search_input(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Esc | KeyCode::Enter => RosterAction::StopSearch,
        KeyCode::Backspace => RosterAction::SearchBackspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            RosterAction::SearchInput(c)
        }
        _ => return None,
    };
    Some(Action::RosterAction(action))
}

/// Handle global keys that work regardless of tab or focus state
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::RefreshData),
        _ => None,
    }
}

/// Handle direct tab switching via number keys (1-2)
fn handle_number_keys(key_code: KeyCode) -> Option<Action> {
    Tab::all()
        .into_iter()
        .find(|tab| key_code == KeyCode::Char(tab.number()))
        .map(Action::NavigateTab)
}

/// Handle navigation when tab bar is focused (Left/Right/Down)
fn handle_tab_bar_navigation(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left => Some(Action::NavigateTabLeft),
        KeyCode::Right => Some(Action::NavigateTabRight),
        KeyCode::Down => {
            debug!("KEY: Down pressed on tab bar - entering content focus");
            Some(Action::EnterContentFocus)
        }
        _ => None,
    }
}

/// Handle Rosters tab keys
///
/// Letter bindings work from the tab bar too; arrows only once content is focused.
fn handle_rosters_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    let content_focused = state.navigation.content_focused;
    let action = match key_code {
        KeyCode::Char('t') => RosterAction::SelectNextTeam,
        KeyCode::Char('T') => RosterAction::SelectPrevTeam,
        KeyCode::Char('/') => RosterAction::StartSearch,
        KeyCode::Char('s') => RosterAction::FocusNextColumn,
        KeyCode::Char('S') => RosterAction::FocusPrevColumn,
        KeyCode::Char('o') => RosterAction::ApplySort,
        KeyCode::Enter if content_focused => RosterAction::ApplySort,
        KeyCode::Right if content_focused => RosterAction::FocusNextColumn,
        KeyCode::Left if content_focused => RosterAction::FocusPrevColumn,
        KeyCode::Down if content_focused => RosterAction::ScrollDown,
        KeyCode::Up if content_focused => {
            if state.ui.roster.scroll_offset == 0 {
                return Some(Action::ExitContentFocus);
            }
            RosterAction::ScrollUp
        }
        _ => return None,
    };
    Some(Action::RosterAction(action))
}

/// Handle Transactions tab keys
fn handle_transactions_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    let content_focused = state.navigation.content_focused;
    let action = match key_code {
        KeyCode::Home | KeyCode::Char('g') => TransactionsAction::FirstPage,
        KeyCode::End | KeyCode::Char('G') => TransactionsAction::LastPage,
        KeyCode::Char('p') => TransactionsAction::PrevPage,
        KeyCode::Char('n') => TransactionsAction::NextPage,
        KeyCode::Left if content_focused => TransactionsAction::PrevPage,
        KeyCode::Right if content_focused => TransactionsAction::NextPage,
        KeyCode::Up if content_focused => return Some(Action::ExitContentFocus),
        _ => return None,
    };
    Some(Action::TransactionsAction(action))
}

/// Convert a key event into an action
///
/// Priority: search box input, global keys, number keys, ESC, tab-specific
/// bindings, then tab bar navigation.
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?}", key);
    let current_tab = state.navigation.current_tab;

    if current_tab == Tab::Rosters && state.ui.roster.search_editing {
        return handle_search_input(key);
    }

    if let Some(action) = handle_global_keys(key.code) {
        return Some(action);
    }

    if let Some(action) = handle_number_keys(key.code) {
        return Some(action);
    }

    if key.code == KeyCode::Esc {
        if state.navigation.content_focused {
            debug!("KEY: ESC pressed in content - returning to tab bar");
            return Some(Action::ExitContentFocus);
        }
        debug!("KEY: ESC pressed at tab bar - ignoring (use 'q' to quit)");
        return None;
    }

    let tab_action = match current_tab {
        Tab::Rosters => handle_rosters_keys(key.code, state),
        Tab::Transactions => handle_transactions_keys(key.code, state),
    };
    if tab_action.is_some() {
        return tab_action;
    }

    if !state.navigation.content_focused {
        return handle_tab_bar_navigation(key.code);
    }

    None
}
