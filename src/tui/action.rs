use crate::model::{Player, Team, Transaction};
use crate::roster::TeamSelection;

use super::types::Tab;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async data loading)
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation actions
    NavigateTab(Tab),
    NavigateTabLeft,
    NavigateTabRight,
    EnterContentFocus, // Down key: move focus from tab bar to content
    ExitContentFocus,  // Up/ESC: move focus from content back to tab bar

    // Data actions
    RefreshData,

    // Data loaded (from effects)
    TeamsLoaded(Result<Vec<Team>, String>),
    /// Roster response tagged with the generation of the request that produced it
    PlayersLoaded {
        generation: u64,
        result: Result<Vec<Player>, String>,
    },
    TransactionsLoaded(Result<Vec<Transaction>, String>),

    // Tab-specific actions
    RosterAction(RosterAction),
    TransactionsAction(TransactionsAction),

    // System actions
    Quit,
    SetStatusMessage { message: String, is_error: bool },
}

/// Tab-specific actions for Rosters
#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction {
    SelectNextTeam,
    SelectPrevTeam,
    SelectTeam(TeamSelection),
    StartSearch,
    StopSearch,
    SearchInput(char),
    SearchBackspace,
    FocusNextColumn,
    FocusPrevColumn,
    /// Sort by the focused column header (toggles direction when already sorted by it)
    ApplySort,
    ScrollDown,
    ScrollUp,
}

/// Tab-specific actions for Transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionsAction {
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
}
