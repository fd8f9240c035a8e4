use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::SystemTime;

use crate::config::Config;
use crate::model::{Player, Team, Transaction};
use crate::pagination::Paginator;
use crate::roster::TeamSelection;
use crate::table::SortState;

use super::types::Tab;

/// Root application state - single source of truth
///
/// This is the entire application state in one place.
/// All state changes happen through the reducer.
/// Widgets receive slices of this state as props.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Navigation state (which tab, where focus is)
    pub navigation: NavigationState,

    /// Application data (from API)
    pub data: DataState,

    /// UI state per tab
    pub ui: UiState,

    /// System state
    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub current_tab: Tab,
    /// Whether focus is on content (true) or tab bar (false)
    pub content_focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    // API data - wrapped in Arc to avoid deep clones on every reducer call
    pub teams: Arc<Vec<Team>>,
    pub players: Arc<Vec<Player>>,
    /// None until the first transactions response arrives
    pub transactions: Arc<Option<Vec<Transaction>>>,

    // Loading states
    pub loading: HashSet<LoadingKey>,

    // Errors from the most recent fetch of each kind
    pub errors: HashMap<LoadingKey, String>,
}

impl DataState {
    pub fn is_loading(&self, key: LoadingKey) -> bool {
        self.loading.contains(&key)
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.as_ref().as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadingKey {
    Teams,
    Players,
    Transactions,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub roster: RosterUiState,
    pub transactions: TransactionsUiState,
}

#[derive(Debug, Clone, Default)]
pub struct RosterUiState {
    pub selection: TeamSelection,
    /// Free-text filter over name and team abbreviation
    pub search: String,
    /// Keystrokes go to the search box instead of key bindings
    pub search_editing: bool,
    pub sort: Option<SortState>,
    /// Header the sort keys act on
    pub focused_column: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Incremented for every roster fetch; responses from older fetches are dropped
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TransactionsUiState {
    pub paginator: Paginator,
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ←→ navigate | ↓ enter | ↑/ESC back | r refresh | q quit | 1-2 jump to tab";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub last_refresh: Option<SystemTime>,
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}
