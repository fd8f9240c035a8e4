use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, warn};

use crate::model::{Player, Team, Transaction};
use crate::roster::TeamSelection;
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::{AppState, LoadingKey};
use crate::tui::types::Tab;

/// Handle all data loading actions (API responses)
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(
    state: AppState,
    action: &Action,
) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::TeamsLoaded(result) => Ok(handle_teams_loaded(state, result.clone())),
        Action::PlayersLoaded { generation, result } => {
            Ok(handle_players_loaded(state, *generation, result.clone()))
        }
        Action::TransactionsLoaded(result) => {
            Ok(handle_transactions_loaded(state, result.clone()))
        }
        Action::RefreshData => Ok(handle_refresh_data(state)),
        _ => Err(state),
    }
}

/// Start a roster fetch for `selection`
///
/// Bumps the generation so any response still in flight is discarded on arrival.
pub fn begin_roster_fetch(state: AppState, selection: TeamSelection) -> (AppState, Effect) {
    let mut new_state = state;
    let roster = &mut new_state.ui.roster;
    roster.selection = selection.clone();
    roster.generation += 1;
    roster.scroll_offset = 0;
    let generation = roster.generation;

    new_state.data.players = Arc::new(Vec::new());
    new_state.data.errors.remove(&LoadingKey::Players);

    if selection.is_none() {
        new_state.data.loading.remove(&LoadingKey::Players);
        return (new_state, Effect::None);
    }

    debug!(
        "DATA: Fetching roster for {:?} (generation {})",
        selection, generation
    );
    new_state.data.loading.insert(LoadingKey::Players);
    (
        new_state,
        Effect::FetchPlayers {
            generation,
            selection,
        },
    )
}

fn handle_refresh_data(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.system.last_refresh = Some(SystemTime::now());

    match new_state.navigation.current_tab {
        Tab::Rosters => {
            new_state.data.loading.insert(LoadingKey::Teams);
            let selection = new_state.ui.roster.selection.clone();
            if selection.is_none() {
                return (new_state, Effect::FetchTeams);
            }
            let (new_state, roster_effect) = begin_roster_fetch(new_state, selection);
            (new_state, Effect::Batch(vec![Effect::FetchTeams, roster_effect]))
        }
        Tab::Transactions => {
            new_state.data.loading.insert(LoadingKey::Transactions);
            (new_state, Effect::FetchTransactions)
        }
    }
}

fn handle_teams_loaded(state: AppState, result: Result<Vec<Team>, String>) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.data.loading.remove(&LoadingKey::Teams);

    match result {
        Ok(teams) => {
            debug!("DATA: Loaded {} teams", teams.len());
            new_state.data.teams = Arc::new(teams);
            new_state.data.errors.remove(&LoadingKey::Teams);
        }
        Err(e) => {
            debug!("DATA: Failed to load teams: {}", e);
            new_state.data.teams = Arc::new(Vec::new());
            new_state
                .system
                .set_status_error_message(format!("Failed to load teams: {}", e));
            new_state.data.errors.insert(LoadingKey::Teams, e);
        }
    }

    (new_state, Effect::None)
}

fn handle_players_loaded(
    state: AppState,
    generation: u64,
    result: Result<Vec<Player>, String>,
) -> (AppState, Effect) {
    if generation != state.ui.roster.generation {
        debug!(
            "DATA: Dropping stale roster response (generation {}, current {})",
            generation, state.ui.roster.generation
        );
        return (state, Effect::None);
    }

    let mut new_state = state;
    new_state.data.loading.remove(&LoadingKey::Players);

    match result {
        Ok(players) => {
            debug!("DATA: Loaded {} players", players.len());
            new_state.data.players = Arc::new(players);
            new_state.data.errors.remove(&LoadingKey::Players);
        }
        Err(e) => {
            warn!("DATA: Failed to load players: {}", e);
            new_state.data.players = Arc::new(Vec::new());
            new_state
                .system
                .set_status_error_message(format!("Failed to load players: {}", e));
            new_state.data.errors.insert(LoadingKey::Players, e);
        }
    }

    (new_state, Effect::None)
}

fn handle_transactions_loaded(
    state: AppState,
    result: Result<Vec<Transaction>, String>,
) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.data.loading.remove(&LoadingKey::Transactions);

    match result {
        Ok(transactions) => {
            debug!("DATA: Loaded {} transactions", transactions.len());
            new_state.data.transactions = Arc::new(Some(transactions));
            new_state.data.errors.remove(&LoadingKey::Transactions);
        }
        Err(e) => {
            debug!("DATA: Failed to load transactions: {}", e);
            new_state.data.transactions = Arc::new(Some(Vec::new()));
            new_state.data.errors.insert(LoadingKey::Transactions, e);
        }
    }

    // Keep the current page inside the new bounds
    let count = new_state.data.transactions().len();
    new_state.ui.transactions.paginator.clamp(count);

    (new_state, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_roster, create_mock_teams, create_mock_transactions};
    use crate::pagination::Paginator;

    fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
        reduce_data_loading(state, &action).unwrap_or_else(|_| panic!("unhandled"))
    }

    #[test]
    fn test_teams_loaded() {
        let mut state = AppState::default();
        state.data.loading.insert(LoadingKey::Teams);

        let (state, _) = reduce(state, Action::TeamsLoaded(Ok(create_mock_teams())));

        assert_eq!(state.data.teams.len(), 5);
        assert!(!state.data.is_loading(LoadingKey::Teams));
    }

    #[test]
    fn test_teams_failure_leaves_empty_list() {
        let mut state = AppState::default();
        state.data.teams = Arc::new(create_mock_teams());
        state.data.loading.insert(LoadingKey::Teams);

        let (state, _) = reduce(
            state,
            Action::TeamsLoaded(Err("HTTP 500: boom".to_string())),
        );

        assert!(state.data.teams.is_empty());
        assert!(!state.data.is_loading(LoadingKey::Teams));
        assert!(state.system.status_is_error);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Failed to load teams: HTTP 500: boom")
        );
    }

    #[test]
    fn test_roster_fetch_sets_loading_and_generation() {
        let (state, effect) =
            begin_roster_fetch(AppState::default(), TeamSelection::Team("LAL".to_string()));

        assert!(state.data.is_loading(LoadingKey::Players));
        assert_eq!(state.ui.roster.generation, 1);
        match effect {
            Effect::FetchPlayers {
                generation,
                selection,
            } => {
                assert_eq!(generation, 1);
                assert_eq!(selection, TeamSelection::Team("LAL".to_string()));
            }
            other => panic!("Expected FetchPlayers, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_roster_response_is_dropped() {
        let (state, _) =
            begin_roster_fetch(AppState::default(), TeamSelection::Team("LAL".to_string()));
        let (state, _) = begin_roster_fetch(state, TeamSelection::Team("BOS".to_string()));

        // LAL answers after BOS was requested
        let (state, _) = reduce(
            state,
            Action::PlayersLoaded {
                generation: 1,
                result: Ok(create_mock_roster("LAL")),
            },
        );
        assert!(state.data.players.is_empty());
        assert!(state.data.is_loading(LoadingKey::Players));

        let (state, _) = reduce(
            state,
            Action::PlayersLoaded {
                generation: 2,
                result: Ok(create_mock_roster("BOS")),
            },
        );
        assert_eq!(state.data.players.len(), 3);
        assert_eq!(state.data.players[0].team_abbreviation.as_deref(), Some("BOS"));
        assert!(!state.data.is_loading(LoadingKey::Players));
    }

    #[test]
    fn test_roster_failure_resolves_to_empty() {
        let (state, _) =
            begin_roster_fetch(AppState::default(), TeamSelection::Team("LAL".to_string()));
        let (state, _) = reduce(
            state,
            Action::PlayersLoaded {
                generation: 1,
                result: Err("Network error: connection refused".to_string()),
            },
        );
        assert!(state.data.players.is_empty());
        assert!(!state.data.is_loading(LoadingKey::Players));
        assert!(state.data.errors.contains_key(&LoadingKey::Players));
    }

    #[test]
    fn test_refresh_on_rosters_without_selection_fetches_teams_only() {
        let (state, effect) = reduce(AppState::default(), Action::RefreshData);
        assert!(matches!(effect, Effect::FetchTeams));
        assert!(state.data.is_loading(LoadingKey::Teams));
        assert!(state.system.last_refresh.is_some());
    }

    #[test]
    fn test_refresh_on_rosters_with_selection_refetches_roster() {
        let mut state = AppState::default();
        state.ui.roster.selection = TeamSelection::All;
        let (state, effect) = reduce(state, Action::RefreshData);
        match effect {
            Effect::Batch(effects) => {
                assert_eq!(effects.len(), 2);
                assert!(matches!(effects[0], Effect::FetchTeams));
                assert!(matches!(
                    effects[1],
                    Effect::FetchPlayers { generation: 1, .. }
                ));
            }
            other => panic!("Expected batch, got {:?}", other),
        }
        assert!(state.data.is_loading(LoadingKey::Players));
    }

    #[test]
    fn test_refresh_on_transactions_tab() {
        let mut state = AppState::default();
        state.navigation.current_tab = Tab::Transactions;
        let (state, effect) = reduce(state, Action::RefreshData);
        assert!(matches!(effect, Effect::FetchTransactions));
        assert!(state.data.is_loading(LoadingKey::Transactions));
    }

    #[test]
    fn test_transactions_reload_clamps_page() {
        let mut state = AppState::default();
        state.ui.transactions.paginator = Paginator::at_page(8, 3);

        let (state, _) = reduce(
            state,
            Action::TransactionsLoaded(Ok(create_mock_transactions(10))),
        );
        assert_eq!(state.ui.transactions.paginator.current_page(), 2);
        assert!(state.data.errors.get(&LoadingKey::Transactions).is_none());
    }

    #[test]
    fn test_transactions_failure_keeps_message() {
        let mut state = AppState::default();
        state.data.loading.insert(LoadingKey::Transactions);

        let (state, _) = reduce(
            state,
            Action::TransactionsLoaded(Err("No rows found in response".to_string())),
        );

        assert!(state.data.transactions().is_empty());
        assert!(!state.data.is_loading(LoadingKey::Transactions));
        assert_eq!(
            state.data.errors.get(&LoadingKey::Transactions).map(String::as_str),
            Some("No rows found in response")
        );
        assert_eq!(state.ui.transactions.paginator.current_page(), 1);
    }
}
