use tracing::debug;

use super::action::Action;
use super::effects::Effect;
use super::state::AppState;

use crate::tui::reducers::{
    reduce_data_loading, reduce_navigation, reduce_roster, reduce_transactions,
};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// This function is PURE - no I/O, no async.
/// All side effects are returned as `Effect` to be executed separately.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // Navigation actions
    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Data loading actions
    let state = match reduce_data_loading(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Tab-specific action delegation
    match action {
        Action::RosterAction(roster_action) => reduce_roster(state, roster_action),
        Action::TransactionsAction(transactions_action) => {
            reduce_transactions(state, transactions_action)
        }

        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        Action::Quit => (state, Effect::None),

        other => {
            debug!("REDUCER: unhandled action {:?}", other);
            (state, Effect::None)
        }
    }
}
