use tracing::trace;

use crate::tui::action::TransactionsAction;
use crate::tui::effects::Effect;
use crate::tui::state::AppState;

/// Handle Transactions tab paging
///
/// Moves past either end are no-ops.
pub fn reduce_transactions(state: AppState, action: TransactionsAction) -> (AppState, Effect) {
    let mut new_state = state;
    let count = new_state.data.transactions().len();
    let paginator = &mut new_state.ui.transactions.paginator;

    match action {
        TransactionsAction::FirstPage => paginator.first(),
        TransactionsAction::PrevPage => paginator.prev(),
        TransactionsAction::NextPage => paginator.next(count),
        TransactionsAction::LastPage => paginator.last(count),
    }
    trace!(
        "TRANSACTIONS: {:?} -> page {}",
        action,
        paginator.current_page()
    );

    (new_state, Effect::None)
}
