use tracing::{debug, trace};

use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::{AppState, LoadingKey};
use crate::tui::types::Tab;

const ROSTER_HINTS: &str =
    "t/T: team  /: search  s/S or ←→: column  Enter/o: sort  ↑↓: scroll  Esc: back";
const TRANSACTIONS_HINTS: &str = "Home/g: first  ←/p: prev  →/n: next  End/G: last  Esc: back";

/// Handle all navigation-related actions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::NavigateTab(tab) => Ok(navigate_to_tab(state, *tab)),
        Action::NavigateTabLeft => {
            let tab = state.navigation.current_tab.prev();
            Ok(navigate_to_tab(state, tab))
        }
        Action::NavigateTabRight => {
            let tab = state.navigation.current_tab.next();
            Ok(navigate_to_tab(state, tab))
        }
        Action::EnterContentFocus => Ok(enter_content_focus(state)),
        Action::ExitContentFocus => Ok(exit_content_focus(state)),
        _ => Err(state),
    }
}

fn navigate_to_tab(state: AppState, tab: Tab) -> (AppState, Effect) {
    trace!("Navigating to tab: {:?}", tab);
    let mut new_state = state;
    new_state.navigation.current_tab = tab;
    new_state.navigation.content_focused = false; // Return focus to tab bar
    new_state.ui.roster.search_editing = false;
    new_state.system.reset_status_message();

    // Transactions load on first visit
    let effect = if tab == Tab::Transactions
        && new_state.data.transactions.is_none()
        && !new_state.data.is_loading(LoadingKey::Transactions)
    {
        debug!("NAV: first visit to Transactions - fetching");
        new_state.data.loading.insert(LoadingKey::Transactions);
        Effect::FetchTransactions
    } else {
        Effect::None
    };

    (new_state, effect)
}

fn enter_content_focus(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Entering content focus (Down key from tab bar)");
    let mut new_state = state;
    new_state.navigation.content_focused = true;

    let hints = match new_state.navigation.current_tab {
        Tab::Rosters => ROSTER_HINTS,
        Tab::Transactions => TRANSACTIONS_HINTS,
    };
    new_state.system.set_status_message(hints.to_string());

    (new_state, Effect::None)
}

fn exit_content_focus(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Exiting content focus (Up key to tab bar)");
    let mut new_state = state;
    new_state.navigation.content_focused = false;
    new_state.ui.roster.search_editing = false;
    new_state.system.reset_status_message();
    (new_state, Effect::None)
}
