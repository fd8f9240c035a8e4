use tracing::debug;

use crate::filter::filter_players;
use crate::roster::{TeamSelection, PLAYER_COLUMN_IDS};
use crate::table::SortState;
use crate::tui::action::RosterAction;
use crate::tui::effects::Effect;
use crate::tui::state::AppState;

use super::data_loading::begin_roster_fetch;

/// Handle Rosters tab actions
pub fn reduce_roster(state: AppState, action: RosterAction) -> (AppState, Effect) {
    match action {
        RosterAction::SelectNextTeam => {
            let selection = cycle_selection(&state, true);
            begin_roster_fetch(state, selection)
        }
        RosterAction::SelectPrevTeam => {
            let selection = cycle_selection(&state, false);
            begin_roster_fetch(state, selection)
        }
        RosterAction::SelectTeam(selection) => begin_roster_fetch(state, selection),
        RosterAction::StartSearch => {
            let mut new_state = state;
            new_state.ui.roster.search_editing = true;
            new_state
                .system
                .set_status_message("Type to filter by name or team  Enter/Esc: done".to_string());
            (new_state, Effect::None)
        }
        RosterAction::StopSearch => {
            let mut new_state = state;
            new_state.ui.roster.search_editing = false;
            new_state.system.reset_status_message();
            (new_state, Effect::None)
        }
        RosterAction::SearchInput(c) => {
            let mut new_state = state;
            new_state.ui.roster.search.push(c);
            new_state.ui.roster.scroll_offset = 0;
            (new_state, Effect::None)
        }
        RosterAction::SearchBackspace => {
            let mut new_state = state;
            new_state.ui.roster.search.pop();
            new_state.ui.roster.scroll_offset = 0;
            (new_state, Effect::None)
        }
        RosterAction::FocusNextColumn => {
            let mut new_state = state;
            let roster = &mut new_state.ui.roster;
            roster.focused_column = (roster.focused_column + 1) % PLAYER_COLUMN_IDS.len();
            (new_state, Effect::None)
        }
        RosterAction::FocusPrevColumn => {
            let mut new_state = state;
            let roster = &mut new_state.ui.roster;
            let count = PLAYER_COLUMN_IDS.len();
            roster.focused_column = (roster.focused_column + count - 1) % count;
            (new_state, Effect::None)
        }
        RosterAction::ApplySort => {
            let mut new_state = state;
            let roster = &mut new_state.ui.roster;
            let column_id = PLAYER_COLUMN_IDS[roster.focused_column % PLAYER_COLUMN_IDS.len()];
            let sort = SortState::toggled(roster.sort.as_ref(), column_id);
            debug!("ROSTER: sort by {} (descending: {})", sort.column_id, sort.descending);
            roster.sort = Some(sort);
            (new_state, Effect::None)
        }
        RosterAction::ScrollDown => {
            let mut new_state = state;
            let visible = filter_players(&new_state.data.players, &new_state.ui.roster.search).len();
            let max_offset = visible.saturating_sub(1);
            let roster = &mut new_state.ui.roster;
            roster.scroll_offset = (roster.scroll_offset + 1).min(max_offset);
            (new_state, Effect::None)
        }
        RosterAction::ScrollUp => {
            let mut new_state = state;
            let roster = &mut new_state.ui.roster;
            roster.scroll_offset = roster.scroll_offset.saturating_sub(1);
            (new_state, Effect::None)
        }
    }
}

/// Selector order: All players, then each team; the placeholder is never returned to
fn cycle_selection(state: &AppState, forward: bool) -> TeamSelection {
    let teams = state.data.teams.as_ref();
    let option_count = teams.len() + 1;

    let current = match &state.ui.roster.selection {
        TeamSelection::None => None,
        TeamSelection::All => Some(0),
        TeamSelection::Team(abbr) => teams
            .iter()
            .position(|t| &t.abbreviation == abbr)
            .map(|i| i + 1),
    };

    let next = match (current, forward) {
        (None, true) => 0,
        (None, false) => option_count - 1,
        (Some(i), true) => (i + 1) % option_count,
        (Some(i), false) => (i + option_count - 1) % option_count,
    };

    match next {
        0 => TeamSelection::All,
        i => TeamSelection::Team(teams[i - 1].abbreviation.clone()),
    }
}
