/// Free-text roster search
use crate::model::Player;

/// Narrow `players` to those whose name or team abbreviation contains `term`
///
/// Matching is case-insensitive. An empty term keeps every player. Relative
/// order is preserved and the source slice is left untouched.
pub fn filter_players<'a>(players: &'a [Player], term: &str) -> Vec<&'a Player> {
    if term.is_empty() {
        return players.iter().collect();
    }

    let needle = term.to_lowercase();
    players
        .iter()
        .filter(|player| matches_term(player, &needle))
        .collect()
}

/// `needle` must already be lowercase
fn matches_term(player: &Player, needle: &str) -> bool {
    if player.name.to_lowercase().contains(needle) {
        return true;
    }
    player
        .team_abbreviation
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
        .contains(needle)
}
