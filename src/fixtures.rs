/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app with fake data for screenshots and debugging
/// 3. Benchmarks - providing consistent data for performance testing
use crate::model::{Player, SeasonStats, StatLine, Team, Transaction};

const TEAMS: &[(&str, &str, &str)] = &[
    ("1610612738", "Boston Celtics", "BOS"),
    ("1610612743", "Denver Nuggets", "DEN"),
    ("1610612744", "Golden State Warriors", "GSW"),
    ("1610612747", "Los Angeles Lakers", "LAL"),
    ("1610612749", "Milwaukee Bucks", "MIL"),
];

/// (name, team, star value, pts, reb, ast) per game
const PLAYERS: &[(&str, &str, f64, f64, f64, f64)] = &[
    ("Jayson Tatum", "BOS", 4.6, 26.9, 8.1, 4.9),
    ("Jaylen Brown", "BOS", 4.1, 23.0, 5.5, 3.6),
    ("Jrue Holiday", "BOS", 3.4, 12.5, 5.4, 4.8),
    ("Nikola Jokic", "DEN", 5.0, 26.4, 12.4, 9.0),
    ("Jamal Murray", "DEN", 3.7, 21.2, 4.1, 6.5),
    ("Stephen Curry", "GSW", 4.5, 26.4, 4.5, 5.1),
    ("Draymond Green", "GSW", 2.9, 8.6, 7.2, 6.0),
    ("LeBron James", "LAL", 4.5, 25.7, 7.3, 8.3),
    ("Anthony Davis", "LAL", 4.4, 24.7, 12.6, 3.5),
    ("Austin Reaves", "LAL", 3.0, 15.9, 4.3, 5.5),
    ("Giannis Antetokounmpo", "MIL", 4.9, 30.4, 11.5, 6.5),
    ("Damian Lillard", "MIL", 4.0, 24.3, 4.4, 7.0),
];

/// Create the team list
pub fn create_mock_teams() -> Vec<Team> {
    TEAMS
        .iter()
        .map(|&(id, full_name, abbreviation)| Team {
            id: id.to_string(),
            full_name: full_name.to_string(),
            abbreviation: abbreviation.to_string(),
        })
        .collect()
}

/// Create the league-wide player list (per-game stats, 70 games each)
pub fn create_mock_players() -> Vec<Player> {
    PLAYERS
        .iter()
        .map(|&(name, team, stars, pts, reb, ast)| Player {
            name: name.to_string(),
            team_abbreviation: Some(team.to_string()),
            star_value: Some(stars),
            season_stats: SeasonStats {
                points: StatLine::per_game(pts),
                rebounds: StatLine::per_game(reb),
                assists: StatLine::per_game(ast),
                games_played: Some(70.0),
            },
        })
        .collect()
}

/// Create one team's roster; unknown abbreviations give an empty roster
pub fn create_mock_roster(abbreviation: &str) -> Vec<Player> {
    create_mock_players()
        .into_iter()
        .filter(|p| p.team_abbreviation.as_deref() == Some(abbreviation))
        .collect()
}

/// Create `count` transactions on consecutive days of July 2024
pub fn create_mock_transactions(count: usize) -> Vec<Transaction> {
    const KINDS: [&str; 3] = ["Signing", "Trade", "Waive"];
    (0..count)
        .map(|i| {
            let (name, team, ..) = PLAYERS[i % PLAYERS.len()];
            let player_slug = name.to_lowercase().replace(' ', "-");
            let kind = KINDS[i % KINDS.len()];
            Transaction {
                date: format!("2024-07-{:02}T00:00:00", (i % 28) + 1),
                player_slug,
                team_slug: team.to_lowercase(),
                transaction_type: kind.to_string(),
                description: format!("{} {} ({}).", team, kind.to_lowercase(), name),
            }
        })
        .collect()
}

/// Create a large synthetic roster for benchmarks
pub fn create_large_roster(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| {
            let (_, team, ..) = PLAYERS[i % PLAYERS.len()];
            Player {
                name: format!("Player {:05}", (i * 7919) % count.max(1)),
                team_abbreviation: Some(team.to_string()),
                star_value: Some((i % 51) as f64 / 10.0),
                season_stats: SeasonStats {
                    points: StatLine::total((i % 2500) as f64),
                    rebounds: StatLine::total((i % 900) as f64),
                    assists: StatLine::total((i % 700) as f64),
                    games_played: Some(((i % 82) + 1) as f64),
                },
            }
        })
        .collect()
}
