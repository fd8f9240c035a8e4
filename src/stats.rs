/// Per-game stat derivation
///
/// Upstream rosters carry either pre-averaged values or season totals plus a
/// games-played count. Missing or unusable input always degrades to zero so
/// the grid stays renderable.
use crate::model::{Player, SeasonStats, StatLine};

/// Counting stats shown in the roster grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Points,
    Rebounds,
    Assists,
}

impl Stat {
    pub fn all() -> [Self; 3] {
        [Self::Points, Self::Rebounds, Self::Assists]
    }

    /// Column header / upstream key
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Points => "PTS",
            Self::Rebounds => "REB",
            Self::Assists => "AST",
        }
    }
}

/// Per-game value for a single stat line
pub fn per_game(line: &StatLine, games_played: Option<f64>) -> f64 {
    if let Some(value) = line.per_game.filter(|v| v.is_finite()) {
        return value;
    }
    match (line.total, games_played) {
        (Some(total), Some(gp)) if gp > 0.0 && total.is_finite() => total / gp,
        _ => 0.0,
    }
}

/// Format a per-game value to one decimal place
pub fn format_per_game(value: f64) -> String {
    format!("{:.1}", value)
}

impl SeasonStats {
    pub fn line(&self, stat: Stat) -> &StatLine {
        match stat {
            Stat::Points => &self.points,
            Stat::Rebounds => &self.rebounds,
            Stat::Assists => &self.assists,
        }
    }

    pub fn per_game(&self, stat: Stat) -> f64 {
        per_game(self.line(stat), self.games_played)
    }

    pub fn display(&self, stat: Stat) -> String {
        format_per_game(self.per_game(stat))
    }
}

impl Player {
    pub fn per_game(&self, stat: Stat) -> f64 {
        self.season_stats.per_game(stat)
    }
}
