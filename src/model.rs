/// Canonical data model shared by the CLI and the TUI
///
/// Everything coming off the wire is mapped into these types by `api::wire`
/// before it reaches filtering, sorting or pagination.

/// A team as listed by the teams endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub full_name: String,
    pub abbreviation: String,
}

impl Team {
    /// Label used in team selectors, e.g. "Los Angeles Lakers (LAL)"
    pub fn selector_label(&self) -> String {
        format!("{} ({})", self.full_name, self.abbreviation)
    }
}

/// One counting stat as it arrived from upstream
///
/// Some endpoints send per-game averages, others season totals. Both are kept
/// and the stats normalizer decides which one to display.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatLine {
    pub per_game: Option<f64>,
    pub total: Option<f64>,
}

impl StatLine {
    pub fn per_game(value: f64) -> Self {
        Self {
            per_game: Some(value),
            total: None,
        }
    }

    pub fn total(value: f64) -> Self {
        Self {
            per_game: None,
            total: Some(value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeasonStats {
    pub points: StatLine,
    pub rebounds: StatLine,
    pub assists: StatLine,
    pub games_played: Option<f64>,
}

/// A rostered player
///
/// There is no stable player id across upstream shapes; identity is name + team.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub team_abbreviation: Option<String>,
    pub star_value: Option<f64>,
    pub season_stats: SeasonStats,
}

impl Player {
    /// Team abbreviation as displayed in the grid
    pub fn team_display(&self) -> &str {
        match self.team_abbreviation.as_deref() {
            Some(abbrev) if !abbrev.is_empty() => abbrev,
            _ => "N/A",
        }
    }
}

/// A league transaction (signing, trade, waiver...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Upstream timestamp, kept verbatim
    pub date: String,
    pub player_slug: String,
    pub team_slug: String,
    pub transaction_type: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_selector_label() {
        let team = Team {
            id: "1610612747".to_string(),
            full_name: "Los Angeles Lakers".to_string(),
            abbreviation: "LAL".to_string(),
        };
        assert_eq!(team.selector_label(), "Los Angeles Lakers (LAL)");
    }

    #[test]
    fn test_team_display_falls_back_to_na() {
        let mut player = Player {
            name: "Test Player".to_string(),
            team_abbreviation: None,
            star_value: None,
            season_stats: SeasonStats::default(),
        };
        assert_eq!(player.team_display(), "N/A");

        player.team_abbreviation = Some(String::new());
        assert_eq!(player.team_display(), "N/A");

        player.team_abbreviation = Some("BOS".to_string());
        assert_eq!(player.team_display(), "BOS");
    }
}
