use crate::config::DisplayConfig;
use crate::data_provider::RosterDataProvider;
use crate::formatting::format_header;
use crate::model::Team;
use anyhow::Result;
use tracing::error;

pub fn format_teams(teams: &[Team], display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("NBA Teams", true, display));
    output.push('\n');

    if teams.is_empty() {
        output.push_str("No teams found.\n");
        return output;
    }

    output.push_str(&format!("{:<12} {:<5} Full Name\n", "ID", "Abbr"));
    output.push_str(&display.box_chars.horizontal.repeat(50));
    output.push('\n');
    for team in teams {
        output.push_str(&format!(
            "{:<12} {:<5} {}\n",
            team.id, team.abbreviation, team.full_name
        ));
    }
    output
}

/// Fetch and format the team list; a failed fetch lists no teams
pub async fn report(client: &dyn RosterDataProvider, display: &DisplayConfig) -> String {
    let teams = match client.teams().await {
        Ok(teams) => teams,
        Err(e) => {
            error!("Failed to fetch teams: {}", e);
            Vec::new()
        }
    };
    format_teams(&teams, display)
}

pub async fn run(client: &dyn RosterDataProvider, display: &DisplayConfig) -> Result<()> {
    print!("{}", report(client, display).await);
    println!();
    Ok(())
}
