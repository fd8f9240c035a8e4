/// Trait for providing roster data, abstracting over the HTTP client and mock implementations
use async_trait::async_trait;

use crate::api::{ApiError, Client};
use crate::config::RosterSource;
use crate::model::{Player, Team, Transaction};

/// Trait for roster data providers, implemented by both the real Client and MockClient
#[async_trait]
pub trait RosterDataProvider: Send + Sync {
    /// Get every team for the selector
    async fn teams(&self) -> Result<Vec<Team>, ApiError>;

    /// Get the league-wide player list
    async fn all_players(&self) -> Result<Vec<Player>, ApiError>;

    /// Get one team's roster from the configured endpoint
    async fn team_players(
        &self,
        abbreviation: &str,
        source: RosterSource,
    ) -> Result<Vec<Player>, ApiError>;

    /// Get recent player movement
    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError>;
}

/// Implement the trait for the real api::Client
#[async_trait]
impl RosterDataProvider for Client {
    async fn teams(&self) -> Result<Vec<Team>, ApiError> {
        self.teams().await
    }

    async fn all_players(&self) -> Result<Vec<Player>, ApiError> {
        self.all_players().await
    }

    async fn team_players(
        &self,
        abbreviation: &str,
        source: RosterSource,
    ) -> Result<Vec<Player>, ApiError> {
        self.team_players(abbreviation, source).await
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.transactions().await
    }
}
