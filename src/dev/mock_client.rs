/// Mock roster client for development and testing
use crate::api::ApiError;
use crate::config::RosterSource;
use crate::data_provider::RosterDataProvider;
use crate::model::{Player, Team, Transaction};
use async_trait::async_trait;
use tracing::info;

use crate::fixtures;

/// Number of transactions served by the mock (three pages)
pub const MOCK_TRANSACTION_COUNT: usize = 20;

/// Mock client that returns fixture data instead of making real API calls
#[derive(Debug, Default)]
pub struct MockClient {
    failing: bool,
}

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self { failing: false }
    }

    /// A mock whose every request fails with HTTP 500
    pub fn failing() -> Self {
        Self { failing: true }
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.failing {
            return Err(ApiError::Http {
                status: 500,
                body: "mock failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RosterDataProvider for MockClient {
    async fn teams(&self) -> Result<Vec<Team>, ApiError> {
        self.check()?;
        info!("MockClient: Returning mock teams");
        Ok(fixtures::create_mock_teams())
    }

    async fn all_players(&self) -> Result<Vec<Player>, ApiError> {
        self.check()?;
        info!("MockClient: Returning mock players");
        Ok(fixtures::create_mock_players())
    }

    async fn team_players(
        &self,
        abbreviation: &str,
        source: RosterSource,
    ) -> Result<Vec<Player>, ApiError> {
        self.check()?;
        info!(
            "MockClient: Returning mock roster for {} ({})",
            abbreviation,
            source.as_str()
        );
        Ok(fixtures::create_mock_roster(abbreviation))
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.check()?;
        info!("MockClient: Returning mock transactions");
        Ok(fixtures::create_mock_transactions(MOCK_TRANSACTION_COUNT))
    }
}
