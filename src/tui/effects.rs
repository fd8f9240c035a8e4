use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{debug, error};

use super::action::Action;
use crate::config::RosterSource;
use crate::data_provider::RosterDataProvider;
use crate::roster::TeamSelection;

/// Side effects returned by the reducer
///
/// The reducer never performs I/O. Fetch variants are turned into async
/// effects by the runtime through `DataEffects`.
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    FetchTeams,
    FetchPlayers {
        generation: u64,
        selection: TeamSelection,
    },
    FetchTransactions,
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Self::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
            Self::Async(_) => write!(f, "Async(<future>)"),
            Self::FetchTeams => write!(f, "FetchTeams"),
            Self::FetchPlayers {
                generation,
                selection,
            } => f
                .debug_struct("FetchPlayers")
                .field("generation", generation)
                .field("selection", selection)
                .finish(),
            Self::FetchTransactions => write!(f, "FetchTransactions"),
        }
    }
}

/// Effect handler for data fetching operations
///
/// This handles all async data fetching from the roster service.
/// Each method returns an Effect that will dispatch the appropriate
/// *Loaded action when complete. Errors are flattened to strings.
pub struct DataEffects {
    client: Arc<dyn RosterDataProvider>,
    roster_source: RosterSource,
}

impl DataEffects {
    /// Create a new DataEffects handler with a roster data provider
    pub fn new(client: Arc<dyn RosterDataProvider>, roster_source: RosterSource) -> Self {
        Self {
            client,
            roster_source,
        }
    }

    /// Fetch the team list
    pub fn fetch_teams(&self) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = client.teams().await;
            if let Err(e) = &result {
                error!("Failed to fetch teams: {}", e);
            }
            Action::TeamsLoaded(result.map_err(|e| e.to_string()))
        }))
    }

    /// Fetch the roster for `selection`, tagging the result with `generation`
    pub fn fetch_players(&self, generation: u64, selection: TeamSelection) -> Effect {
        let client = self.client.clone();
        let source = self.roster_source;
        let abbreviation = match selection {
            TeamSelection::None => {
                debug!("EFFECT: no team selected, skipping roster fetch");
                return Effect::None;
            }
            TeamSelection::All => None,
            TeamSelection::Team(abbr) => Some(abbr),
        };
        Effect::Async(Box::pin(async move {
            let result = match &abbreviation {
                Some(abbr) => client.team_players(abbr, source).await,
                None => client.all_players().await,
            };
            if let Err(e) = &result {
                error!(
                    "Failed to fetch players for {}: {}",
                    abbreviation.as_deref().unwrap_or("all teams"),
                    e
                );
            }
            Action::PlayersLoaded {
                generation,
                result: result.map_err(|e| e.to_string()),
            }
        }))
    }

    /// Fetch recent player movement
    pub fn fetch_transactions(&self) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = client.transactions().await;
            if let Err(e) = &result {
                error!("Failed to fetch transactions: {}", e);
            }
            Action::TransactionsLoaded(result.map_err(|e| e.to_string()))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;
    use crate::tui::testing::create_client;

    async fn resolve(effect: Effect) -> Action {
        match effect {
            Effect::Async(future) => future.await,
            other => panic!("Expected async effect, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_teams() {
        let effects = DataEffects::new(create_client(), RosterSource::Players);
        match resolve(effects.fetch_teams()).await {
            Action::TeamsLoaded(Ok(teams)) => assert_eq!(teams.len(), 5),
            other => panic!("Unexpected action {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_players_carries_generation() {
        let effects = DataEffects::new(create_client(), RosterSource::Rosters);
        let effect = effects.fetch_players(7, TeamSelection::Team("DEN".to_string()));
        match resolve(effect).await {
            Action::PlayersLoaded { generation, result } => {
                assert_eq!(generation, 7);
                assert_eq!(result.unwrap().len(), 2);
            }
            other => panic!("Unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_fetch_players_without_selection_is_noop() {
        let effects = DataEffects::new(create_client(), RosterSource::Players);
        assert!(matches!(
            effects.fetch_players(1, TeamSelection::None),
            Effect::None
        ));
    }

    #[tokio::test]
    async fn test_failures_become_error_strings() {
        let effects = DataEffects::new(Arc::new(MockClient::failing()), RosterSource::Players);
        match resolve(effects.fetch_transactions()).await {
            Action::TransactionsLoaded(Err(message)) => {
                assert_eq!(message, "HTTP 500: mock failure")
            }
            other => panic!("Unexpected action {:?}", other),
        }
    }
}
