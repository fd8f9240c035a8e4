use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use super::action::Action;
use super::effects::{DataEffects, Effect};
use super::reducer::reduce;
use super::state::AppState;

/// Runtime - owns the state and drives the action/effect loop
///
/// The Runtime is responsible for:
/// - Holding the application state
/// - Dispatching actions through the reducer
/// - Turning fetch effects into async work via `DataEffects`
/// - Feeding completed effects back in as actions
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Actions produced by completed effects
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Data effects handler
    data_effects: Arc<DataEffects>,
}

impl Runtime {
    /// Create a new runtime with initial state and data effects handler
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx).await;
        });

        Self {
            state: initial_state,
            action_rx,
            effect_tx,
            data_effects,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Execute an effect, converting fetch variants into async work
    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchTeams => {
                debug!("EFFECT: Executing teams fetch");
                let _ = self.effect_tx.send(self.data_effects.fetch_teams());
            }
            Effect::FetchPlayers {
                generation,
                selection,
            } => {
                debug!(
                    "EFFECT: Executing players fetch for {:?} (generation {})",
                    selection, generation
                );
                let fetch_effect = self.data_effects.fetch_players(generation, selection);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::FetchTransactions => {
                debug!("EFFECT: Executing transactions fetch");
                let _ = self.effect_tx.send(self.data_effects.fetch_transactions());
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Action(_) | Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Execute effects asynchronously
    ///
    /// Runs in a separate tokio task. Completed futures send their action
    /// back through `action_tx`.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    /// Process a single effect in the async executor
    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            Effect::FetchTeams | Effect::FetchPlayers { .. } | Effect::FetchTransactions => {
                warn!("Fetch effect reached async executor - should be handled by execute_effect()");
            }
        }
    }
}
