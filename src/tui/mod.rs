pub mod action;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;
pub mod types;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use action::{Action, RosterAction, TransactionsAction};
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::Tab;

use crate::config::Config;
use crate::data_provider::RosterDataProvider;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Main entry point for TUI mode
pub async fn run(client: Arc<dyn RosterDataProvider>, config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(client, config.roster_source));

    let mut initial_state = AppState::default();
    initial_state.system.config = config;
    initial_state.system.reset_status_message();

    let mut runtime = Runtime::new(initial_state, data_effects);

    // Initial load: team list for the selector
    runtime.dispatch(Action::RefreshData);

    let result = event_loop(&mut terminal, &mut runtime);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    loop {
        // Process any actions from effects FIRST (so data loads trigger re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            renderer::render(runtime.state(), area, f.buffer_mut());
        })?;

        if actions_processed > 0 {
            continue;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = key_to_action(key, runtime.state()) else {
            continue;
        };
        if matches!(action, Action::Quit) {
            tracing::debug!("ACTION: Quitting application");
            return Ok(());
        }
        runtime.dispatch(action);
    }
}
