use clap::{Parser, Subcommand};
use rosterwire::api::Client;
use rosterwire::commands;
use rosterwire::config;
use rosterwire::data_provider::RosterDataProvider;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "rosterwire")]
#[command(
    about = "NBA rosters and player movement",
    long_about = "NBA rosters and player movement\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Base URL of the roster service (overrides api_base_url from the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Serve fixture data instead of calling the roster service
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List teams
    Teams,
    /// Display players, league-wide or for one team
    Players {
        /// Team abbreviation (e.g., LAL)
        #[arg(short, long)]
        team: Option<String>,

        /// Only show players whose name or team contains this text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort column: name, team, stars, pts, reb, ast
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending (requires --sort)
        #[arg(long)]
        desc: bool,
    },
    /// Display recent player movement
    Transactions {
        /// Page number, 8 transactions per page
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("api_base_url: {}", cfg.api_base_url);
    println!("roster_source: {}", cfg.roster_source.as_str());
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("star_fg: {:?}", cfg.display.star_fg);
    println!("error_fg: {:?}", cfg.display.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn create_client(cli: &Cli, config: &config::Config) -> Arc<dyn RosterDataProvider> {
    #[cfg(feature = "development")]
    if cli.mock {
        return Arc::new(rosterwire::dev::mock_client::MockClient::new());
    }

    let base_url = cli.base_url.as_deref().unwrap_or(&config.api_base_url);
    match Client::new(base_url) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create roster service client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn RosterDataProvider,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    let display = &config.display;
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Teams => commands::teams::run(client, display).await,
        Commands::Players {
            team,
            search,
            sort,
            desc,
        } => {
            let query = commands::players::PlayersQuery {
                team,
                search,
                sort: commands::parse_sort(sort, desc)?,
            };
            commands::players::run(client, config.roster_source, query, display).await
        }
        Commands::Transactions { page } => commands::transactions::run(client, page, display).await,
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let client = create_client(&cli, &config);

    let Some(command) = cli.command else {
        if let Err(e) = rosterwire::tui::run(client, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    // Handle Config command separately (doesn't need the service)
    if let Commands::Config = command {
        handle_config_command(&config);
        return;
    }

    if let Err(e) = execute_command(client.as_ref(), &config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
