use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::player::PlayerCommands;
use cli::simulate::SimulateCommands;

#[derive(Parser)]
#[command(name = "kstreak")]
#[command(about = "Killstreak tracking and timed rewards for game servers")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.kstreak/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the streak store file (defaults to ~/.kstreak/streaks.toml)
    #[arg(short, long, global = true)]
    streaks: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a summary of the config and tracked streaks
    Status,

    /// Initialize a new ~/.kstreak/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Inspect and edit tracked players
    Player {
        #[command(subcommand)]
        command: PlayerCommands,
    },

    /// Show the configured reward rules
    Rules {
        /// Show only the rule for this streak count
        count: Option<u32>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the known effect types
    Effects,

    /// Feed events to the engine from the command line
    Simulate {
        #[command(subcommand)]
        event: SimulateCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Status) | None => {
            cli::status::status_command(cli.config, cli.streaks).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config, force).await?;
        }
        Some(Commands::Player { command }) => {
            cli::player::player_command(cli.streaks, command).await?;
        }
        Some(Commands::Rules { count, json }) => {
            cli::rules::rules_command(cli.config, count, json).await?;
        }
        Some(Commands::Effects) => {
            cli::rules::effects_command().await?;
        }
        Some(Commands::Simulate { event }) => {
            cli::simulate::simulate_command(cli.config, cli.streaks, event).await?;
        }
    }

    Ok(())
}
