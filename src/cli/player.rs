//! Player store command implementations

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use kstreak::config::KillStreakConfig;
use kstreak::store::{FileBackend, StreakStore};

#[derive(Subcommand)]
pub enum PlayerCommands {
    /// List all tracked players and their counts
    List,

    /// Show a player's current streak count
    Get { name: String },

    /// Set a player's streak count to an exact value
    Set {
        name: String,

        /// The new count; negative values are stored as given
        #[arg(allow_negative_numbers = true)]
        kills: i64,
    },

    /// Add kills to a player's streak count
    Add {
        name: String,

        /// How many kills to add
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        kills: i64,
    },

    /// Reset a player's streak count to zero
    Reset { name: String },

    /// Remove a player's record entirely
    Delete { name: String },
}

/// Inspect and edit the streak store
pub async fn player_command(streaks_path: Option<PathBuf>, command: PlayerCommands) -> Result<()> {
    let path = streaks_path.unwrap_or_else(KillStreakConfig::global_streaks_path);
    let mut store = StreakStore::open(Box::new(FileBackend::new(path)))?;

    match command {
        PlayerCommands::List => {
            let players = store.players();
            if players.is_empty() {
                println!("No tracked players.");
                return Ok(());
            }

            println!("Tracked players ({}):\n", players.len());
            for (name, kills) in players {
                println!("  {} - {}", name, kills);
            }
        }
        PlayerCommands::Get { name } => {
            println!("{} - {}", name, store.kills(&name));
        }
        PlayerCommands::Set { name, kills } => {
            store.set_kills(&name, kills)?;
            println!("{} - {}", name, kills);
        }
        PlayerCommands::Add { name, kills } => {
            let total = store.add_kills(&name, kills)?;
            println!("{} - {}", name, total);
        }
        PlayerCommands::Reset { name } => {
            store.reset(&name)?;
            println!("{} - 0", name);
        }
        PlayerCommands::Delete { name } => {
            store.delete(&name)?;
            println!("Deleted {}", name);
        }
    }

    Ok(())
}
