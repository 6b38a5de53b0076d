//! Status command implementation

use anyhow::Result;
use std::path::PathBuf;

use kstreak::config::KillStreakConfig;
use kstreak::reward::RewardTable;
use kstreak::store::{FileBackend, StreakStore};

/// Show a summary of the config and the tracked streaks
pub async fn status_command(
    config_path: Option<PathBuf>,
    streaks_path: Option<PathBuf>,
) -> Result<()> {
    let config = KillStreakConfig::load_from(config_path.as_deref())?;
    let table = RewardTable::from_config(&config);
    let streaks_path = streaks_path.unwrap_or_else(KillStreakConfig::global_streaks_path);
    let store = StreakStore::open(Box::new(FileBackend::new(streaks_path)))?;

    println!("Reward rules: {}", table.len());
    println!(
        "Broadcast on powerup: {}",
        config.messages.broadcast_on_powerup
    );
    println!("Reset on disconnect: {}", config.reset_on_disconnect);
    println!("Mob kills counted: {}", config.count_mobs.enabled);
    println!();

    let players = store.players();
    if players.is_empty() {
        println!("No tracked players.");
        return Ok(());
    }

    println!("Tracked players ({}):\n", players.len());
    for (name, kills) in players {
        match table.resolve(*kills) {
            Some(effect) => println!("  {} - {} (powerup: {})", name, kills, effect.effect_type),
            None => println!("  {} - {}", name, kills),
        }
    }

    Ok(())
}
