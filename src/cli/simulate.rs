//! Simulate command implementation
//!
//! Drives the engine from the command line with a console host, so
//! rules and messages can be tried out without a live game server.
//! Events are applied to the real streak store.

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use kstreak::chat::strip_color_codes;
use kstreak::config::KillStreakConfig;
use kstreak::domain::{EffectType, KillOutcome, ResolvedEffect, Victim};
use kstreak::engine::{Broadcaster, OnlinePlayer, PlayerDirectory, StreakEngine};
use kstreak::store::{FileBackend, StreakStore};

#[derive(Subcommand)]
pub enum SimulateCommands {
    /// Record kills and show what the engine does
    Kill {
        /// The killer's player name
        killer: String,

        /// Treat the victim as this mob type instead of a player
        #[arg(long)]
        mob: Option<String>,

        /// Victim player name
        #[arg(long, default_value = "Victim")]
        victim: String,

        /// How many kills to record
        #[arg(long, default_value_t = 1)]
        count: u32,
    },

    /// Record a death, ending the player's streak
    Death { player: String },

    /// Record a disconnect
    Disconnect { player: String },

    /// Look up a streak the way the in-game command would
    Query {
        /// Whose streak to look up
        target: String,

        /// Who is asking (defaults to the target themselves)
        #[arg(long)]
        viewer: Option<String>,
    },
}

/// Host that prints everything to the console and treats every player
/// as online
struct ConsoleHost {
    player: ConsolePlayer,
}

struct ConsolePlayer;

impl OnlinePlayer for ConsolePlayer {
    fn send_message(&self, message: &str) {
        println!("[chat] {}", strip_color_codes(message));
    }

    fn remove_effect(&self, effect_type: EffectType) {
        println!("[effect] cleared {}", effect_type);
    }

    fn add_effect(&self, effect: &ResolvedEffect) {
        println!(
            "[effect] applied {} level {} for {} ticks",
            effect.effect_type,
            effect.amplifier + 1,
            effect.duration_ticks
        );
    }
}

impl PlayerDirectory for ConsoleHost {
    fn lookup_online(&self, _name: &str) -> Option<&dyn OnlinePlayer> {
        Some(&self.player)
    }
}

impl Broadcaster for ConsoleHost {
    fn broadcast_message(&self, message: &str) {
        println!("[broadcast] {}", strip_color_codes(message));
    }
}

/// Feed one event (or a batch of kills) to the engine
pub async fn simulate_command(
    config_path: Option<PathBuf>,
    streaks_path: Option<PathBuf>,
    command: SimulateCommands,
) -> Result<()> {
    let config = KillStreakConfig::load_from(config_path.as_deref())?;
    let streaks_path = streaks_path.unwrap_or_else(KillStreakConfig::global_streaks_path);
    let store = StreakStore::open(Box::new(FileBackend::new(streaks_path)))?;
    let host = ConsoleHost {
        player: ConsolePlayer,
    };
    let mut engine = StreakEngine::new(config, store, host);

    match command {
        SimulateCommands::Kill {
            killer,
            mob,
            victim,
            count,
        } => {
            let victim = match mob {
                Some(mob_type) => Victim::Mob(mob_type),
                None => Victim::Player(victim),
            };
            for _ in 0..count {
                match engine.handle_kill(&killer, &victim)? {
                    KillOutcome::Counted { kills, .. } => {
                        println!("{} is on a killstreak of {}", killer, kills);
                    }
                    KillOutcome::NotCounted => {
                        println!("Kill not counted ({} kills are not tracked)", victim.name());
                    }
                }
            }
        }
        SimulateCommands::Death { player } => {
            let kills = engine.handle_death(&player)?;
            println!("{} died with a killstreak of {}", player, kills);
        }
        SimulateCommands::Disconnect { player } => {
            if engine.handle_disconnect(&player)? {
                println!("{} disconnected; streak reset", player);
            } else {
                println!("{} disconnected; streaks persist across sessions", player);
            }
        }
        SimulateCommands::Query { target, viewer } => {
            let viewer = viewer.unwrap_or_else(|| target.clone());
            println!("{}", strip_color_codes(&engine.streak_query(&viewer, &target)));
        }
    }

    Ok(())
}
