//! Event coordination
//!
//! `StreakEngine` ties the store, reward table, formatter and host
//! together. Game events come in, streak counts move, and rewards and
//! notices go back out through the host seams.

mod host;

pub use host::{Broadcaster, OnlinePlayer, PlayerDirectory};

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::chat::ChatFormatter;
use crate::config::KillStreakConfig;
use crate::domain::{KillOutcome, NoticeRoute, ResolvedEffect, Victim};
use crate::reward::RewardTable;
use crate::store::StreakStore;

/// Coordinates streak tracking, rewards and notifications
pub struct StreakEngine<H> {
    config: KillStreakConfig,
    table: RewardTable,
    formatter: ChatFormatter,
    store: StreakStore,
    host: H,
    config_path: Option<PathBuf>,
}

impl<H> StreakEngine<H> {
    pub fn new(config: KillStreakConfig, store: StreakStore, host: H) -> Self {
        let table = RewardTable::from_config(&config);
        let formatter = ChatFormatter::from_messages(&config.messages);
        Self {
            config,
            table,
            formatter,
            store,
            host,
            config_path: None,
        }
    }

    /// Remember where the config came from so `reload` can re-read it
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn config(&self) -> &KillStreakConfig {
        &self.config
    }

    pub fn table(&self) -> &RewardTable {
        &self.table
    }

    pub fn formatter(&self) -> &ChatFormatter {
        &self.formatter
    }

    pub fn store(&self) -> &StreakStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StreakStore {
        &mut self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Swap in a new config and rebuild the derived reward table and
    /// formatter
    pub fn set_config(&mut self, config: KillStreakConfig) {
        self.table = RewardTable::from_config(&config);
        self.formatter = ChatFormatter::from_messages(&config.messages);
        self.config = config;
    }

    /// Re-read the config file this engine was built from.
    ///
    /// Engines built without a config path keep their current config.
    pub fn reload(&mut self) -> Result<()> {
        let Some(path) = self.config_path.clone() else {
            debug!("No config path set; keeping current config");
            return Ok(());
        };
        let config = KillStreakConfig::from_file(&path)?;
        self.set_config(config);
        info!("Reloaded config from {}", path.display());
        Ok(())
    }

    /// The effect the player's current streak count would resolve to
    pub fn resolve_for(&self, player: &str) -> Option<ResolvedEffect> {
        self.table.resolve(self.store.kills(player))
    }
}

impl<H: PlayerDirectory + Broadcaster> StreakEngine<H> {
    /// Process a kill by the named player.
    ///
    /// Player victims always count. Mob victims count only when the mob
    /// counting policy allows their type. A counted kill advances the
    /// streak, applies any reward the new count resolves to, and sends
    /// the streak notice, server-wide when broadcast-on-powerup is set
    /// and a reward was granted, otherwise privately to the killer.
    pub fn handle_kill(&mut self, killer: &str, victim: &Victim) -> Result<KillOutcome> {
        if let Victim::Mob(mob_type) = victim {
            if !self.config.count_mobs.counts(mob_type) {
                debug!("Not counting {} kill by {}", mob_type, killer);
                return Ok(KillOutcome::NotCounted);
            }
        }

        let kills = self.store.add_kill(killer)?;
        let reward = self.table.resolve(kills);
        let player = self.host.lookup_online(killer);

        if let Some(effect) = &reward {
            info!(
                "{} reached a killstreak of {}, rewarding {}",
                killer, kills, effect.effect_type
            );
            match player {
                Some(player) => {
                    player.remove_effect(effect.effect_type);
                    player.add_effect(effect);
                }
                None => debug!("{} is offline; dropping reward effect", killer),
            }
        }

        let route = if self.config.messages.broadcast_on_powerup && reward.is_some() {
            if let Some(message) = self.formatter.broadcast_message(killer, kills, reward.as_ref())
            {
                self.host.broadcast_message(&message);
            }
            NoticeRoute::Broadcast
        } else {
            let message = self.formatter.personal_message(kills, reward.as_ref());
            match player {
                Some(player) => player.send_message(&message),
                None => debug!("{} is offline; dropping streak notice", killer),
            }
            NoticeRoute::Personal
        };

        Ok(KillOutcome::Counted {
            kills,
            reward,
            route,
        })
    }

    /// Process the named player's death: tell them what their streak
    /// was, then reset it. Returns the count before the reset.
    pub fn handle_death(&mut self, player_name: &str) -> Result<i64> {
        let kills = self.store.kills(player_name);
        let message = self.formatter.death_message(kills);
        match self.host.lookup_online(player_name) {
            Some(player) => player.send_message(&message),
            None => debug!("{} is offline; dropping death notice", player_name),
        }
        self.store.reset(player_name)?;
        Ok(kills)
    }

    /// Process a disconnect. Resets the streak when the policy says so;
    /// returns whether the policy fired.
    pub fn handle_disconnect(&mut self, player_name: &str) -> Result<bool> {
        if !self.config.reset_on_disconnect {
            return Ok(false);
        }
        debug!("Resetting streak for disconnecting player {}", player_name);
        self.store.reset(player_name)?;
        Ok(true)
    }

    /// Answer a streak query, phrased for the viewer
    pub fn streak_query(&self, viewer: &str, target: &str) -> String {
        let kills = self.store.kills(target);
        self.formatter.streak_message(target, kills, viewer == target)
    }
}
