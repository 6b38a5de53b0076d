//! Shared test utilities for engine integration tests

use std::sync::Mutex;

use kstreak::config::{KillStreakConfig, RewardRule};
use kstreak::domain::{EffectType, ResolvedEffect};
use kstreak::engine::{Broadcaster, OnlinePlayer, PlayerDirectory};

/// A connected player double that records everything sent to it
#[derive(Default)]
pub struct RecordingPlayer {
    pub name: String,
    messages: Mutex<Vec<String>>,
    applied: Mutex<Vec<ResolvedEffect>>,
    removed: Mutex<Vec<EffectType>>,
}

impl RecordingPlayer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("messages lock").clone()
    }

    pub fn applied(&self) -> Vec<ResolvedEffect> {
        self.applied.lock().expect("applied lock").clone()
    }

    pub fn removed(&self) -> Vec<EffectType> {
        self.removed.lock().expect("removed lock").clone()
    }
}

impl OnlinePlayer for RecordingPlayer {
    fn send_message(&self, message: &str) {
        self.messages
            .lock()
            .expect("messages lock")
            .push(message.to_string());
    }

    fn remove_effect(&self, effect_type: EffectType) {
        self.removed
            .lock()
            .expect("removed lock")
            .push(effect_type);
    }

    fn add_effect(&self, effect: &ResolvedEffect) {
        self.applied.lock().expect("applied lock").push(*effect);
    }
}

/// Host double; players in the list count as online, everyone else is
/// offline
#[derive(Default)]
pub struct RecordingHost {
    players: Vec<RecordingPlayer>,
    broadcasts: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn with_online(names: &[&str]) -> Self {
        Self {
            players: names.iter().map(|name| RecordingPlayer::new(name)).collect(),
            broadcasts: Mutex::new(Vec::new()),
        }
    }

    pub fn player(&self, name: &str) -> &RecordingPlayer {
        self.players
            .iter()
            .find(|p| p.name == name)
            .expect("player not registered in test host")
    }

    pub fn broadcasts(&self) -> Vec<String> {
        self.broadcasts.lock().expect("broadcasts lock").clone()
    }
}

impl PlayerDirectory for RecordingHost {
    fn lookup_online(&self, name: &str) -> Option<&dyn OnlinePlayer> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .map(|p| p as &dyn OnlinePlayer)
    }
}

impl Broadcaster for RecordingHost {
    fn broadcast_message(&self, message: &str) {
        self.broadcasts
            .lock()
            .expect("broadcasts lock")
            .push(message.to_string());
    }
}

/// Config with the given rules and no message decoration, so message
/// assertions stay readable
pub fn test_config(rules: &[(u32, RewardRule)], broadcast: bool) -> KillStreakConfig {
    let mut config = KillStreakConfig::default();
    config.messages.message_tag = String::new();
    config.messages.killstreak_color = String::new();
    config.messages.username_color = String::new();
    config.messages.broadcast_on_powerup = broadcast;
    for (count, rule) in rules {
        config.streaks.insert(count.to_string(), rule.clone());
    }
    config
}
