//! Configuration loading and management

mod io;
mod messages;
mod policy;
mod rewards;

pub use messages::MessagesConfig;
pub use policy::MobCountPolicy;
pub use rewards::RewardRule;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KillStreakConfig {
    /// Reset a player's streak when they disconnect
    #[serde(default = "default_reset_on_disconnect")]
    pub reset_on_disconnect: bool,

    /// Message formatting settings
    #[serde(default)]
    pub messages: MessagesConfig,

    /// Reward rules keyed by exact streak count.
    ///
    /// Keys are stored as strings; anything that does not parse as a
    /// count is skipped with a warning when the reward table is built.
    #[serde(default)]
    pub streaks: HashMap<String, RewardRule>,

    /// Mob kill counting policy
    #[serde(default)]
    pub count_mobs: MobCountPolicy,
}

fn default_reset_on_disconnect() -> bool {
    true
}

impl Default for KillStreakConfig {
    fn default() -> Self {
        Self {
            reset_on_disconnect: default_reset_on_disconnect(),
            messages: MessagesConfig::default(),
            streaks: HashMap::new(),
            count_mobs: MobCountPolicy::default(),
        }
    }
}

impl KillStreakConfig {
    /// Create a config with a small starter reward table
    pub fn with_defaults() -> Self {
        let mut config = Self::default();
        config.messages.broadcast_on_powerup = true;
        config.streaks.insert(
            "3".to_string(),
            RewardRule::new("SPEED", 1).with_seconds(30),
        );
        config.streaks.insert(
            "5".to_string(),
            RewardRule::new("STRENGTH", 1).with_seconds(30),
        );
        config
            .streaks
            .insert("10".to_string(), RewardRule::new("REGENERATION", 2));
        config
    }

    /// Look up the stored rule for an exact streak count
    pub fn rule_for(&self, count: u32) -> Option<&RewardRule> {
        self.streaks.get(&count.to_string())
    }
}
