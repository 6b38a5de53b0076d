//! Chat message configuration types

use serde::{Deserialize, Serialize};

/// Message formatting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Tag prepended to every message, may contain `&` color codes
    #[serde(default = "default_message_tag")]
    pub message_tag: String,

    /// Marker plus code pair used to color streak counts (e.g. "&4")
    #[serde(default = "default_killstreak_color")]
    pub killstreak_color: String,

    /// Marker plus code pair used to color player names
    #[serde(default = "default_username_color")]
    pub username_color: String,

    /// Announce rewarded streaks to the whole server instead of only the killer
    #[serde(default)]
    pub broadcast_on_powerup: bool,
}

fn default_message_tag() -> String {
    "&8[&6KillStreak&8]&f ".to_string()
}

fn default_killstreak_color() -> String {
    "&4".to_string()
}

fn default_username_color() -> String {
    "&b".to_string()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            message_tag: default_message_tag(),
            killstreak_color: default_killstreak_color(),
            username_color: default_username_color(),
            broadcast_on_powerup: false,
        }
    }
}
