//! Reward rule configuration types

use serde::{Deserialize, Serialize};

/// A single reward rule as stored in the config document.
///
/// The effect token stays a free-form string here; it is only parsed
/// against the known effect types when a streak actually resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRule {
    /// Effect type token (e.g. "SPEED")
    #[serde(default)]
    pub potion: String,

    /// Effect level; level 1 is the unamplified effect
    #[serde(default = "default_level")]
    pub level: u32,

    /// Duration override in seconds; absent (or zero) means the effect's
    /// natural duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,
}

fn default_level() -> u32 {
    1
}

impl RewardRule {
    pub fn new(potion: impl Into<String>, level: u32) -> Self {
        Self {
            potion: potion.into(),
            level,
            seconds: None,
        }
    }

    pub fn with_seconds(mut self, seconds: u32) -> Self {
        self.seconds = Some(seconds);
        self
    }
}
