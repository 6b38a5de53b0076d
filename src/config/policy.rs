//! Kill counting policy types

use serde::{Deserialize, Serialize};

/// Controls whether kills of non-player entities advance streaks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MobCountPolicy {
    /// Count qualifying mob kills toward streaks
    #[serde(default)]
    pub enabled: bool,

    /// Mob type tokens that qualify when enabled
    #[serde(default)]
    pub mobs: Vec<String>,
}

impl MobCountPolicy {
    /// Whether a kill of the given mob type advances the killer's streak
    pub fn counts(&self, mob_type: &str) -> bool {
        self.enabled && self.mobs.iter().any(|m| m.eq_ignore_ascii_case(mob_type))
    }
}
