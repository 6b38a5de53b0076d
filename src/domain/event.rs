//! Kill event inputs and outcomes

use serde::Serialize;

use super::effect::ResolvedEffect;

/// The victim side of a kill event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Victim {
    /// Another tracked player, by name
    Player(String),
    /// A non-player entity, by mob type token (e.g. `ZOMBIE`)
    Mob(String),
}

impl Victim {
    pub fn name(&self) -> &str {
        match self {
            Self::Player(name) => name,
            Self::Mob(mob_type) => mob_type,
        }
    }
}

/// How a streak notice was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeRoute {
    /// Announced to every connected player
    Broadcast,
    /// Sent only to the killer
    Personal,
}

/// What processing a kill event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillOutcome {
    /// The kill did not qualify for streak counting
    NotCounted,
    /// The kill advanced the killer's streak
    Counted {
        /// The killer's streak after counting this kill
        kills: i64,
        /// The effect rewarded at this count, if any
        reward: Option<ResolvedEffect>,
        /// Where the notice went
        route: NoticeRoute,
    },
}

impl KillOutcome {
    pub fn is_counted(&self) -> bool {
        matches!(self, Self::Counted { .. })
    }
}
