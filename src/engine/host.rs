//! Host server integration traits
//!
//! The engine talks to the game server through these seams. A real
//! deployment implements them against the server API; tests plug in
//! recording doubles.

use crate::domain::{EffectType, ResolvedEffect};

/// A player currently connected to the server
pub trait OnlinePlayer {
    /// Deliver a chat message to this player
    fn send_message(&self, message: &str);

    /// Remove any active effect of the given type
    fn remove_effect(&self, effect_type: EffectType);

    /// Apply an effect to this player
    fn add_effect(&self, effect: &ResolvedEffect);
}

/// Resolves player names to connected players
pub trait PlayerDirectory {
    /// The named player, if currently online
    fn lookup_online(&self, name: &str) -> Option<&dyn OnlinePlayer>;
}

/// Server-wide chat channel
pub trait Broadcaster {
    /// Send a message to every connected player
    fn broadcast_message(&self, message: &str);
}
