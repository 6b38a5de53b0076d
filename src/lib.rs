//! kstreak - Killstreak tracking and timed rewards
//!
//! kstreak counts consecutive kills per player and pays out timed
//! effects when a streak hits a configured count. The host game server
//! feeds events in (kills, deaths, disconnects) and provides the chat
//! and effect surfaces the engine talks back through.
//!
//! ## Structure
//!
//! 1. **Store**: per-player streak counts with pluggable persistence.
//!
//! 2. **Rewards**: exact-count rules resolved into concrete effects.
//!
//! 3. **Engine**: the event coordinator wiring store, rewards and chat
//!    to a host server through small integration traits.

pub mod chat;
pub mod config;
pub mod domain;
pub mod engine;
pub mod reward;
pub mod store;

pub use domain::*;
