//! Core domain types for kstreak

mod effect;
mod event;

pub use effect::{EffectParseError, EffectType, ResolvedEffect, TICKS_PER_SECOND};
pub use event::{KillOutcome, NoticeRoute, Victim};
