//! Timed effect types and resolved effect values
//!
//! Effect types use the host server's token convention (`SPEED`,
//! `FIRE_RESISTANCE`, ...). Durations are measured in server ticks.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Server ticks per wall-clock second
pub const TICKS_PER_SECOND: i32 = 20;

/// Error returned when a token does not name a known effect type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown effect type: {token:?}")]
pub struct EffectParseError {
    /// The token that failed to parse
    pub token: String,
}

/// A timed (or instant) effect the host server can apply to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    Speed,
    Slowness,
    Haste,
    Strength,
    InstantHealth,
    InstantDamage,
    JumpBoost,
    Regeneration,
    Resistance,
    FireResistance,
    WaterBreathing,
    Invisibility,
    NightVision,
    Weakness,
    Poison,
    Absorption,
}

impl EffectType {
    /// All known effect types, in display order
    pub fn all() -> &'static [EffectType] {
        &[
            Self::Speed,
            Self::Slowness,
            Self::Haste,
            Self::Strength,
            Self::InstantHealth,
            Self::InstantDamage,
            Self::JumpBoost,
            Self::Regeneration,
            Self::Resistance,
            Self::FireResistance,
            Self::WaterBreathing,
            Self::Invisibility,
            Self::NightVision,
            Self::Weakness,
            Self::Poison,
            Self::Absorption,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Speed => "SPEED",
            Self::Slowness => "SLOWNESS",
            Self::Haste => "HASTE",
            Self::Strength => "STRENGTH",
            Self::InstantHealth => "INSTANT_HEALTH",
            Self::InstantDamage => "INSTANT_DAMAGE",
            Self::JumpBoost => "JUMP_BOOST",
            Self::Regeneration => "REGENERATION",
            Self::Resistance => "RESISTANCE",
            Self::FireResistance => "FIRE_RESISTANCE",
            Self::WaterBreathing => "WATER_BREATHING",
            Self::Invisibility => "INVISIBILITY",
            Self::NightVision => "NIGHT_VISION",
            Self::Weakness => "WEAKNESS",
            Self::Poison => "POISON",
            Self::Absorption => "ABSORPTION",
        }
    }

    /// Whether the effect applies instantly rather than over time
    pub fn is_instant(&self) -> bool {
        matches!(self, Self::InstantHealth | Self::InstantDamage)
    }

    /// Duration in ticks when no override is configured
    pub fn natural_duration_ticks(&self) -> i32 {
        match self {
            Self::Speed => 3600,
            Self::Slowness => 1800,
            Self::Haste => 3600,
            Self::Strength => 3600,
            Self::InstantHealth => 1,
            Self::InstantDamage => 1,
            Self::JumpBoost => 3600,
            Self::Regeneration => 900,
            Self::Resistance => 3600,
            Self::FireResistance => 3600,
            Self::WaterBreathing => 3600,
            Self::Invisibility => 3600,
            Self::NightVision => 3600,
            Self::Weakness => 1800,
            Self::Poison => 900,
            Self::Absorption => 2400,
        }
    }

    /// Build the effect at the given 1-based level with its natural duration.
    ///
    /// Level 1 maps to amplifier 0 (the unamplified effect); level 0 is
    /// clamped to the same.
    pub fn base_effect(&self, level: u32) -> ResolvedEffect {
        ResolvedEffect {
            effect_type: *self,
            amplifier: level.saturating_sub(1),
            duration_ticks: self.natural_duration_ticks(),
            ambient: false,
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EffectType {
    type Err = EffectParseError;

    /// Parse an effect token, case-insensitively and ignoring surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        let effect = match token.as_str() {
            "SPEED" => Self::Speed,
            "SLOWNESS" => Self::Slowness,
            "HASTE" => Self::Haste,
            "STRENGTH" => Self::Strength,
            "INSTANT_HEALTH" => Self::InstantHealth,
            "INSTANT_DAMAGE" => Self::InstantDamage,
            "JUMP_BOOST" => Self::JumpBoost,
            "REGENERATION" => Self::Regeneration,
            "RESISTANCE" => Self::Resistance,
            "FIRE_RESISTANCE" => Self::FireResistance,
            "WATER_BREATHING" => Self::WaterBreathing,
            "INVISIBILITY" => Self::Invisibility,
            "NIGHT_VISION" => Self::NightVision,
            "WEAKNESS" => Self::Weakness,
            "POISON" => Self::Poison,
            "ABSORPTION" => Self::Absorption,
            _ => {
                return Err(EffectParseError {
                    token: s.to_string(),
                })
            }
        };
        Ok(effect)
    }
}

/// A fully resolved effect, ready to hand to the host server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedEffect {
    /// What kind of effect to apply
    pub effect_type: EffectType,
    /// Zero-based strength (amplifier 0 is level 1)
    pub amplifier: u32,
    /// How long the effect lasts, in server ticks
    pub duration_ticks: i32,
    /// Render the effect with reduced particle visibility
    pub ambient: bool,
}

impl ResolvedEffect {
    /// Replace the duration with an explicit number of seconds
    pub fn with_duration_seconds(mut self, seconds: u32) -> Self {
        let seconds = i32::try_from(seconds).unwrap_or(i32::MAX);
        self.duration_ticks = seconds.saturating_mul(TICKS_PER_SECOND);
        self
    }
}
