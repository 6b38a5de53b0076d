//! Chat message formatting
//!
//! Builds the player-facing messages for streak changes, deaths and
//! queries. Templates follow the config's `&` color convention and are
//! translated to the host escape form on the way out.

mod color;

pub use color::{strip_color_codes, translate_color_codes, ChatColor, COLOR_CHAR};

use crate::config::MessagesConfig;
use crate::domain::ResolvedEffect;

/// Marker character used for color codes in config values and templates
const CODE_MARKER: char = '&';

/// Formats chat messages from the configured tag and colors
#[derive(Debug, Clone)]
pub struct ChatFormatter {
    tag: String,
    killstreak_color: Option<ChatColor>,
    username_color: Option<ChatColor>,
}

impl ChatFormatter {
    pub fn from_messages(messages: &MessagesConfig) -> Self {
        Self {
            tag: messages.message_tag.clone(),
            killstreak_color: configured_color(&messages.killstreak_color),
            username_color: configured_color(&messages.username_color),
        }
    }

    /// Server-wide announcement for a rewarded streak.
    ///
    /// Only rewarded streaks are announced; returns `None` when there is no
    /// effect to talk about.
    pub fn broadcast_message(
        &self,
        player: &str,
        kills: i64,
        effect: Option<&ResolvedEffect>,
    ) -> Option<String> {
        let effect = effect?;
        let message = format!(
            "{}{}{}&f has a killstreak of {}{}&f and has been rewarded the powerup &e{}&f!",
            self.tag,
            paint(self.username_color),
            player,
            paint(self.killstreak_color),
            kills,
            effect.effect_type
        );
        Some(translate_color_codes(CODE_MARKER, &message))
    }

    /// Private notice to the killer about their new streak count
    pub fn personal_message(&self, kills: i64, effect: Option<&ResolvedEffect>) -> String {
        let suffix = match effect {
            Some(effect) => format!(
                " and have been rewarded the powerup &e{}&f!",
                effect.effect_type
            ),
            None => "!".to_string(),
        };
        let message = format!(
            "{}You now have a killstreak of {}{}&f{}",
            self.tag,
            paint(self.killstreak_color),
            kills,
            suffix
        );
        translate_color_codes(CODE_MARKER, &message)
    }

    /// Notice sent when a player dies and their streak ends
    pub fn death_message(&self, kills: i64) -> String {
        let message = format!(
            "{}Your killstreak was {}{}",
            self.tag,
            paint(self.killstreak_color),
            kills
        );
        translate_color_codes(CODE_MARKER, &message)
    }

    /// Answer to a streak query, phrased for the viewer.
    ///
    /// Self-queries read "Your killstreak is N"; queries about another
    /// player name them.
    pub fn streak_message(&self, player: &str, kills: i64, is_self: bool) -> String {
        let lead = if is_self {
            "Your killstreak is ".to_string()
        } else {
            format!("{}{} has a killstreak of ", paint(self.username_color), player)
        };
        let message = format!(
            "{}{}{}{}",
            self.tag,
            lead,
            paint(self.killstreak_color),
            kills
        );
        translate_color_codes(CODE_MARKER, &message)
    }
}

/// Resolve a configured color value ("&4") to its color.
///
/// The first character is the marker and is skipped; an unrecognized or
/// too-short value resolves to no color at all.
fn configured_color(value: &str) -> Option<ChatColor> {
    value.chars().nth(1).and_then(ChatColor::by_char)
}

fn paint(color: Option<ChatColor>) -> String {
    color.map(|c| c.to_string()).unwrap_or_default()
}
