//! Reward resolution
//!
//! Maps streak counts to timed effects using the configured rule table.
//! Rules match on exact count only; there is no highest-below-count
//! fallback.

use std::collections::HashMap;

use tracing::warn;

use crate::config::{KillStreakConfig, RewardRule};
use crate::domain::{EffectType, ResolvedEffect};

/// Reward rules with parsed streak-count keys
#[derive(Debug, Clone, Default)]
pub struct RewardTable {
    rules: HashMap<u32, RewardRule>,
}

impl RewardTable {
    /// Build the table from config, skipping keys that do not parse as
    /// streak counts
    pub fn from_config(config: &KillStreakConfig) -> Self {
        let mut rules = HashMap::new();
        for (key, rule) in &config.streaks {
            match key.parse::<u32>() {
                Ok(count) => {
                    rules.insert(count, rule.clone());
                }
                Err(_) => {
                    warn!("Ignoring reward rule with invalid streak count {:?}", key);
                }
            }
        }
        Self { rules }
    }

    pub fn new(rules: HashMap<u32, RewardRule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The stored rule for an exact streak count
    pub fn rule(&self, count: u32) -> Option<&RewardRule> {
        self.rules.get(&count)
    }

    /// Streak counts that have a rule, sorted ascending
    pub fn counts(&self) -> Vec<u32> {
        let mut counts: Vec<u32> = self.rules.keys().copied().collect();
        counts.sort_unstable();
        counts
    }

    /// Resolve the effect rewarded at the given streak count.
    ///
    /// A count without a rule, a negative count, or a rule whose effect
    /// token does not parse all resolve to nothing. Malformed rules are
    /// logged so admins can fix the config.
    pub fn resolve(&self, kills: i64) -> Option<ResolvedEffect> {
        let count = u32::try_from(kills).ok()?;
        let rule = self.rules.get(&count)?;

        let effect_type = match rule.potion.parse::<EffectType>() {
            Ok(effect_type) => effect_type,
            Err(err) => {
                warn!("Reward rule for streak {} is unusable: {}", count, err);
                return None;
            }
        };

        let mut effect = effect_type.base_effect(rule.level);
        if let Some(seconds) = rule.seconds {
            if seconds > 0 {
                effect = effect.with_duration_seconds(seconds);
            }
        }
        Some(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TICKS_PER_SECOND;

    fn table(entries: &[(u32, RewardRule)]) -> RewardTable {
        RewardTable::new(entries.iter().cloned().collect())
    }

    #[test]
    fn test_resolves_on_exact_count_only() {
        let table = table(&[(5, RewardRule::new("SPEED", 1))]);
        assert!(table.resolve(4).is_none());
        assert!(table.resolve(6).is_none());

        let effect = table.resolve(5).unwrap();
        assert_eq!(effect.effect_type, EffectType::Speed);
    }

    #[test]
    fn test_level_maps_to_amplifier() {
        let table = table(&[(3, RewardRule::new("STRENGTH", 3))]);
        assert_eq!(table.resolve(3).unwrap().amplifier, 2);
    }

    #[test]
    fn test_seconds_override_becomes_ticks() {
        let table = table(&[(3, RewardRule::new("SPEED", 1).with_seconds(45))]);
        assert_eq!(table.resolve(3).unwrap().duration_ticks, 45 * TICKS_PER_SECOND);
    }

    #[test]
    fn test_seconds_override_touches_only_the_duration() {
        let table = table(&[(3, RewardRule::new("POISON", 3).with_seconds(5))]);
        let effect = table.resolve(3).unwrap();
        assert_eq!(effect.effect_type, EffectType::Poison);
        assert_eq!(effect.amplifier, 2);
        assert_eq!(effect.duration_ticks, 100);
        assert!(!effect.ambient);
    }

    #[test]
    fn test_absent_seconds_keeps_natural_duration() {
        let table = table(&[(3, RewardRule::new("REGENERATION", 1))]);
        assert_eq!(
            table.resolve(3).unwrap().duration_ticks,
            EffectType::Regeneration.natural_duration_ticks()
        );
    }

    #[test]
    fn test_zero_seconds_keeps_natural_duration() {
        let table = table(&[(3, RewardRule::new("SPEED", 1).with_seconds(0))]);
        assert_eq!(
            table.resolve(3).unwrap().duration_ticks,
            EffectType::Speed.natural_duration_ticks()
        );
    }

    #[test]
    fn test_effect_tokens_parse_case_insensitively() {
        let table = table(&[(3, RewardRule::new("speed", 1))]);
        assert_eq!(table.resolve(3).unwrap().effect_type, EffectType::Speed);
    }

    #[test]
    fn test_unknown_effect_token_resolves_to_nothing() {
        let table = table(&[(3, RewardRule::new("TELEPORT", 1))]);
        assert!(table.resolve(3).is_none());
    }

    #[test]
    fn test_missing_effect_token_resolves_to_nothing() {
        let table = table(&[(3, RewardRule::new("", 1))]);
        assert!(table.resolve(3).is_none());
    }

    #[test]
    fn test_negative_counts_never_match() {
        let table = table(&[(3, RewardRule::new("SPEED", 1))]);
        assert!(table.resolve(-3).is_none());
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let table = table(&[(3, RewardRule::new("SPEED", 2).with_seconds(10))]);
        assert_eq!(table.resolve(3), table.resolve(3));
        assert_eq!(table.resolve(4), table.resolve(4));
    }

    #[test]
    fn test_invalid_streak_keys_are_skipped() {
        let mut config = KillStreakConfig::default();
        config
            .streaks
            .insert("3".to_string(), RewardRule::new("SPEED", 1));
        config
            .streaks
            .insert("often".to_string(), RewardRule::new("SPEED", 1));
        config
            .streaks
            .insert("-2".to_string(), RewardRule::new("SPEED", 1));

        let table = RewardTable::from_config(&config);
        assert_eq!(table.len(), 1);
        assert!(table.rule(3).is_some());
    }

    #[test]
    fn test_counts_are_sorted() {
        let table = table(&[
            (10, RewardRule::new("SPEED", 1)),
            (3, RewardRule::new("SPEED", 1)),
            (5, RewardRule::new("SPEED", 1)),
        ]);
        assert_eq!(table.counts(), vec![3, 5, 10]);
    }
}
