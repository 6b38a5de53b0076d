//! Reward rule command implementations

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use kstreak::config::{KillStreakConfig, RewardRule};
use kstreak::domain::{EffectType, ResolvedEffect, TICKS_PER_SECOND};
use kstreak::reward::RewardTable;

/// A rule with its resolved effect, as shown to the admin
#[derive(Serialize)]
struct RuleView<'a> {
    streak: u32,
    rule: &'a RewardRule,
    resolved: Option<ResolvedEffect>,
}

/// Show the configured reward rules, optionally narrowed to one count
pub async fn rules_command(
    config_path: Option<PathBuf>,
    count: Option<u32>,
    json: bool,
) -> Result<()> {
    let config = KillStreakConfig::load_from(config_path.as_deref())?;
    let table = RewardTable::from_config(&config);

    let counts = match count {
        Some(count) => vec![count],
        None => table.counts(),
    };

    let views: Vec<RuleView> = counts
        .iter()
        .filter_map(|&streak| {
            table.rule(streak).map(|rule| RuleView {
                streak,
                rule,
                resolved: table.resolve(i64::from(streak)),
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if views.is_empty() {
        match count {
            Some(count) => println!("No rule for streak {}.", count),
            None => println!("No reward rules configured."),
        }
        return Ok(());
    }

    println!("Reward rules ({}):\n", views.len());
    for view in &views {
        match &view.resolved {
            Some(effect) => println!(
                "  {} kills - {} level {} for {} ticks",
                view.streak, effect.effect_type, view.rule.level, effect.duration_ticks
            ),
            None => println!(
                "  {} kills - {:?} (does not resolve; check the effect token)",
                view.streak, view.rule.potion
            ),
        }
    }

    Ok(())
}

/// List the known effect type tokens
pub async fn effects_command() -> Result<()> {
    println!("Known effect types ({}):\n", EffectType::all().len());
    for effect in EffectType::all() {
        if effect.is_instant() {
            println!("  {} (instant)", effect);
        } else {
            println!(
                "  {} ({}s natural duration)",
                effect,
                effect.natural_duration_ticks() / TICKS_PER_SECOND
            );
        }
    }
    Ok(())
}
