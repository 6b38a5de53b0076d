//! Init command implementation

use anyhow::{bail, Result};
use std::path::PathBuf;

use kstreak::config::KillStreakConfig;

/// Default configuration content for kstreak init
pub const DEFAULT_CONFIG: &str = r#"# kstreak configuration
# =====================
#
# Kill streaks count consecutive kills per player. When a streak reaches
# a count listed under [streaks], the killer is rewarded with a timed
# effect ("powerup").
#
# Color values are a marker plus a single code character ("&4" = dark
# red). The message tag may embed any number of & codes; messages are
# translated to the host escape form before they are sent.

# Reset a player's streak when they disconnect
reset_on_disconnect = true

# ============================================================================
# MESSAGES - Chat formatting
# ============================================================================

[messages]
message_tag = "&8[&6KillStreak&8]&f "
killstreak_color = "&4"
username_color = "&b"
# Announce rewarded streaks to the whole server instead of only the killer
broadcast_on_powerup = true

# ============================================================================
# STREAKS - Reward rules keyed by exact kill count
# ============================================================================
#
# Available options:
#   potion  - Effect type token (run `kstreak effects` for the known set)
#   level   - Effect level; level 1 is the unamplified effect (default: 1)
#   seconds - Duration override in seconds; omit for the natural duration

[streaks.3]
potion = "SPEED"
level = 1
seconds = 30

[streaks.5]
potion = "STRENGTH"
level = 1
seconds = 30

[streaks.10]
potion = "REGENERATION"
level = 2

# ============================================================================
# COUNTING - Which kills advance a streak
# ============================================================================

[count_mobs]
# Count kills of the listed mob types toward streaks
enabled = false
mobs = ["ZOMBIE", "SKELETON", "CREEPER"]
"#;

/// Initialize a new kstreak configuration.
/// By default creates the global config at ~/.kstreak/config.toml.
/// Use --config to specify a custom path.
pub async fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(KillStreakConfig::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    // Create parent directory (if any)
    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
