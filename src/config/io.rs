//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::KillStreakConfig;

impl KillStreakConfig {
    /// Get the global config directory path (~/.kstreak/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".kstreak")
    }

    /// Get the global config file path (~/.kstreak/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Get the global streak store path (~/.kstreak/streaks.toml)
    pub fn global_streaks_path() -> PathBuf {
        Self::global_config_dir().join("streaks.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: KillStreakConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// This ensures:
    /// 1. Exclusive lock prevents concurrent writes from multiple processes
    /// 2. Atomic write (temp file + rename) prevents corruption on crash
    /// 3. Parent directory is created if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        // Create lock file (separate from config to avoid issues with rename)
        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        // Acquire exclusive lock (blocks until available)
        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock")?;

        // Write to temp file first (atomic write pattern)
        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        // Atomic rename (overwrites existing file)
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        // Lock is automatically released when lock_file is dropped
        Ok(())
    }

    /// Load global configuration from ~/.kstreak/config.toml.
    /// If no config exists, auto-creates one with defaults.
    pub fn load() -> Result<Self> {
        let global_path = Self::global_config_path();

        if !global_path.exists() {
            Self::auto_init()?;
        }

        Self::from_file(&global_path)
    }

    /// Load from an explicit path when given, otherwise from the global
    /// config (auto-creating it if missing)
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Auto-initialize global configuration when no config exists
    ///
    /// Uses file locking to prevent race conditions when multiple processes
    /// try to auto-init simultaneously.
    fn auto_init() -> Result<()> {
        let config_dir = Self::global_config_dir();
        let config_path = Self::global_config_path();

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).with_context(|| {
                format!(
                    "Failed to create config directory: {}",
                    config_dir.display()
                )
            })?;
        }

        // Create lock file and acquire exclusive lock to prevent race conditions
        let lock_path = config_path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock for auto-init")?;

        // Re-check if config exists after acquiring lock (another process may have created it)
        if config_path.exists() {
            // Lock is released when lock_file is dropped
            return Ok(());
        }

        let default_config = Self::with_defaults();
        let config_content = toml::to_string_pretty(&default_config)
            .with_context(|| "Failed to serialize default config")?;

        // Write to temp file first (atomic write pattern)
        let temp_path = config_path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(config_content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        // Atomic rename
        std::fs::rename(&temp_path, &config_path)
            .with_context(|| format!("Failed to rename config file: {}", config_path.display()))?;

        eprintln!("Created {}", config_path.display());
        // Lock is released when lock_file is dropped
        Ok(())
    }
}
