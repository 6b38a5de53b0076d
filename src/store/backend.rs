//! Pluggable persistence backends for the streak store

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

/// Persistence backend for streak snapshots.
///
/// The store keeps the authoritative copy in memory and hands the full
/// snapshot to the backend after every mutation.
pub trait StoreBackend: Send {
    /// Load the stored snapshot; a backend with nothing stored yields an
    /// empty map
    fn load(&self) -> Result<BTreeMap<String, i64>>;

    /// Persist the snapshot, replacing whatever was stored before
    fn save(&self, players: &BTreeMap<String, i64>) -> Result<()>;
}

/// Backend that keeps nothing between runs
pub struct MemoryBackend;

impl StoreBackend for MemoryBackend {
    fn load(&self) -> Result<BTreeMap<String, i64>> {
        Ok(BTreeMap::new())
    }

    fn save(&self, _players: &BTreeMap<String, i64>) -> Result<()> {
        Ok(())
    }
}

/// On-disk document shape for the streak store
#[derive(Debug, Default, Serialize, Deserialize)]
struct StreaksDoc {
    #[serde(default)]
    players: BTreeMap<String, i64>,
}

/// Backend that persists snapshots to a TOML file
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StoreBackend for FileBackend {
    fn load(&self) -> Result<BTreeMap<String, i64>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read streak file: {}", self.path.display()))?;

        let doc: StreaksDoc = toml::from_str(&content)
            .with_context(|| format!("Failed to parse streak file: {}", self.path.display()))?;

        Ok(doc.players)
    }

    /// Save the snapshot with atomic write and file locking, mirroring
    /// how the config file is written
    fn save(&self, players: &BTreeMap<String, i64>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create streak directory: {}", parent.display())
            })?;
        }

        let doc = StreaksDoc {
            players: players.clone(),
        };
        let content =
            toml::to_string_pretty(&doc).with_context(|| "Failed to serialize streaks")?;

        let lock_path = self.path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire streak file lock")?;

        let temp_path = self.path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write streak content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync streak file")?;

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to rename streak file: {}", self.path.display()))?;

        Ok(())
    }
}
