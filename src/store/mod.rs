//! Per-player kill streak storage
//!
//! The store is the single source of truth for streak counts. Every
//! mutation updates the in-memory map and then persists the full
//! snapshot through the configured backend.

mod backend;

pub use backend::{FileBackend, MemoryBackend, StoreBackend};

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::debug;

/// Tracks kill streak counts per player name
pub struct StreakStore {
    players: BTreeMap<String, i64>,
    backend: Box<dyn StoreBackend>,
}

impl StreakStore {
    /// Open a store, loading whatever snapshot the backend holds
    pub fn open(backend: Box<dyn StoreBackend>) -> Result<Self> {
        let players = backend.load()?;
        debug!("Loaded {} tracked player(s)", players.len());
        Ok(Self { players, backend })
    }

    /// Store that keeps everything in memory and never persists
    pub fn in_memory() -> Self {
        Self {
            players: BTreeMap::new(),
            backend: Box::new(MemoryBackend),
        }
    }

    /// Whether the player has a stored record
    pub fn exists(&self, player: &str) -> bool {
        self.players.contains_key(player)
    }

    /// Current streak count; players without a record count as zero
    pub fn kills(&self, player: &str) -> i64 {
        self.players.get(player).copied().unwrap_or(0)
    }

    /// Set a player's count to an exact value.
    ///
    /// No range check is applied; negative values are stored as given.
    pub fn set_kills(&mut self, player: &str, kills: i64) -> Result<()> {
        self.players.insert(player.to_string(), kills);
        self.persist()
    }

    /// Add to a player's count, starting from zero for unknown players.
    /// Returns the new count.
    pub fn add_kills(&mut self, player: &str, amount: i64) -> Result<i64> {
        let kills = self.kills(player) + amount;
        self.set_kills(player, kills)?;
        Ok(kills)
    }

    /// Count a single kill
    pub fn add_kill(&mut self, player: &str) -> Result<i64> {
        self.add_kills(player, 1)
    }

    /// Reset an existing player's count to zero; unknown players are left
    /// untracked
    pub fn reset(&mut self, player: &str) -> Result<()> {
        if !self.exists(player) {
            return Ok(());
        }
        debug!("Resetting streak for {}", player);
        self.set_kills(player, 0)
    }

    /// Remove a player's record entirely; no-op for unknown players
    pub fn delete(&mut self, player: &str) -> Result<()> {
        if self.players.remove(player).is_none() {
            return Ok(());
        }
        self.persist()
    }

    /// Snapshot of every tracked player and their count
    pub fn players(&self) -> &BTreeMap<String, i64> {
        &self.players
    }

    fn persist(&self) -> Result<()> {
        self.backend.save(&self.players)
    }
}
