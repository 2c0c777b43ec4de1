//! Ranking persistence backends.

use super::types::{RankingEntry, RankingTable};
use crate::core::MAX_RANKINGS;
use crate::utils::persistence;
use std::io;
use std::path::{Path, PathBuf};

/// Where the leaderboard lives between runs.
pub trait RankingStore {
    /// Current table, sorted by score. Missing or unreadable data yields an
    /// empty table.
    fn load(&self) -> RankingTable;

    /// Replace the stored table with `entries`. At most `MAX_RANKINGS`
    /// entries are kept, sorted by score.
    fn save(&mut self, entries: &[RankingEntry]) -> io::Result<()>;
}

/// Sorted, capped copy of `entries`.
fn normalize(entries: &[RankingEntry]) -> Vec<RankingEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted.truncate(MAX_RANKINGS);
    sorted
}

/// JSON array on disk: `[{"id": .., "score": .., "date": ..}, ..]`.
pub struct JsonRankingStore {
    path: PathBuf,
}

impl JsonRankingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RankingStore for JsonRankingStore {
    fn load(&self) -> RankingTable {
        match persistence::read_json::<Vec<RankingEntry>>(&self.path) {
            Ok(entries) => {
                log::debug!("Loaded {} rankings from {}", entries.len(), self.path.display());
                RankingTable::from_entries(entries)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => RankingTable::new(),
            Err(e) => {
                log::warn!("Ignoring unreadable rankings at {}: {}", self.path.display(), e);
                RankingTable::new()
            }
        }
    }

    fn save(&mut self, entries: &[RankingEntry]) -> io::Result<()> {
        persistence::write_json(&self.path, &normalize(entries))
    }
}

/// Keeps the table in memory only. Used when no data directory is available.
#[derive(Debug, Default)]
pub struct MemoryRankingStore {
    entries: Vec<RankingEntry>,
    saves: usize,
}

impl MemoryRankingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RankingStore for MemoryRankingStore {
    fn load(&self) -> RankingTable {
        RankingTable::from_entries(self.entries.clone())
    }

    fn save(&mut self, entries: &[RankingEntry]) -> io::Result<()> {
        self.entries = normalize(entries);
        self.saves += 1;
        Ok(())
    }
}
