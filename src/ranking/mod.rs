//! Leaderboard of the best runs.
//!
//! The table is kept sorted by score (highest first) and capped at
//! `MAX_RANKINGS`. It is always persisted as the full set, never appended.

pub mod store;
pub mod types;

pub use store::{JsonRankingStore, MemoryRankingStore, RankingStore};
pub use types::{RankingEntry, RankingTable};

/// Merge a finished run into the stored table and persist the result.
///
/// The table is re-read from the store first so it stays authoritative. A
/// failed write is logged and the merged table is still returned.
/// Returns the merged table and the 1-based rank of the run, if it made the cut.
pub fn record_score(
    store: &mut dyn RankingStore,
    entry: RankingEntry,
) -> (RankingTable, Option<usize>) {
    let mut table = store.load();
    let id = entry.id.clone();
    let score = entry.score;
    let rank = table.add_entry(entry);

    match store.save(table.entries()) {
        Ok(()) => log::info!(
            "Recorded score {} for {} (rank {:?}, {} entries)",
            score,
            id,
            rank,
            table.len()
        ),
        Err(e) => log::error!("Failed to save rankings: {}", e),
    }

    (table, rank)
}
