use crate::core::{MAX_RANKINGS, RANKING_DATE_FORMAT};
use serde::{Deserialize, Serialize};

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub id: String,
    pub score: u32,
    /// Local time the run ended, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "date")]
    pub timestamp: String,
}

impl RankingEntry {
    pub fn new(id: &str, score: u32, timestamp: &str) -> Self {
        Self {
            id: id.to_string(),
            score,
            timestamp: timestamp.to_string(),
        }
    }

    /// Entry stamped with the current local time.
    pub fn now(id: &str, score: u32) -> Self {
        let timestamp = chrono::Local::now().format(RANKING_DATE_FORMAT).to_string();
        Self {
            id: id.to_string(),
            score,
            timestamp,
        }
    }
}

/// Leaderboard sorted by score, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingTable {
    entries: Vec<RankingEntry>,
}

impl RankingTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a table from entries in any order. Equal scores keep their
    /// relative order.
    pub fn from_entries(mut entries: Vec<RankingEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Self { entries }
    }

    /// Insert an entry and trim the table to `MAX_RANKINGS`.
    /// Ties rank below existing entries with the same score.
    /// Returns the 1-based rank, or `None` if the entry did not make the cut.
    pub fn add_entry(&mut self, entry: RankingEntry) -> Option<usize> {
        let pos = self
            .entries
            .iter()
            .position(|e| entry.score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_RANKINGS);

        (pos < MAX_RANKINGS).then_some(pos + 1)
    }

    /// The best `n` entries.
    pub fn top(&self, n: usize) -> &[RankingEntry] {
        &self.entries[..self.entries.len().min(n)]
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn best_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, score: u32) -> RankingEntry {
        RankingEntry::new(id, score, "2024-05-01 12:00:00")
    }

    #[test]
    fn test_from_entries_sorts_descending() {
        let table = RankingTable::from_entries(vec![entry("A", 1), entry("B", 9), entry("C", 4)]);
        let scores: Vec<u32> = table.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![9, 4, 1]);
    }

    #[test]
    fn test_add_entry_returns_rank() {
        let mut table = RankingTable::from_entries(vec![entry("A", 10), entry("B", 5)]);
        assert_eq!(table.add_entry(entry("C", 7)), Some(2));
        assert_eq!(table.entries()[1].id, "C");
    }

    #[test]
    fn test_tie_ranks_below_existing() {
        let mut table = RankingTable::from_entries(vec![entry("A", 5)]);
        assert_eq!(table.add_entry(entry("B", 5)), Some(2));
        assert_eq!(table.entries()[0].id, "A");
    }

    #[test]
    fn test_table_capped_at_ten() {
        let mut table = RankingTable::new();
        for i in 0..15 {
            table.add_entry(entry("X", i));
        }
        assert_eq!(table.len(), MAX_RANKINGS);
        assert_eq!(table.best_score(), Some(14));
        assert_eq!(table.entries().last().map(|e| e.score), Some(5));
    }

    #[test]
    fn test_low_score_misses_full_table() {
        let mut table = RankingTable::new();
        for i in 1..=10 {
            table.add_entry(entry("X", i * 10));
        }
        assert_eq!(table.add_entry(entry("LOW", 3)), None);
        assert!(table.entries().iter().all(|e| e.id != "LOW"));
    }

    #[test]
    fn test_zero_score_still_ranks_in_open_table() {
        let mut table = RankingTable::new();
        assert_eq!(table.add_entry(entry("ZERO", 0)), Some(1));
    }

    #[test]
    fn test_top_limits_slice() {
        let table = RankingTable::from_entries(vec![entry("A", 3), entry("B", 2)]);
        assert_eq!(table.top(5).len(), 2);
        assert_eq!(table.top(1)[0].id, "A");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(entry("ABCDE", 12)).unwrap();
        assert_eq!(json["id"], "ABCDE");
        assert_eq!(json["score"], 12);
        assert_eq!(json["date"], "2024-05-01 12:00:00");
        assert!(json.get("timestamp").is_none());
    }

    #[test]
    fn test_now_uses_date_format() {
        let e = RankingEntry::now("ABCDE", 1);
        assert!(chrono::NaiveDateTime::parse_from_str(&e.timestamp, RANKING_DATE_FORMAT).is_ok());
    }
}
