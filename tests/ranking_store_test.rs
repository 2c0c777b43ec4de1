//! Integration test: leaderboard persistence
//!
//! Runs `record_score` against a JSON store in a temp directory and checks the
//! on-disk format, ordering, the ten-entry cap and recovery from bad files.

use chinup_flap::ranking::{record_score, JsonRankingStore, RankingEntry, RankingStore};
use std::fs;

fn entry(id: &str, score: u32) -> RankingEntry {
    RankingEntry::new(id, score, "2024-06-01 18:30:00")
}

#[test]
fn test_scores_accumulate_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rankings.json");

    {
        let mut store = JsonRankingStore::new(&path);
        record_score(&mut store, entry("ALPHA", 4));
        record_score(&mut store, entry("BRAVO", 9));
    }

    // A fresh instance (next launch) sees the same table.
    let mut store = JsonRankingStore::new(&path);
    let (table, rank) = record_score(&mut store, entry("CHARL", 6));

    assert_eq!(rank, Some(2));
    let ids: Vec<&str> = table.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["BRAVO", "CHARL", "ALPHA"]);
    assert_eq!(store.load(), table);
}

#[test]
fn test_file_is_a_json_array_with_date_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rankings.json");
    let mut store = JsonRankingStore::new(&path);
    record_score(&mut store, entry("DELTA", 3));

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let rows = value.as_array().expect("rankings file is an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "DELTA");
    assert_eq!(rows[0]["score"], 3);
    assert_eq!(rows[0]["date"], "2024-06-01 18:30:00");
}

#[test]
fn test_table_is_capped_at_ten_sorted_descending() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonRankingStore::new(dir.path().join("rankings.json"));

    let mut last_rank = None;
    for score in [3, 15, 7, 0, 22, 9, 9, 1, 12, 5, 18, 2, 30] {
        let (_, rank) = record_score(&mut store, entry(&format!("S{:04}", score), score));
        last_rank = rank;
    }
    assert_eq!(last_rank, Some(1));

    let scores: Vec<u32> = store.load().entries().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![30, 22, 18, 15, 12, 9, 9, 7, 5, 3]);
}

#[test]
fn test_low_score_on_full_table_is_not_ranked() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonRankingStore::new(dir.path().join("rankings.json"));
    for i in 0..10 {
        record_score(&mut store, entry(&format!("FULL{}", i), 10 + i));
    }

    let (table, rank) = record_score(&mut store, entry("LATE0", 10));
    assert_eq!(rank, None);
    assert_eq!(table.len(), 10);
    assert!(table.entries().iter().all(|e| e.id != "LATE0"));
}

#[test]
fn test_corrupt_file_is_replaced_on_next_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rankings.json");
    fs::write(&path, "not a leaderboard").unwrap();

    let mut store = JsonRankingStore::new(&path);
    assert!(store.load().is_empty());

    let (_, rank) = record_score(&mut store, entry("ECHO0", 1));
    assert_eq!(rank, Some(1));
    assert_eq!(store.load().len(), 1);
}

#[test]
fn test_unwritable_location_keeps_merged_table() {
    let dir = tempfile::tempdir().unwrap();
    // Parent directory does not exist, so every write fails.
    let mut store = JsonRankingStore::new(dir.path().join("missing").join("rankings.json"));

    let (table, rank) = record_score(&mut store, entry("FOXTR", 8));
    assert_eq!(rank, Some(1));
    assert_eq!(table.len(), 1);
    assert!(store.load().is_empty());
}
