// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Paa perfect hash table through the public API.

use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use paa_phf_lib::config::{ConfigLoader, Validate};
use paa_phf_lib::data_structures::paa_perfect_hash::{
    BucketSort, KeyEquality, MultiplyShiftHasher, PaaPerfectHash, PaaPerfectHashConfig,
    PaaPerfectHashError, SeededHasher, StaticPerfectHash, EMPTY_BUCKET_SEED,
};
use paa_phf_lib::item_file;
use tempfile::tempdir;

/// Buckets byte strings by their first byte only, forcing heavy bucket sharing.
#[derive(Debug, Clone, Copy)]
struct FirstByteHasher;

impl SeededHasher<[u8]> for FirstByteHasher {
    fn hash(&self, key: &[u8], seed: u64) -> u64 {
        if seed == 0 {
            u64::from(key.first().copied().unwrap_or(0))
        } else {
            MultiplyShiftHasher::new().hash(key, seed)
        }
    }
}

impl SeededHasher<Vec<u8>> for FirstByteHasher {
    fn hash(&self, key: &Vec<u8>, seed: u64) -> u64 {
        SeededHasher::<[u8]>::hash(self, key.as_slice(), seed)
    }
}

#[derive(Debug, Clone, Copy)]
struct BytesEqual;

impl KeyEquality<[u8]> for BytesEqual {
    fn equal(&self, a: &[u8], b: &[u8]) -> bool {
        a == b
    }
}

impl KeyEquality<Vec<u8>> for BytesEqual {
    fn equal(&self, a: &Vec<u8>, b: &Vec<u8>) -> bool {
        a == b
    }
}

#[test]
fn test_keyword_table() {
    let keywords = [
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
        "return", "self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
        "where", "while",
    ];
    let table = PaaPerfectHash::new(keywords.iter().enumerate().map(|(i, k)| (*k, i))).unwrap();

    for (i, keyword) in keywords.iter().enumerate() {
        assert_eq!(table.get(keyword), Some(&i));
    }
    for word in ["async", "await", "dyn", "Self", "", "matchx"] {
        assert!(!table.contains_key(word), "{word} reported present");
    }
}

#[test]
fn test_custom_hasher_with_skewed_buckets() {
    let keys: Vec<Vec<u8>> = (1..=12u8).map(|len| vec![b'k'; len as usize]).collect();
    let items: Vec<(Vec<u8>, usize)> = keys.iter().cloned().zip(0..).collect();

    // Every key starts with 'k', so all twelve share one bucket.
    let table = PaaPerfectHash::build(items, FirstByteHasher, BytesEqual).unwrap();
    assert_eq!(table.stats().largest_bucket, 12);

    for (i, key) in keys.iter().enumerate() {
        assert_eq!(table.get(key.as_slice()), Some(&i));
    }
    assert_eq!(table.get(&b"kkkkkkkkkkkkk"[..]), None);
    assert_eq!(table.get(&b"x"[..]), None);
}

#[test]
fn test_unplaceable_reports_and_rebuild_succeeds() {
    let items: Vec<(u64, ())> = (0..1000).map(|i| (i, ())).collect();

    let tight = PaaPerfectHashConfig::new()
        .with_bucket_count(1)
        .with_max_seed_attempts(1);
    match PaaPerfectHash::with_config(items.clone(), tight) {
        Err(PaaPerfectHashError::Unplaceable {
            bucket,
            population,
            attempts,
        }) => {
            assert_eq!(bucket, 0);
            assert_eq!(population, 1000);
            assert_eq!(attempts, 1);
        }
        other => panic!("expected Unplaceable, got {other:?}"),
    }

    let table = PaaPerfectHash::with_config(items, PaaPerfectHashConfig::new()).unwrap();
    assert_eq!(table.len(), 1000);
}

#[test]
fn test_bucket_sort_choice_does_not_change_layout() {
    let items: Vec<(String, ())> = (0..2_000).map(|i| (format!("{i:x}"), ())).collect();

    let layouts: Vec<_> = [BucketSort::Partition, BucketSort::Merge]
        .into_iter()
        .map(|sort| {
            let config = PaaPerfectHashConfig::new().with_bucket_sort(sort);
            PaaPerfectHash::with_config(items.clone(), config)
                .unwrap()
                .layout()
        })
        .collect();

    assert_eq!(layouts[0], layouts[1]);
}

#[test]
fn test_concurrent_lookups_after_barrier() {
    let table = Arc::new(
        PaaPerfectHash::new((0..5_000u64).map(|i| (i * 3, i))).unwrap(),
    );
    let barrier = Arc::new(Barrier::new(4));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&table);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let found = (0..15_000u64).filter(|k| table.contains_key(k)).count();
                assert_eq!(found, 5_000);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

static COLORS: StaticPerfectHash<&'static str, (u8, u8, u8)> = StaticPerfectHash::new();

fn colors() -> &'static PaaPerfectHash<&'static str, (u8, u8, u8)> {
    COLORS
        .get_or_build(|| {
            PaaPerfectHash::new([
                ("red", (255, 0, 0)),
                ("green", (0, 128, 0)),
                ("blue", (0, 0, 255)),
            ])
        })
        .unwrap()
}

#[test]
fn test_static_table() {
    assert_eq!(colors().get("green"), Some(&(0, 128, 0)));
    assert!(std::ptr::eq(colors(), colors()));
}

#[test]
fn test_layout_marks_empty_buckets() {
    let table = PaaPerfectHash::new([(1u8, ()), (2, ())]).unwrap();
    let layout = table.layout();

    let empty = layout
        .seeds
        .iter()
        .filter(|&&seed| seed == EMPTY_BUCKET_SEED)
        .count();
    assert_eq!(empty, layout.stats.empty_buckets);
    assert!(empty >= 2);
}

#[test]
fn test_item_file_with_configured_build() {
    let dir = tempdir().unwrap();
    let items_path = dir.path().join("items.json");
    let config_path = dir.path().join("paa.toml");
    fs::write(&items_path, r#"[["alpha", 1], ["beta", [2, 3]], ["gamma", null]]"#).unwrap();
    fs::write(&config_path, "[build]\nbucket_count = 2\nbucket_sort = \"merge\"\n").unwrap();

    let config = ConfigLoader::new(Some(&config_path), "PAA_IT").load().unwrap();
    assert!(config.validate().is_ok());

    let table = item_file::build_from_file(&items_path, config.build.to_table_config()).unwrap();
    assert_eq!(table.bucket_count(), 2);
    assert_eq!(table.get("beta"), Some(&serde_json::json!([2, 3])));
    assert_eq!(table.get("gamma"), Some(&serde_json::Value::Null));
    assert_eq!(table.get("delta"), None);
}
