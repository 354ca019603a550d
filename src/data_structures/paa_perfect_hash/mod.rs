// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Paa Perfect Hash: frozen key/value tables with collision-free lookups.
//!
//! A Paa table is built once from a fixed set of items and is read-only afterwards.
//! Construction uses a two-level displacement scheme: keys are first split into
//! buckets by `hash(key, 0)`, then each bucket searches for a seed that sends all of
//! its keys into distinct, unused slots. A lookup re-derives the bucket, reads its
//! seed, hashes once more and compares a single candidate key.
//!
//! # Features
//!
//! - Worst-case constant-time lookups: two hashes and one key comparison.
//! - Deterministic construction: the same items and configuration always produce
//!   the same seeds and slots.
//! - Pluggable seeded hash family and key equality.
//! - Immutable after construction, so tables can be shared across threads freely.
//! - Zero unsafe code.
//!
//! # Example
//!
//! ```
//! use paa_phf_lib::data_structures::paa_perfect_hash::{PaaPerfectHash, PaaPerfectHashConfig};
//!
//! let config = PaaPerfectHashConfig::new().with_bucket_count(4);
//! let table = PaaPerfectHash::with_config([("a", 1), ("b", 2), ("c", 3)], config).unwrap();
//!
//! assert_eq!(table.get("a"), Some(&1));
//! assert_eq!(table.get("z"), None);
//! ```
//!
//! # Construction Failures
//!
//! Construction fails on duplicate keys, and when some bucket exhausts its seed
//! budget. The second case is rare with default sizing; rebuilding with a larger
//! minimum slot count resolves it:
//!
//! ```
//! use paa_phf_lib::data_structures::paa_perfect_hash::{
//!     PaaPerfectHash, PaaPerfectHashConfig, PaaPerfectHashError,
//! };
//!
//! let items: Vec<(u32, ())> = (0..500).map(|i| (i, ())).collect();
//! let tight = PaaPerfectHashConfig::new()
//!     .with_bucket_count(1)
//!     .with_max_seed_attempts(1);
//!
//! let table = match PaaPerfectHash::with_config(items.clone(), tight) {
//!     Err(PaaPerfectHashError::Unplaceable { .. }) => {
//!         PaaPerfectHash::with_config(items, PaaPerfectHashConfig::new()).unwrap()
//!     }
//!     other => other.unwrap(),
//! };
//! assert!(table.contains_key(&499));
//! ```

// Module declarations
mod config;
mod error;
mod hash;
mod planner;
mod solver;
mod static_table;
mod stats;
mod table;

#[cfg(test)]
mod tests;

// Re-exports
pub use config::{
    BucketSort, PaaPerfectHashConfig, DEFAULT_MAX_SEED_ATTEMPTS, DEFAULT_SMALL_TABLE_THRESHOLD,
    MAX_SLOT_COUNT,
};
pub use error::{PaaPerfectHashError, Result};
pub use hash::{DefaultEquality, KeyEquality, MultiplyShiftHasher, SeededHasher, EMPTY_BUCKET_SEED};
pub use static_table::StaticPerfectHash;
pub use stats::BuildStats;
pub use table::{PaaPerfectHash, TableLayout};
