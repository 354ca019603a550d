// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for building a Paa perfect hash table.

use serde::{Deserialize, Serialize};

use crate::data_structures::paa_perfect_hash::hash::EMPTY_BUCKET_SEED;

/// Default number of seeds tried per bucket before construction fails.
pub const DEFAULT_MAX_SEED_ATTEMPTS: u64 = 4_096;

/// Tables with fewer items than this get twice the slots to keep seed search short.
pub const DEFAULT_SMALL_TABLE_THRESHOLD: usize = 32;

/// Upper bound on the slot and bucket counts a configuration can request.
pub const MAX_SLOT_COUNT: usize = 1 << (usize::BITS - 6);

/// Sort used to order buckets for placement.
///
/// Both produce the same order because the bucket comparator is a total order;
/// they differ only in worst-case cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketSort {
    /// Midpoint-pivot partition sort.
    #[default]
    Partition,
    /// Stable merge sort with an `O(n log n)` worst case.
    Merge,
}

/// Configuration for building a Paa perfect hash table.
///
/// Fields are only set through the `with_*` builders, which clamp every value into
/// its valid range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaaPerfectHashConfig {
    /// Seeds tried per bucket (`0..max_seed_attempts`) before giving up.
    max_seed_attempts: u64,

    /// Item count below which the slot array is doubled.
    small_table_threshold: usize,

    /// Number of first-level buckets. `None` uses one bucket per slot.
    bucket_count: Option<usize>,

    /// Lower bound on the slot array size, rounded up to a power of two.
    /// Raise this and rebuild when construction reports an unplaceable bucket.
    min_slot_count: usize,

    /// Sort used to order buckets largest-first.
    bucket_sort: BucketSort,
}

impl PaaPerfectHashConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-bucket seed budget.
    ///
    /// Clamped to at least one attempt. The sentinel seed is never tried.
    pub fn with_max_seed_attempts(mut self, max_seed_attempts: u64) -> Self {
        self.max_seed_attempts = max_seed_attempts.clamp(1, EMPTY_BUCKET_SEED);
        self
    }

    /// Sets the item count below which the slot array is doubled.
    pub fn with_small_table_threshold(mut self, small_table_threshold: usize) -> Self {
        self.small_table_threshold = small_table_threshold;
        self
    }

    /// Uses a dedicated number of first-level buckets.
    ///
    /// Clamped to `1..=MAX_SLOT_COUNT`.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = Some(bucket_count.clamp(1, MAX_SLOT_COUNT));
        self
    }

    /// Sets the minimum slot array size.
    ///
    /// Clamped to at most [`MAX_SLOT_COUNT`].
    pub fn with_min_slot_count(mut self, min_slot_count: usize) -> Self {
        self.min_slot_count = min_slot_count.min(MAX_SLOT_COUNT);
        self
    }

    /// Selects the sort used to order buckets.
    pub fn with_bucket_sort(mut self, bucket_sort: BucketSort) -> Self {
        self.bucket_sort = bucket_sort;
        self
    }

    /// Returns the per-bucket seed budget.
    pub fn get_max_seed_attempts(&self) -> u64 {
        self.max_seed_attempts
    }

    /// Returns the item count below which the slot array is doubled.
    pub fn get_small_table_threshold(&self) -> usize {
        self.small_table_threshold
    }

    /// Returns the dedicated bucket count, if one was set.
    pub fn get_bucket_count(&self) -> Option<usize> {
        self.bucket_count
    }

    /// Returns the minimum slot array size.
    pub fn get_min_slot_count(&self) -> usize {
        self.min_slot_count
    }

    /// Returns the sort used to order buckets.
    pub fn get_bucket_sort(&self) -> BucketSort {
        self.bucket_sort
    }

    /// Computes the slot array size `M` for `item_count` items.
    ///
    /// `M` is the next power of two at or above the item count, doubled for small
    /// tables, and never below `min_slot_count` rounded up to a power of two. Sizes
    /// that would overflow saturate at [`MAX_SLOT_COUNT`]. An empty item set gets no
    /// slots.
    pub fn slot_count_for(&self, item_count: usize) -> usize {
        if item_count == 0 {
            return 0;
        }

        let mut slots = item_count
            .checked_next_power_of_two()
            .unwrap_or(MAX_SLOT_COUNT);
        if item_count < self.small_table_threshold {
            slots = slots.saturating_mul(2);
        }
        let floor = self
            .min_slot_count
            .checked_next_power_of_two()
            .unwrap_or(MAX_SLOT_COUNT);
        slots.max(floor).min(MAX_SLOT_COUNT)
    }

    /// Computes the first-level bucket count `B` for a table of `slot_count` slots.
    ///
    /// Never zero for a non-empty item set.
    pub fn bucket_count_for(&self, item_count: usize, slot_count: usize) -> usize {
        if item_count == 0 {
            return 0;
        }
        self.bucket_count.unwrap_or(slot_count).max(1)
    }
}

impl Default for PaaPerfectHashConfig {
    fn default() -> Self {
        Self {
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
            small_table_threshold: DEFAULT_SMALL_TABLE_THRESHOLD,
            bucket_count: None,
            min_slot_count: 0,
            bucket_sort: BucketSort::Partition,
        }
    }
}
