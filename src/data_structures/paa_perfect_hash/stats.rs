// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Construction statistics for a Paa perfect hash table.

use serde::Serialize;

/// Counters recorded while building a table.
///
/// Useful for tuning the slot sizing and seed budget: a `max_bucket_attempts` close
/// to the configured budget means construction is near failure for this key set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Number of items in the table (N)
    pub item_count: usize,
    /// Size of the slot array (M)
    pub slot_count: usize,
    /// Number of first-level buckets (B)
    pub bucket_count: usize,
    /// Buckets that received no items
    pub empty_buckets: usize,
    /// Population of the largest bucket
    pub largest_bucket: usize,
    /// Seeds tried across all buckets
    pub total_attempts: u64,
    /// Most seeds tried for a single bucket
    pub max_bucket_attempts: u64,
}

impl BuildStats {
    pub(crate) fn new(item_count: usize, slot_count: usize, bucket_count: usize) -> Self {
        Self {
            item_count,
            slot_count,
            bucket_count,
            ..Self::default()
        }
    }

    /// Records a successfully placed bucket.
    pub(crate) fn record_bucket(&mut self, population: usize, attempts: u64) {
        self.largest_bucket = self.largest_bucket.max(population);
        self.total_attempts += attempts;
        self.max_bucket_attempts = self.max_bucket_attempts.max(attempts);
    }

    pub(crate) fn record_empty_bucket(&mut self) {
        self.empty_buckets += 1;
    }

    /// Ratio of occupied slots to total slots.
    pub fn load_factor(&self) -> f64 {
        if self.slot_count == 0 {
            0.0
        } else {
            self.item_count as f64 / self.slot_count as f64
        }
    }
}
