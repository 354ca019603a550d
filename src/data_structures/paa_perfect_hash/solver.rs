// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Displacement search: choosing one seed per bucket.
//!
//! Buckets are visited in placement order (largest first). For each bucket the seeds
//! `0, 1, 2, ...` are tried until one sends every member to a distinct slot that no
//! earlier bucket has claimed; the slots are then committed and never revisited.
//! Placing large buckets while the table is still empty is what keeps the search
//! short, so the visiting order matters as much as the hash quality.

use tracing::{trace, warn};

use crate::data_structures::paa_perfect_hash::error::{PaaPerfectHashError, Result};
use crate::data_structures::paa_perfect_hash::hash::{reduce, SeededHasher, EMPTY_BUCKET_SEED};
use crate::data_structures::paa_perfect_hash::planner::{try_filled, Bucket};
use crate::data_structures::paa_perfect_hash::stats::BuildStats;

/// Seeds and slot assignment produced by a successful search.
#[derive(Debug)]
pub(crate) struct Placement {
    /// One seed per bucket, [`EMPTY_BUCKET_SEED`] for empty buckets.
    pub(crate) seeds: Vec<u64>,
    /// Item index per slot.
    pub(crate) slots: Vec<Option<usize>>,
    pub(crate) stats: BuildStats,
}

/// Places every bucket into a table of `slot_count` slots.
///
/// # Arguments
///
/// * `items` - The item sequence the bucket members index into.
/// * `buckets` - Buckets as produced by the planner.
/// * `order` - Bucket indices in placement order.
/// * `hasher` - The seeded hash family.
/// * `slot_count` - Table size `M`; must be non-zero unless `items` is empty.
/// * `max_seed_attempts` - Seeds tried per bucket before failing.
///
/// # Errors
///
/// Returns [`PaaPerfectHashError::Unplaceable`] for the first bucket that exhausts
/// its budget. Nothing is returned for the buckets placed before it. Returns
/// [`PaaPerfectHashError::CapacityExceeded`] if the slot arrays cannot be allocated.
pub(crate) fn solve<K, V, H>(
    items: &[(K, V)],
    buckets: &[Bucket],
    order: &[usize],
    hasher: &H,
    slot_count: usize,
    max_seed_attempts: u64,
) -> Result<Placement>
where
    H: SeededHasher<K>,
{
    let mut stats = BuildStats::new(items.len(), slot_count, buckets.len());
    let mut seeds = try_filled(buckets.len(), EMPTY_BUCKET_SEED)?;
    let mut slots: Vec<Option<usize>> = try_filled(slot_count, None)?;

    // A slot is claimed by the current attempt when its stamp equals `generation`,
    // which avoids clearing scratch state between attempts.
    let mut stamps = try_filled(slot_count, 0u64)?;
    let mut generation = 0u64;
    let mut candidate: Vec<(usize, usize)> = Vec::new();

    for &bucket_index in order {
        let bucket = &buckets[bucket_index];
        if bucket.members.is_empty() {
            stats.record_empty_bucket();
            continue;
        }

        let mut accepted = None;
        'seeds: for seed in 0..max_seed_attempts {
            generation += 1;
            candidate.clear();

            for &item in &bucket.members {
                let slot = reduce(hasher.hash(&items[item].0, seed), slot_count);
                if slots[slot].is_some() || stamps[slot] == generation {
                    continue 'seeds;
                }
                stamps[slot] = generation;
                candidate.push((slot, item));
            }

            accepted = Some(seed);
            break;
        }

        let Some(seed) = accepted else {
            warn!(
                bucket = bucket_index,
                population = bucket.population(),
                attempts = max_seed_attempts,
                "Seed search exhausted for bucket"
            );
            return Err(PaaPerfectHashError::Unplaceable {
                bucket: bucket_index,
                population: bucket.population(),
                attempts: max_seed_attempts,
            });
        };

        for &(slot, item) in &candidate {
            slots[slot] = Some(item);
        }
        seeds[bucket_index] = seed;
        stats.record_bucket(bucket.population(), seed + 1);

        trace!(
            bucket = bucket_index,
            population = bucket.population(),
            seed,
            "Placed bucket"
        );
    }

    Ok(Placement {
        seeds,
        slots,
        stats,
    })
}
