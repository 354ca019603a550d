// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! First-level bucket planning.
//!
//! Every item is assigned to bucket `hash(key, 0) mod B`. Buckets are then ordered
//! for placement: largest population first, ties broken by bucket index so the
//! resulting table is identical on every build.

use crate::algorithms::{merge_sort, partition_sort};
use crate::data_structures::paa_perfect_hash::config::BucketSort;
use crate::data_structures::paa_perfect_hash::error::{PaaPerfectHashError, Result};
use crate::data_structures::paa_perfect_hash::hash::{reduce, KeyEquality, SeededHasher};

/// A first-level bucket: the items sharing one value of `hash(key, 0) mod B`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Bucket {
    /// Item indices in construction order.
    pub(crate) members: Vec<usize>,
}

impl Bucket {
    pub(crate) fn population(&self) -> usize {
        self.members.len()
    }
}

/// Allocates a vector of `len` copies of `value`, failing instead of aborting when
/// the allocation is impossible.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut filled = Vec::new();
    filled
        .try_reserve_exact(len)
        .map_err(|_| PaaPerfectHashError::CapacityExceeded { requested: len })?;
    filled.resize(len, value);
    Ok(filled)
}

/// Assigns each key to one of `bucket_count` buckets.
///
/// The returned vector has exactly `bucket_count` entries and every key index appears
/// in exactly one of them. `bucket_count` may only be zero when `keys` is empty.
pub(crate) fn plan<'a, K, H>(
    keys: impl IntoIterator<Item = &'a K>,
    hasher: &H,
    bucket_count: usize,
) -> Result<Vec<Bucket>>
where
    K: 'a + ?Sized,
    H: SeededHasher<K>,
{
    let mut buckets = try_filled(bucket_count, Bucket::default())?;
    for (index, key) in keys.into_iter().enumerate() {
        let bucket = reduce(hasher.hash(key, 0), bucket_count);
        buckets[bucket].members.push(index);
    }
    Ok(buckets)
}

/// Finds the first pair of items whose keys compare equal.
///
/// Equal keys hash equally, so only members of the same bucket are compared. Buckets
/// are scanned in index order and members in construction order; the returned pair is
/// `(earlier, later)`.
pub(crate) fn find_duplicate<K, V, E>(
    items: &[(K, V)],
    buckets: &[Bucket],
    equal: &E,
) -> Option<(usize, usize)>
where
    E: KeyEquality<K>,
{
    buckets.iter().find_map(|bucket| {
        bucket
            .members
            .iter()
            .enumerate()
            .find_map(|(position, &first)| {
                bucket.members[position + 1..]
                    .iter()
                    .find(|&&second| equal.equal(&items[first].0, &items[second].0))
                    .map(|&second| (first, second))
            })
    })
}

/// Returns bucket indices in placement order: population descending, index ascending.
pub(crate) fn placement_order(buckets: &[Bucket], sort: BucketSort) -> Vec<usize> {
    let mut keyed: Vec<(usize, usize)> = buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| (bucket.population(), index))
        .collect();

    let larger_first = |a: &(usize, usize), b: &(usize, usize)| {
        a.0 > b.0 || (a.0 == b.0 && a.1 < b.1)
    };
    match sort {
        BucketSort::Partition => partition_sort(&mut keyed, larger_first),
        BucketSort::Merge => merge_sort(&mut keyed, larger_first),
    }

    keyed.into_iter().map(|(_, index)| index).collect()
}
