// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the Paa perfect hash table.
//!
//! A table is built once from a fixed item sequence and never changes afterwards.
//! Lookups cost two seeded hash evaluations and one key comparison regardless of the
//! number of items.

use std::borrow::Borrow;
use std::hash::Hash;

use serde::Serialize;
use tracing::{debug, warn};

use crate::data_structures::paa_perfect_hash::config::PaaPerfectHashConfig;
use crate::data_structures::paa_perfect_hash::error::{PaaPerfectHashError, Result};
use crate::data_structures::paa_perfect_hash::hash::{
    reduce, DefaultEquality, KeyEquality, MultiplyShiftHasher, SeededHasher, EMPTY_BUCKET_SEED,
};
use crate::data_structures::paa_perfect_hash::planner;
use crate::data_structures::paa_perfect_hash::solver;
use crate::data_structures::paa_perfect_hash::stats::BuildStats;

/// An immutable key/value table with collision-free constant-time lookups.
///
/// Items are stored in construction order. A per-bucket seed array and a slot array
/// map every key of the original set to its own slot, so a lookup never probes more
/// than one item.
///
/// # Type Parameters
///
/// * `K` - The key type.
/// * `V` - The value type; `()` for a set.
/// * `H` - The seeded hash family, [`MultiplyShiftHasher`] over FNV by default.
/// * `E` - The key equality relation, [`PartialEq`] by default.
///
/// # Examples
///
/// ```
/// use paa_phf_lib::data_structures::paa_perfect_hash::PaaPerfectHash;
///
/// let table = PaaPerfectHash::new([("a", 1), ("b", 2), ("c", 3)]).unwrap();
///
/// assert_eq!(table.get("b"), Some(&2));
/// assert_eq!(table.get("z"), None);
/// assert_eq!(table.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PaaPerfectHash<K, V = (), H = MultiplyShiftHasher, E = DefaultEquality> {
    /// Items in construction order
    items: Vec<(K, V)>,

    /// One seed per first-level bucket
    seeds: Vec<u64>,

    /// Item index occupying each slot
    slots: Vec<Option<usize>>,

    hasher: H,
    equal: E,
    config: PaaPerfectHashConfig,
    stats: BuildStats,
}

/// Serializable snapshot of a table's seed and slot arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableLayout {
    /// Size of the slot array (M)
    pub slot_count: usize,
    /// Number of first-level buckets (B)
    pub bucket_count: usize,
    /// Seed per bucket; `u64::MAX` marks an empty bucket
    pub seeds: Vec<u64>,
    /// Item index per slot
    pub slots: Vec<Option<usize>>,
    /// Statistics recorded during construction
    pub stats: BuildStats,
}

impl<K, V> PaaPerfectHash<K, V>
where
    K: Hash + PartialEq,
{
    /// Builds a table with the default hasher, equality and configuration.
    ///
    /// # Errors
    ///
    /// Fails with [`PaaPerfectHashError::DuplicateKey`] if two keys are equal, with
    /// [`PaaPerfectHashError::Unplaceable`] if the seed search runs out of budget and
    /// with [`PaaPerfectHashError::CapacityExceeded`] if the configured table is too
    /// large to allocate.
    pub fn new<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::with_config(items, PaaPerfectHashConfig::default())
    }

    /// Builds a table with the default hasher and equality.
    pub fn with_config<I>(items: I, config: PaaPerfectHashConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::build_with_config(items, MultiplyShiftHasher::new(), DefaultEquality, config)
    }
}

impl<K, V, H, E> PaaPerfectHash<K, V, H, E>
where
    H: SeededHasher<K>,
    E: KeyEquality<K>,
{
    /// Builds a table from `items` with a caller-supplied hash family and equality.
    ///
    /// `equal` must be consistent with `hasher`: keys that compare equal must hash to
    /// the same value under every seed.
    pub fn build<I>(items: I, hasher: H, equal: E) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::build_with_config(items, hasher, equal, PaaPerfectHashConfig::default())
    }

    /// Builds a table with every parameter explicit.
    ///
    /// Construction runs to completion or fails as a whole; a failed build never
    /// exposes partially assigned seeds or slots.
    pub fn build_with_config<I>(
        items: I,
        hasher: H,
        equal: E,
        config: PaaPerfectHashConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let items: Vec<(K, V)> = items.into_iter().collect();
        let slot_count = config.slot_count_for(items.len());
        let bucket_count = config.bucket_count_for(items.len(), slot_count);

        let buckets = planner::plan(items.iter().map(|(key, _)| key), &hasher, bucket_count)?;

        if let Some((first, second)) = planner::find_duplicate(&items, &buckets, &equal) {
            warn!(first, second, "Rejected duplicate key");
            return Err(PaaPerfectHashError::DuplicateKey { first, second });
        }

        let order = planner::placement_order(&buckets, config.get_bucket_sort());
        let placement = solver::solve(
            &items,
            &buckets,
            &order,
            &hasher,
            slot_count,
            config.get_max_seed_attempts(),
        )?;

        debug!(
            items = items.len(),
            slots = slot_count,
            buckets = bucket_count,
            largest_bucket = placement.stats.largest_bucket,
            total_attempts = placement.stats.total_attempts,
            max_bucket_attempts = placement.stats.max_bucket_attempts,
            "Built perfect hash table"
        );

        Ok(Self {
            items,
            seeds: placement.seeds,
            slots: placement.slots,
            hasher,
            equal,
            config,
            stats: placement.stats,
        })
    }
}

impl<K, V, H, E> PaaPerfectHash<K, V, H, E> {
    /// Looks up the item stored under `key`.
    ///
    /// Returns `None` for keys outside the original item set. The candidate item is
    /// always compared against `key`, so unknown keys never produce a false match.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&(K, V)>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: SeededHasher<Q>,
        E: KeyEquality<Q>,
    {
        let index = self.candidate(key)?;
        let item = &self.items[index];
        self.equal.equal(item.0.borrow(), key).then_some(item)
    }

    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: SeededHasher<Q>,
        E: KeyEquality<Q>,
    {
        self.lookup(key).map(|(_, value)| value)
    }

    /// Returns `true` if `key` is in the table.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: SeededHasher<Q>,
        E: KeyEquality<Q>,
    {
        self.lookup(key).is_some()
    }

    /// Returns the slot holding `key`, if `key` is in the table.
    pub fn slot_of<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        H: SeededHasher<Q>,
        E: KeyEquality<Q>,
    {
        let slot = self.slot_for(key)?;
        let index = self.slots[slot]?;
        self.equal
            .equal(self.items[index].0.borrow(), key)
            .then_some(slot)
    }

    /// Slot that `key` maps to, or `None` when its bucket is empty.
    fn slot_for<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        H: SeededHasher<Q>,
    {
        if self.seeds.is_empty() {
            return None;
        }

        let bucket = reduce(self.hasher.hash(key, 0), self.seeds.len());
        let seed = self.seeds[bucket];
        if seed == EMPTY_BUCKET_SEED {
            return None;
        }
        Some(reduce(self.hasher.hash(key, seed), self.slots.len()))
    }

    fn candidate<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        H: SeededHasher<Q>,
    {
        self.slot_for(key).and_then(|slot| self.slots[slot])
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the table holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in construction order.
    pub fn items(&self) -> &[(K, V)] {
        &self.items
    }

    /// Returns the size of the slot array (M).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of first-level buckets (B).
    pub fn bucket_count(&self) -> usize {
        self.seeds.len()
    }

    /// Returns the per-bucket seeds.
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// Returns the item index stored in each slot.
    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    /// Returns the statistics recorded during construction.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Returns the configuration the table was built with.
    pub fn config(&self) -> &PaaPerfectHashConfig {
        &self.config
    }

    /// Returns the seeded hash family.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns a serializable snapshot of the seed and slot arrays.
    pub fn layout(&self) -> TableLayout {
        TableLayout {
            slot_count: self.slot_count(),
            bucket_count: self.bucket_count(),
            seeds: self.seeds.clone(),
            slots: self.slots.clone(),
            stats: self.stats.clone(),
        }
    }
}
