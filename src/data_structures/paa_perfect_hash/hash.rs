// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Seeded hashing and key equality for the Paa perfect hash table.
//!
//! The table needs a family of hash functions indexed by a 64-bit seed: seed `0`
//! assigns keys to buckets, and each bucket then searches for the seed that scatters
//! its keys into free slots. [`MultiplyShiftHasher`] derives that family from any
//! ordinary [`BuildHasher`] (FNV by default) with a single multiply per evaluation.

use std::hash::{BuildHasher, Hash};

use fnv::FnvBuildHasher;

/// Seed value recorded for buckets that received no items.
///
/// Never produced by seed search, which stops strictly below it.
pub const EMPTY_BUCKET_SEED: u64 = u64::MAX;

/// A hash function family indexed by a 64-bit seed.
///
/// Implementations must be pure: the same key and seed always give the same value.
/// Changing the seed should change the low-order bits of the output with high
/// probability, since slots are chosen by reducing the output modulo the table size.
pub trait SeededHasher<K: ?Sized> {
    /// Hashes `key` under `seed`.
    fn hash(&self, key: &K, seed: u64) -> u64;
}

/// Key equality relation used to confirm lookups and reject duplicate keys.
pub trait KeyEquality<K: ?Sized> {
    /// Returns `true` if `a` and `b` identify the same item.
    fn equal(&self, a: &K, b: &K) -> bool;
}

/// Equality through the key type's [`PartialEq`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEquality;

impl<K: PartialEq + ?Sized> KeyEquality<K> for DefaultEquality {
    #[inline]
    fn equal(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

/// Multiply-and-fold seeded hasher over a seed-independent base hash.
///
/// The key is hashed once with the wrapped [`BuildHasher`]; the result is multiplied
/// by an odd multiplier derived from the seed, and the high half of the product is
/// folded into the low half so that reducing modulo a power of two still sees the
/// well-mixed upper bits.
#[derive(Debug, Clone, Default)]
pub struct MultiplyShiftHasher<S = FnvBuildHasher> {
    build_hasher: S,
}

impl MultiplyShiftHasher {
    /// Creates a hasher over FNV-1a.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> MultiplyShiftHasher<S> {
    /// Creates a hasher over a custom base hash.
    pub fn with_build_hasher(build_hasher: S) -> Self {
        Self { build_hasher }
    }

    /// Returns the base hash builder.
    pub fn build_hasher(&self) -> &S {
        &self.build_hasher
    }
}

impl<K, S> SeededHasher<K> for MultiplyShiftHasher<S>
where
    K: Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn hash(&self, key: &K, seed: u64) -> u64 {
        let base = self.build_hasher.hash_one(key);
        let product = base.wrapping_mul(seed_multiplier(seed));
        product ^ (product >> 32)
    }
}

/// Maps a seed to an odd 64-bit multiplier (splitmix64 finalizer).
///
/// Consecutive seeds give unrelated multipliers, and forcing the low bit keeps the
/// multiply a bijection so seed `0` is as usable as any other.
#[inline]
fn seed_multiplier(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    (z ^ (z >> 31)) | 1
}

/// Reduces a hash value into `0..range`.
///
/// `range` must be non-zero.
#[inline]
pub(crate) fn reduce(hash: u64, range: usize) -> usize {
    (hash % range as u64) as usize
}
