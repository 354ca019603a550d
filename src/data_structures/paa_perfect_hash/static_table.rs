// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazily built tables for `static` items.

use once_cell::sync::OnceCell;

use crate::data_structures::paa_perfect_hash::error::Result;
use crate::data_structures::paa_perfect_hash::hash::{DefaultEquality, MultiplyShiftHasher};
use crate::data_structures::paa_perfect_hash::table::PaaPerfectHash;

/// A perfect hash table built on first use and shared for the life of the program.
///
/// Concurrent first callers race to build; exactly one result is stored and every
/// caller observes it. A failed build stores nothing, so a later call may retry.
///
/// # Examples
///
/// ```
/// use paa_phf_lib::data_structures::paa_perfect_hash::{PaaPerfectHash, StaticPerfectHash};
///
/// static KEYWORDS: StaticPerfectHash<&'static str, u8> = StaticPerfectHash::new();
///
/// let table = KEYWORDS
///     .get_or_build(|| PaaPerfectHash::new([("fn", 1), ("let", 2), ("match", 3)]))
///     .unwrap();
/// assert_eq!(table.get("let"), Some(&2));
/// ```
#[derive(Debug)]
pub struct StaticPerfectHash<K, V = (), H = MultiplyShiftHasher, E = DefaultEquality> {
    cell: OnceCell<PaaPerfectHash<K, V, H, E>>,
}

impl<K, V, H, E> StaticPerfectHash<K, V, H, E> {
    /// Creates an unbuilt holder. Usable in `static` items.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the table, building it with `build` if this is the first call.
    pub fn get_or_build<F>(&self, build: F) -> Result<&PaaPerfectHash<K, V, H, E>>
    where
        F: FnOnce() -> Result<PaaPerfectHash<K, V, H, E>>,
    {
        self.cell.get_or_try_init(build)
    }

    /// Returns the table if it has been built.
    pub fn get(&self) -> Option<&PaaPerfectHash<K, V, H, E>> {
        self.cell.get()
    }
}

impl<K, V, H, E> Default for StaticPerfectHash<K, V, H, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::paa_perfect_hash::error::PaaPerfectHashError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_built_once() {
        static TABLE: StaticPerfectHash<u32, u32> = StaticPerfectHash::new();
        static BUILDS: AtomicUsize = AtomicUsize::new(0);

        assert!(TABLE.get().is_none());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let table = TABLE
                        .get_or_build(|| {
                            BUILDS.fetch_add(1, Ordering::SeqCst);
                            PaaPerfectHash::new((0..64u32).map(|i| (i, i * 2)))
                        })
                        .unwrap();
                    assert_eq!(table.get(&10), Some(&20));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
        assert_eq!(TABLE.get().map(|t| t.len()), Some(64));
    }

    #[test]
    fn test_failed_build_can_retry() {
        let holder: StaticPerfectHash<&str, ()> = StaticPerfectHash::default();

        let err = holder
            .get_or_build(|| PaaPerfectHash::new([("dup", ()), ("dup", ())]))
            .unwrap_err();
        assert_eq!(err, PaaPerfectHashError::DuplicateKey { first: 0, second: 1 });
        assert!(holder.get().is_none());

        let table = holder
            .get_or_build(|| PaaPerfectHash::new([("ok", ())]))
            .unwrap();
        assert!(table.contains_key("ok"));
    }
}
