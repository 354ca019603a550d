// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Paa Sorted Index: an ordered, immutable key/value lookup.
//!
//! Where a perfect hash table answers membership in constant time, a sorted index
//! answers it in `O(log n)` with no hashing at all and keeps its entries in key
//! order. Entries are ordered once with a stable merge sort and searched with a
//! lower-bound halving loop.
//!
//! # Example
//!
//! ```
//! use paa_phf_lib::data_structures::paa_sorted_index::PaaSortedIndex;
//!
//! let index = PaaSortedIndex::new(vec![(30, "c"), (10, "a"), (20, "b")]).unwrap();
//!
//! assert_eq!(index.get(&20), Some(&"b"));
//! assert_eq!(index.get(&25), None);
//! assert_eq!(index.as_slice()[0], (10, "a"));
//! ```

mod error;

pub use error::{PaaSortedIndexError, Result};

use std::borrow::Borrow;

use tracing::debug;

use crate::algorithms::{lower_bound, merge_sort};

/// An immutable set of key/value pairs kept in ascending key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaaSortedIndex<K, V = ()> {
    entries: Vec<(K, V)>,
}

impl<K: Ord, V> PaaSortedIndex<K, V> {
    /// Builds an index from `items`.
    ///
    /// # Errors
    ///
    /// Returns [`PaaSortedIndexError::DuplicateKey`] if two keys are equal, naming the
    /// pair by construction order.
    pub fn new<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let items: Vec<(K, V)> = items.into_iter().collect();

        // Sort a permutation so keys and values never need to be cloned.
        let mut order: Vec<usize> = (0..items.len()).collect();
        merge_sort(&mut order, |&a, &b| items[a].0 < items[b].0);

        if let Some(pair) = order.windows(2).find(|w| items[w[0]].0 == items[w[1]].0) {
            // The sort is stable, so the earlier item comes first.
            return Err(PaaSortedIndexError::DuplicateKey {
                first: pair[0],
                second: pair[1],
            });
        }

        let mut slots: Vec<Option<(K, V)>> = items.into_iter().map(Some).collect();
        let entries: Vec<(K, V)> = order
            .iter()
            .filter_map(|&index| slots[index].take())
            .collect();

        debug!(entries = entries.len(), "Built sorted index");
        Ok(Self { entries })
    }

    /// Looks up the entry stored under `key`.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&(K, V)>
    where
        Q: Ord + ?Sized,
        K: Borrow<Q>,
    {
        let position = lower_bound(&self.entries, key, |(k, _), q| Borrow::<Q>::borrow(k) < q);
        self.entries
            .get(position)
            .filter(|(k, _)| Borrow::<Q>::borrow(k) == key)
    }

    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Ord + ?Sized,
        K: Borrow<Q>,
    {
        self.lookup(key).map(|(_, value)| value)
    }

    /// Returns `true` if `key` is in the index.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Ord + ?Sized,
        K: Borrow<Q>,
    {
        self.lookup(key).is_some()
    }
}

impl<K, V> PaaSortedIndex<K, V> {
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in ascending key order.
    pub fn as_slice(&self) -> &[(K, V)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::is_sorted_by;
    use proptest::prelude::*;

    #[test]
    fn test_lookup() {
        let index = PaaSortedIndex::new(vec![
            ("pear".to_string(), 3),
            ("apple".to_string(), 1),
            ("fig".to_string(), 2),
        ])
        .unwrap();

        assert_eq!(index.get("apple"), Some(&1));
        assert_eq!(index.get("fig"), Some(&2));
        assert_eq!(index.lookup("pear"), Some(&("pear".to_string(), 3)));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_absent_keys() {
        let index = PaaSortedIndex::new([(10, ()), (20, ()), (30, ())]).unwrap();

        assert!(!index.contains_key(&5));
        assert!(!index.contains_key(&15));
        assert!(!index.contains_key(&35));
        assert!(index.contains_key(&30));
    }

    #[test]
    fn test_empty_index() {
        let index = PaaSortedIndex::<u32>::new(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.get(&1), None);
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = PaaSortedIndex::new([(7, 'a'), (3, 'b'), (7, 'c')]).unwrap_err();
        assert_eq!(err, PaaSortedIndexError::DuplicateKey { first: 0, second: 2 });
        assert_eq!(err.to_string(), "Duplicate key: items 0 and 2 are equal");
    }

    proptest! {
        #[test]
        fn prop_entries_sorted_and_found(keys in prop::collection::hash_set(any::<i64>(), 0..300)) {
            let index = PaaSortedIndex::new(keys.iter().map(|&k| (k, k.wrapping_mul(3)))).unwrap();

            prop_assert!(is_sorted_by(index.as_slice(), |a, b| a.0 < b.0));
            for key in &keys {
                prop_assert_eq!(index.get(key), Some(&key.wrapping_mul(3)));
            }
        }
    }
}
