// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Deterministic sort and search primitives.
//!
//! Every routine here takes an explicit "less than" relation instead of relying on
//! `Ord`, so the perfect-hash builder can order buckets by a composite key
//! (population descending, bucket index ascending) and get byte-identical tables on
//! every run.
//!
//! # Comparators
//!
//! A comparator is any `FnMut(&T, &T) -> bool` returning `true` when the first
//! argument is ordered strictly before the second. Comparators must be irreflexive and
//! transitive. An inconsistent comparator produces an unspecified order but never
//! panics or reads out of bounds.
//!
//! # Example
//!
//! ```
//! use paa_phf_lib::algorithms::{lower_bound, merge_sort, partition_sort};
//!
//! let mut populations = vec![(1, 0), (3, 1), (0, 2), (3, 3)];
//! // Largest population first, ties broken by index.
//! partition_sort(&mut populations, |a, b| a.0 > b.0 || (a.0 == b.0 && a.1 < b.1));
//! assert_eq!(populations, vec![(3, 1), (3, 3), (1, 0), (0, 2)]);
//!
//! let mut values = vec![5, 1, 4, 1, 3];
//! merge_sort(&mut values, |a, b| a < b);
//! assert_eq!(values, vec![1, 1, 3, 4, 5]);
//! assert_eq!(lower_bound(&values, &3, |a, b| a < b), 2);
//! ```

mod merge_sort;
mod partition_sort;
mod search;

pub use merge_sort::merge_sort;
pub use partition_sort::partition_sort;
pub use search::{binary_search, is_sorted_by, lower_bound, lower_bound_array};
