// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for building a Paa perfect hash table.

/// Errors that can occur while building a perfect hash table.
///
/// Lookups never fail; every variant is a construction-time error and no partially
/// built table is ever returned alongside one.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PaaPerfectHashError {
    /// Two input items have keys that compare equal.
    #[error("Duplicate key: items {first} and {second} compare equal")]
    DuplicateKey {
        /// Construction-order index of the first item.
        first: usize,
        /// Construction-order index of the later item with the same key.
        second: usize,
    },

    /// No seed within the retry budget placed a bucket into free, distinct slots.
    ///
    /// The table cannot be repaired in place; rebuild with more slots.
    #[error(
        "Bucket {bucket} with {population} items could not be placed after {attempts} seed attempts"
    )]
    Unplaceable {
        /// Index of the bucket that failed.
        bucket: usize,
        /// Number of items in the bucket.
        population: usize,
        /// Number of seeds tried.
        attempts: u64,
    },

    /// The seed, bucket or slot arrays could not be allocated.
    #[error("Could not allocate table arrays of {requested} entries")]
    CapacityExceeded {
        /// Number of entries requested.
        requested: usize,
    },
}

/// Result type for Paa perfect hash operations
pub type Result<T> = std::result::Result<T, PaaPerfectHashError>;
