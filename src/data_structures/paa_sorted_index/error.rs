// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Paa sorted index.

/// Errors that can occur while building a sorted index.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PaaSortedIndexError {
    /// Two input items have equal keys.
    #[error("Duplicate key: items {first} and {second} are equal")]
    DuplicateKey {
        /// Construction-order index of the first item.
        first: usize,
        /// Construction-order index of the later item.
        second: usize,
    },
}

/// Result type for Paa sorted index operations
pub type Result<T> = std::result::Result<T, PaaSortedIndexError>;
