//! Data structures for the Paa toolkit.
//!
//! Both structures are built once from a fixed item set and are read-only
//! afterwards, so they can be shared across threads without synchronization.
//! All implementations avoid unsafe code.

pub mod paa_perfect_hash;
pub mod paa_sorted_index;

// Re-export common data structures
pub use paa_perfect_hash::{PaaPerfectHash, PaaPerfectHashConfig, PaaPerfectHashError};
pub use paa_sorted_index::{PaaSortedIndex, PaaSortedIndexError};
