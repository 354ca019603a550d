//! Test modules for the Paa toolkit.
//!
//! Unit tests live next to each component; this module holds the crate-level
//! suites for configuration loading and error reporting, plus shared fixtures.


pub use test_utils::{create_test_dir, key_strategy, TestFixture};
