//! Paa Perfect Hash Library
//!
//! This library contains frozen perfect-hash tables and the supporting pieces
//! around them: deterministic sort and search primitives, a sorted index,
//! configuration loading, and error reporting. The library is used by the
//! `paa_phf` binary, but can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - `algorithms`: comparator-driven sorts and lower-bound search
//! - `data_structures`: the perfect hash table and the sorted index
//! - `config`: file and environment configuration
//! - `error`: application error type and reporting

pub mod algorithms;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod item_file;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Paa toolkit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and publishes `config` as the global
/// configuration.
pub fn init(config: config::PaaConfig) {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter::new()));
    config::init_global_config(config);
}
