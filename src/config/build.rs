//! Table build configuration module.
//!
//! This module maps the `[build]` section of the configuration file onto
//! [`PaaPerfectHashConfig`] for tables built by the command-line tool.

use super::{ConfigResult, Validate};
use crate::data_structures::paa_perfect_hash::{
    BucketSort, PaaPerfectHashConfig, DEFAULT_MAX_SEED_ATTEMPTS, DEFAULT_SMALL_TABLE_THRESHOLD,
    EMPTY_BUCKET_SEED, MAX_SLOT_COUNT,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Table build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Seeds tried per bucket before construction fails
    pub max_seed_attempts: u64,

    /// Item count below which the slot array is doubled
    pub small_table_threshold: usize,

    /// Number of first-level buckets (None for one per slot)
    pub bucket_count: Option<usize>,

    /// Minimum slot array size
    pub min_slot_count: usize,

    /// Sort used to order buckets for placement
    pub bucket_sort: BucketSort,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
            small_table_threshold: DEFAULT_SMALL_TABLE_THRESHOLD,
            bucket_count: None,
            min_slot_count: 0,
            bucket_sort: BucketSort::default(),
        }
    }
}

impl BuildConfig {
    /// Converts this section into a table configuration.
    pub fn to_table_config(&self) -> PaaPerfectHashConfig {
        let config = PaaPerfectHashConfig::new()
            .with_max_seed_attempts(self.max_seed_attempts)
            .with_small_table_threshold(self.small_table_threshold)
            .with_min_slot_count(self.min_slot_count)
            .with_bucket_sort(self.bucket_sort);

        match self.bucket_count {
            Some(bucket_count) => config.with_bucket_count(bucket_count),
            None => config,
        }
    }
}

impl Validate for BuildConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_seed_attempts == 0 || self.max_seed_attempts >= EMPTY_BUCKET_SEED {
            return Err(ConfigError::ValueOutOfRange {
                key: "build.max_seed_attempts".to_string(),
                message: format!("must be between 1 and {}", EMPTY_BUCKET_SEED - 1),
            });
        }

        if self.bucket_count == Some(0) {
            return Err(ConfigError::ValidationError(
                "build.bucket_count must be greater than 0".to_string(),
            ));
        }

        if self.min_slot_count > MAX_SLOT_COUNT {
            return Err(ConfigError::ValueOutOfRange {
                key: "build.min_slot_count".to_string(),
                message: format!("must be at most {MAX_SLOT_COUNT}"),
            });
        }

        Ok(())
    }
}
