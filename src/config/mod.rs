//! Configuration for Snowflake generator

mod builder;

pub use builder::SnowflakeConfigBuilder;
use builder::{DEFAULT_DATA_CENTER, DEFAULT_EPOCH_MS, DEFAULT_SPIN_YIELD_EVERY, DEFAULT_WORKER};

use crate::error::SnowflakeError;
use crate::layout::{MAX_DATA_CENTER, MAX_WORKER};

/// Configuration for Snowflake generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeConfig {
    data_center: i64,
    worker: i64,
    epoch_ms: i64,
    spin_yield_every: u32,
}

impl SnowflakeConfig {
    /// Create config from builder
    pub(crate) const fn from_builder(b: SnowflakeConfigBuilder) -> Self {
        Self {
            data_center: b.data_center,
            worker: b.worker,
            epoch_ms: b.epoch_ms,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create a new configuration builder
    pub const fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    /// Check the identity fields against their bit-field ranges
    pub(crate) fn validate_identity(&self) -> Result<(), SnowflakeError> {
        if !(0..=MAX_DATA_CENTER).contains(&self.data_center) {
            return Err(SnowflakeError::InvalidDataCenter {
                value: self.data_center,
                max: MAX_DATA_CENTER,
            });
        }
        if !(0..=MAX_WORKER).contains(&self.worker) {
            return Err(SnowflakeError::InvalidWorker {
                value: self.worker,
                max: MAX_WORKER,
            });
        }
        Ok(())
    }

    #[inline(always)]
    pub const fn data_center(&self) -> i64 {
        self.data_center
    }

    #[inline(always)]
    pub const fn worker(&self) -> i64 {
        self.worker
    }

    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch_ms
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self {
            data_center: DEFAULT_DATA_CENTER,
            worker: DEFAULT_WORKER,
            epoch_ms: DEFAULT_EPOCH_MS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }
}
