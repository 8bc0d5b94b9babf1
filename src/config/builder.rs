//! SnowflakeConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::SnowflakeConfig;

/// Default configuration values
pub(super) const DEFAULT_DATA_CENTER: i64 = 0;
pub(super) const DEFAULT_WORKER: i64 = 0;
pub(super) const DEFAULT_EPOCH_MS: i64 = 0; // Unix epoch, no offset
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 0;

/// Builder for SnowflakeConfig
///
/// Setters never fail; ranges are checked when the generator is constructed.
#[derive(Debug, Clone, Copy)]
pub struct SnowflakeConfigBuilder {
    pub(super) data_center: i64,
    pub(super) worker: i64,
    pub(super) epoch_ms: i64,
    pub(super) spin_yield_every: u32,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            data_center: DEFAULT_DATA_CENTER,
            worker: DEFAULT_WORKER,
            epoch_ms: DEFAULT_EPOCH_MS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set the data center id (0-31)
    pub const fn data_center(mut self, data_center: i64) -> Self {
        self.data_center = data_center;
        self
    }

    /// Set the worker id (0-31)
    pub const fn worker(mut self, worker: i64) -> Self {
        self.worker = worker;
        self
    }

    /// Alias of [`worker`](Self::worker)
    pub const fn machine(self, machine: i64) -> Self {
        self.worker(machine)
    }

    /// Set the epoch offset from an absolute reference time.
    ///
    /// The zero value (`DateTime::UNIX_EPOCH`) keeps the offset at 0, so ids
    /// carry raw Unix milliseconds.
    pub fn epoch(mut self, reference: DateTime<Utc>) -> Self {
        if reference != DateTime::<Utc>::UNIX_EPOCH {
            self.epoch_ms = reference.timestamp_millis();
        }
        self
    }

    /// Set the epoch offset in milliseconds since the Unix epoch
    pub const fn epoch_millis(mut self, epoch_ms: i64) -> Self {
        self.epoch_ms = epoch_ms;
        self
    }

    /// Yield the thread every N polls while waiting out an exhausted sequence.
    /// 0 keeps a pure spin.
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final SnowflakeConfig
    pub const fn build(self) -> SnowflakeConfig {
        SnowflakeConfig::from_builder(self)
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
