//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last recorded millisecond and sequence, guarded by one lock
//! - `wait` - Busy-wait for the next millisecond on sequence exhaustion
//! - `generate` - ID generation logic

mod generate;
mod state;
mod wait;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::SnowflakeConfig;
use crate::error::SnowflakeError;
use crate::extractor::time;
use crate::layout::{compose, MAX_TIMESTAMP};

use state::State;

/// Value returned by [`Snowflake::next`] when the clock moved backwards.
/// Never a valid id: generated ids are always non-negative.
pub const INVALID_ID: i64 = -1;

/// Snowflake id generator
///
/// Every call to [`Snowflake::try_next`] holds the state lock for the clock
/// read, the state update and the encoding, so calls on one instance are
/// serialized and ids come out strictly increasing.
#[derive(Debug)]
pub struct Snowflake<C: Clock = SystemClock> {
    pub(crate) state: Mutex<State>,
    pub(crate) clock: C,
    config: SnowflakeConfig,
}

impl Snowflake<SystemClock> {
    /// Create a generator reading the system clock
    pub fn new(config: SnowflakeConfig) -> Result<Self, SnowflakeError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Snowflake<C> {
    /// Create a generator reading the given clock
    pub fn with_clock(config: SnowflakeConfig, clock: C) -> Result<Self, SnowflakeError> {
        if let Err(err) = Self::validate(&config, &clock) {
            warn!(error = %err, "rejected snowflake configuration");
            return Err(err);
        }
        Ok(Self::build(config, clock))
    }

    fn validate(config: &SnowflakeConfig, clock: &C) -> Result<(), SnowflakeError> {
        config.validate_identity()?;
        let now_ms = clock.now_millis();
        let in_range = now_ms
            .checked_sub(config.epoch())
            .is_some_and(|delta| (0..=MAX_TIMESTAMP).contains(&delta));
        if !in_range {
            return Err(SnowflakeError::EpochOutOfRange {
                epoch_ms: config.epoch(),
                now_ms,
            });
        }
        Ok(())
    }

    /// Build without validation; callers guarantee `config` is in range
    pub(crate) fn build(config: SnowflakeConfig, clock: C) -> Self {
        debug!(
            data_center = config.data_center(),
            worker = config.worker(),
            epoch_ms = config.epoch(),
            "snowflake generator created"
        );
        Self {
            state: Mutex::new(State::default()),
            clock,
            config,
        }
    }

    #[inline(always)]
    pub fn data_center(&self) -> i64 {
        self.config.data_center()
    }

    #[inline(always)]
    pub fn worker(&self) -> i64 {
        self.config.worker()
    }

    /// Epoch offset in milliseconds since the Unix epoch
    #[inline(always)]
    pub fn epoch_millis(&self) -> i64 {
        self.config.epoch()
    }

    pub fn config(&self) -> &SnowflakeConfig {
        &self.config
    }

    /// Wall-clock time encoded in `id`, with this generator's epoch added back
    pub fn datetime(&self, id: i64) -> Option<DateTime<Utc>> {
        let millis = time(id).checked_add(self.config.epoch())?;
        DateTime::from_timestamp_millis(millis)
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, millis: i64, sequence: i64) -> i64 {
        compose(
            millis - self.config.epoch(),
            self.config.data_center(),
            self.config.worker(),
            sequence,
        )
    }
}
