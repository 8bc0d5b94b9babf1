//! ID generation logic

use tracing::{trace, warn};

use super::wait::spin_until_after;
use super::{Snowflake, INVALID_ID};
use crate::clock::Clock;
use crate::error::SnowflakeError;

impl<C: Clock> Snowflake<C> {
    /// Generate a new Snowflake id.
    ///
    /// Fails with [`SnowflakeError::ClockMovedBackwards`] when the clock reads
    /// earlier than the last recorded millisecond. No retry is attempted.
    /// When 4096 ids were already issued in the current millisecond, the call
    /// spins until the clock advances.
    pub fn try_next(&self) -> Result<i64, SnowflakeError> {
        let mut state = self.state.lock();
        let mut now = self.clock.now_millis();

        if now < state.last_millis {
            let delta = state.last_millis - now;
            warn!(delta, "clock moved backwards, refusing to generate id");
            return Err(SnowflakeError::ClockMovedBackwards { delta });
        }

        if now == state.last_millis {
            if !state.increment_sequence() {
                trace!(millis = now, "sequence exhausted, waiting for next millisecond");
                now = spin_until_after(
                    state.last_millis,
                    &self.clock,
                    self.config.spin_yield_every(),
                );
            }
        } else {
            state.sequence = 0;
        }
        state.last_millis = now;

        Ok(self.assemble_id(now, state.sequence))
    }

    /// Generate a new Snowflake id, or [`INVALID_ID`] (`-1`) if the clock
    /// moved backwards
    #[inline]
    pub fn next(&self) -> i64 {
        self.try_next().unwrap_or(INVALID_ID)
    }

    /// Decimal rendering of [`next`](Self::next); `"-1"` on failure
    pub fn next_string(&self) -> String {
        self.next().to_string()
    }
}
