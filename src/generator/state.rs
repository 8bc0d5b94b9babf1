//! Mutable generation state
//!
//! Only touched while the generator's lock is held.

use crate::layout::MAX_SEQUENCE;

/// Last recorded millisecond (Unix time) and the sequence issued in it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) last_millis: i64,
    pub(crate) sequence: i64,
}

impl State {
    /// Bump the sequence within the current millisecond.
    ///
    /// Returns `false` when the counter wrapped back to 0.
    #[inline(always)]
    pub(crate) fn increment_sequence(&mut self) -> bool {
        self.sequence = (self.sequence + 1) & MAX_SEQUENCE;
        self.sequence != 0
    }
}
