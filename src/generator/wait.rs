//! Wait strategy for sequence exhaustion
//!
//! Polls the clock in a tight loop until it passes the exhausted millisecond.
//! Never sleeps.

use std::thread;

use crate::clock::Clock;

/// Spin until `clock` reports a millisecond later than `from_millis`
///
/// With `yield_every > 0` the thread yields every `yield_every` polls.
#[inline]
pub(crate) fn spin_until_after<C: Clock>(from_millis: i64, clock: &C, yield_every: u32) -> i64 {
    let mut polls: u32 = 0;
    loop {
        let now = clock.now_millis();
        if now > from_millis {
            return now;
        }

        std::hint::spin_loop();

        polls = polls.wrapping_add(1);
        if yield_every != 0 && polls % yield_every == 0 {
            thread::yield_now();
        }
    }
}
