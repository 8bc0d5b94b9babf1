//! Shared test utilities for Snowflake tests

use std::collections::HashSet;

use crate::clock::manual::ManualClock;
use crate::{Snowflake, SnowflakeConfig};

/// 2024-01-01T00:00:00Z
pub const TEST_NOW_MS: i64 = 1704067200000;

/// Generator on a hand-driven clock parked at [`TEST_NOW_MS`]
pub fn manual_generator(data_center: i64, worker: i64) -> (Snowflake<ManualClock>, ManualClock) {
    let clock = ManualClock::new(TEST_NOW_MS);
    let config = SnowflakeConfig::builder()
        .data_center(data_center)
        .worker(worker)
        .build();
    let generator = Snowflake::with_clock(config, clock.clone()).unwrap();
    (generator, clock)
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[i64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in the order given
pub fn assert_strictly_increasing(ids: &[i64]) {
    for i in 1..ids.len() {
        assert!(
            ids[i] > ids[i - 1],
            "ID at position {} ({}) is not greater than previous ID ({})",
            i,
            ids[i],
            ids[i - 1]
        );
    }
}
