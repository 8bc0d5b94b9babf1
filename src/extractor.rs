//! Decode helpers for Snowflake identifiers
//!
//! Pure bit arithmetic; results are meaningless for ids built with a
//! different layout.

use crate::layout::{
    compose, DATA_CENTER_MASK, DATA_CENTER_SHIFT, SEQUENCE_MASK, TIMESTAMP_SHIFT, WORKER_MASK,
    WORKER_SHIFT,
};

/// Extract the millisecond delta from the generator's epoch
#[inline(always)]
pub const fn time(id: i64) -> i64 {
    id >> TIMESTAMP_SHIFT
}

/// Extract data center component from a Snowflake id
#[inline(always)]
pub const fn data_center(id: i64) -> i64 {
    (id & DATA_CENTER_MASK) >> DATA_CENTER_SHIFT
}

/// Extract worker component from a Snowflake id
#[inline(always)]
pub const fn worker(id: i64) -> i64 {
    (id & WORKER_MASK) >> WORKER_SHIFT
}

/// Alias of [`worker`]
#[inline(always)]
pub const fn machine(id: i64) -> i64 {
    worker(id)
}

/// Extract sequence component from a Snowflake id
#[inline(always)]
pub const fn sequence(id: i64) -> i64 {
    id & SEQUENCE_MASK
}

/// Decompose a Snowflake id into all of its components in one pass
#[inline]
pub const fn decompose(id: i64) -> SnowflakeParts {
    SnowflakeParts {
        timestamp: time(id),
        data_center: data_center(id),
        worker: worker(id),
        sequence: sequence(id),
    }
}

/// Decoded fields of a Snowflake id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnowflakeParts {
    /// Milliseconds since the generator's epoch
    pub timestamp: i64,
    pub data_center: i64,
    pub worker: i64,
    pub sequence: i64,
}

impl SnowflakeParts {
    /// Re-encode the parts into an id
    #[inline]
    pub const fn to_id(self) -> i64 {
        compose(self.timestamp, self.data_center, self.worker, self.sequence)
    }
}

impl From<i64> for SnowflakeParts {
    fn from(id: i64) -> Self {
        decompose(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{MAX_DATA_CENTER, MAX_SEQUENCE, MAX_TIMESTAMP, MAX_WORKER};

    fn create_snowflake(timestamp: i64, dc: i64, worker: i64, sequence: i64) -> i64 {
        (timestamp << 22) | (dc << 17) | (worker << 12) | sequence
    }

    #[test]
    fn test_decompose() {
        let timestamp: i64 = 0x1234567;
        let dc: i64 = 17;
        let wk: i64 = 9;
        let seq: i64 = 123;

        let id = create_snowflake(timestamp, dc, wk, seq);

        assert_eq!(time(id), timestamp);
        assert_eq!(data_center(id), dc);
        assert_eq!(worker(id), wk);
        assert_eq!(machine(id), wk);
        assert_eq!(sequence(id), seq);

        let parts = decompose(id);
        assert_eq!(
            parts,
            SnowflakeParts {
                timestamp,
                data_center: dc,
                worker: wk,
                sequence: seq,
            }
        );
        assert_eq!(parts.to_id(), id);
    }

    #[test]
    fn test_component_boundaries() {
        let id = create_snowflake(MAX_TIMESTAMP, MAX_DATA_CENTER, MAX_WORKER, MAX_SEQUENCE);

        assert_eq!(time(id), MAX_TIMESTAMP);
        assert_eq!(data_center(id), MAX_DATA_CENTER);
        assert_eq!(worker(id), MAX_WORKER);
        assert_eq!(sequence(id), MAX_SEQUENCE);
    }

    #[test]
    fn test_zero_id() {
        assert_eq!(SnowflakeParts::from(0), decompose(0));
        assert_eq!(decompose(0).to_id(), 0);
        assert_eq!(time(0), 0);
    }
}
