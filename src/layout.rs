//! Bit layout shared by the generator and the decode helpers
//!
//! Fields are packed most-significant-first below the sign bit:
//! `timestamp | data center | worker | sequence`.

/// Width of the millisecond timestamp delta
pub const TIMESTAMP_BITS: u32 = 41;
/// Width of the data center id
pub const DATA_CENTER_BITS: u32 = 5;
/// Width of the worker (machine) id
pub const WORKER_BITS: u32 = 5;
/// Width of the per-millisecond sequence counter
pub const SEQUENCE_BITS: u32 = 12;

const _: () = assert!(TIMESTAMP_BITS + DATA_CENTER_BITS + WORKER_BITS + SEQUENCE_BITS == 63);

pub const MAX_TIMESTAMP: i64 = mask(TIMESTAMP_BITS);
pub const MAX_DATA_CENTER: i64 = mask(DATA_CENTER_BITS);
pub const MAX_WORKER: i64 = mask(WORKER_BITS);
pub const MAX_SEQUENCE: i64 = mask(SEQUENCE_BITS);

pub const WORKER_SHIFT: u32 = SEQUENCE_BITS;
pub const DATA_CENTER_SHIFT: u32 = WORKER_BITS + SEQUENCE_BITS;
pub const TIMESTAMP_SHIFT: u32 = DATA_CENTER_BITS + WORKER_BITS + SEQUENCE_BITS;

pub const DATA_CENTER_MASK: i64 = MAX_DATA_CENTER << DATA_CENTER_SHIFT;
pub const WORKER_MASK: i64 = MAX_WORKER << WORKER_SHIFT;
pub const SEQUENCE_MASK: i64 = MAX_SEQUENCE;

/// Calculate mask for given number of bits
#[inline(always)]
const fn mask(bits: u32) -> i64 {
    (1i64 << bits) - 1
}

/// Pack the four fields into an identifier.
///
/// The timestamp is the delta from the generator's epoch and is not masked;
/// the remaining fields are truncated to their widths.
#[inline(always)]
pub const fn compose(timestamp: i64, data_center: i64, worker: i64, sequence: i64) -> i64 {
    (timestamp << TIMESTAMP_SHIFT)
        | ((data_center & MAX_DATA_CENTER) << DATA_CENTER_SHIFT)
        | ((worker & MAX_WORKER) << WORKER_SHIFT)
        | (sequence & MAX_SEQUENCE)
}
