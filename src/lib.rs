//! # snowflake-gen
//!
//! Snowflake identifiers packed into a signed 64-bit integer:
//!
//! ```text
//! | sign | timestamp (41) | data center (5) | worker (5) | sequence (12) |
//! ```
//!
//! - 📈 Time-sorted
//! - 🔄 Strictly monotonic per generator
//! - 🔒 Thread-safe (one lock per generator)
//! - 🌐 Up to 1024 independent nodes, 4096 ids per millisecond each
//!
//! ```
//! use snowflake_gen::{data_center, worker, Snowflake, SnowflakeConfig};
//!
//! let config = SnowflakeConfig::builder().data_center(3).worker(7).build();
//! let generator = Snowflake::new(config).unwrap();
//!
//! let id = generator.next();
//! assert_eq!(data_center(id), 3);
//! assert_eq!(worker(id), 7);
//! ```

#![forbid(unsafe_code)]

pub mod clock;
mod config;
mod error;
mod extractor;
mod generator;
mod global;
pub mod layout;

#[cfg(test)]
pub mod tests;

pub use clock::{Clock, SystemClock};
pub use config::{SnowflakeConfig, SnowflakeConfigBuilder};
pub use error::SnowflakeError;
pub use extractor::{data_center, decompose, machine, sequence, time, worker, SnowflakeParts};
pub use generator::{Snowflake, INVALID_ID};
pub use global::{default_generator, init, next, next_string, try_next, LazySnowflake};
