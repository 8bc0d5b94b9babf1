//! Process-wide default generator
//!
//! The first successful [`LazySnowflake::init`] or the first use, whichever
//! comes first, fixes the generator for the lifetime of the cell. Later
//! configuration attempts are ignored.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::config::SnowflakeConfig;
use crate::error::SnowflakeError;
use crate::generator::Snowflake;

/// A generator built at most once, on explicit init or on first use
#[derive(Debug, Default)]
pub struct LazySnowflake {
    cell: OnceCell<Snowflake>,
}

impl LazySnowflake {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Configure the generator before first use.
    ///
    /// Returns `Ok(())` without validating anything if the generator already
    /// exists. On a configuration error the cell stays empty, so `init` can be
    /// retried.
    pub fn init(&self, config: SnowflakeConfig) -> Result<(), SnowflakeError> {
        let mut created = false;
        self.cell.get_or_try_init(|| {
            created = true;
            Snowflake::new(config)
        })?;
        if !created {
            debug!("snowflake generator already initialized, ignoring init");
        }
        Ok(())
    }

    /// The generator, built from the default configuration if nobody called
    /// [`init`](Self::init) first
    pub fn get(&self) -> &Snowflake {
        self.cell
            .get_or_init(|| Snowflake::build(SnowflakeConfig::default(), Default::default()))
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    #[inline]
    pub fn next(&self) -> i64 {
        self.get().next()
    }

    #[inline]
    pub fn try_next(&self) -> Result<i64, SnowflakeError> {
        self.get().try_next()
    }

    pub fn next_string(&self) -> String {
        self.get().next_string()
    }
}

static DEFAULT: LazySnowflake = LazySnowflake::new();

/// Configure the process-wide generator; see [`LazySnowflake::init`]
pub fn init(config: SnowflakeConfig) -> Result<(), SnowflakeError> {
    DEFAULT.init(config)
}

/// The process-wide generator
pub fn default_generator() -> &'static Snowflake {
    DEFAULT.get()
}

/// Next id from the process-wide generator, `-1` if the clock moved backwards
pub fn next() -> i64 {
    DEFAULT.next()
}

/// Next id from the process-wide generator
pub fn try_next() -> Result<i64, SnowflakeError> {
    DEFAULT.try_next()
}

/// Decimal rendering of [`next`]
pub fn next_string() -> String {
    DEFAULT.next_string()
}
