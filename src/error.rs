use thiserror::Error;

/// Represents errors that can occur during Snowflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Data center id is outside its bit-field range
    #[error("Data center {value} is invalid. Allowed range is [0, {max}]")]
    InvalidDataCenter { value: i64, max: i64 },
    /// Worker id is outside its bit-field range
    #[error("Worker {value} is invalid. Allowed range is [0, {max}]")]
    InvalidWorker { value: i64, max: i64 },
    /// Epoch offset lies ahead of the generator clock, or so far behind it
    /// that the timestamp field cannot hold the delta
    #[error("Epoch {epoch_ms} is out of range for the current time {now_ms}")]
    EpochOutOfRange { epoch_ms: i64, now_ms: i64 },
    /// Error when clock moves backwards (system time issue)
    #[error("Clock moved backwards. Refusing to generate id for {delta} milliseconds")]
    ClockMovedBackwards { delta: i64 },
}

impl SnowflakeError {
    /// Name of the configuration field that was rejected, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SnowflakeError::InvalidDataCenter { .. } => Some("data_center"),
            SnowflakeError::InvalidWorker { .. } => Some("worker"),
            SnowflakeError::EpochOutOfRange { .. } => Some("epoch"),
            SnowflakeError::ClockMovedBackwards { .. } => None,
        }
    }

    /// True for errors raised while constructing a generator
    pub fn is_configuration(&self) -> bool {
        self.field().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let invalid_dc = SnowflakeError::InvalidDataCenter { value: 32, max: 31 };
        assert_eq!(
            invalid_dc.to_string(),
            "Data center 32 is invalid. Allowed range is [0, 31]"
        );

        let invalid_worker = SnowflakeError::InvalidWorker { value: -1, max: 31 };
        assert_eq!(
            invalid_worker.to_string(),
            "Worker -1 is invalid. Allowed range is [0, 31]"
        );

        let clock_backwards = SnowflakeError::ClockMovedBackwards { delta: 100 };
        assert_eq!(
            clock_backwards.to_string(),
            "Clock moved backwards. Refusing to generate id for 100 milliseconds"
        );
    }

    #[test]
    fn test_epoch_error_display() {
        let err = SnowflakeError::EpochOutOfRange {
            epoch_ms: 10,
            now_ms: 5,
        };
        assert_eq!(
            err.to_string(),
            "Epoch 10 is out of range for the current time 5"
        );
    }

    #[test]
    fn test_error_field() {
        assert_eq!(
            SnowflakeError::InvalidDataCenter { value: 40, max: 31 }.field(),
            Some("data_center")
        );
        assert_eq!(
            SnowflakeError::InvalidWorker { value: 40, max: 31 }.field(),
            Some("worker")
        );
        assert_eq!(
            SnowflakeError::EpochOutOfRange { epoch_ms: 2, now_ms: 1 }.field(),
            Some("epoch")
        );
        assert_eq!(SnowflakeError::ClockMovedBackwards { delta: 1 }.field(), None);
    }

    #[test]
    fn test_error_category() {
        assert!(SnowflakeError::InvalidWorker { value: 99, max: 31 }.is_configuration());
        assert!(!SnowflakeError::ClockMovedBackwards { delta: 5 }.is_configuration());
    }

    #[test]
    fn test_error_clone() {
        let original = SnowflakeError::InvalidDataCenter { value: 64, max: 31 };
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }
}
