//! Error types for ROWGRID operations

use thiserror::Error;

/// Row record errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Record allocation failed for {len} elements")]
    Allocation { len: usize },

    #[error("Record length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("Record index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Which table extent an index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Column,
    Row,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Column => write!(f, "column"),
            Axis::Row => write!(f, "row"),
        }
    }
}

/// Master error type for table operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Invalid argument {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("{axis} index {index} is out of bounds [0..{extent})")]
    OutOfBounds {
        axis: Axis,
        index: usize,
        extent: usize,
    },

    #[error("Allocation failed for {what}")]
    AllocationError { what: &'static str },

    #[error("Dependency error: {0}")]
    DependencyError(#[from] RecordError),
}

impl From<ConfigError> for TableError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidValue { field, reason } => {
                TableError::InvalidArgument { field, reason }
            }
            other => TableError::InvalidArgument {
                field: "config",
                reason: other.to_string(),
            },
        }
    }
}

/// Result type alias for table operations.
pub type TableResult<T> = Result<T, TableError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_display_length_mismatch() {
        let err = RecordError::LengthMismatch {
            expected: 3,
            got: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("length mismatch"));
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_table_error_display_out_of_bounds() {
        let err = TableError::OutOfBounds {
            axis: Axis::Row,
            index: 5,
            extent: 5,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("row index 5"));
        assert!(msg.contains("[0..5)"));
    }

    #[test]
    fn test_table_error_from_record_error() {
        let err = TableError::from(RecordError::Allocation { len: 8 });
        assert!(matches!(
            err,
            TableError::DependencyError(RecordError::Allocation { len: 8 })
        ));
    }

    #[test]
    fn test_config_invalid_value_maps_to_invalid_argument() {
        let err = TableError::from(ConfigError::InvalidValue {
            field: "columns",
            reason: "must be > 0".to_string(),
        });
        assert_eq!(
            err,
            TableError::InvalidArgument {
                field: "columns",
                reason: "must be > 0".to_string(),
            }
        );
    }
}
