//! Error types for puzzle construction, interaction and preview export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// A coordinate or row index fell outside the table grid
    CoordinateOutOfRange {
        /// Which coordinate component was rejected
        axis: &'static str,
        /// The rejected value
        value: usize,
        /// Exclusive upper bound
        limit: usize,
    },

    /// Operator input could not be interpreted
    InvalidInput {
        /// What was being asked for
        field: &'static str,
        /// Raw text that was supplied
        value: String,
        /// Explanation of why the value was rejected
        reason: String,
    },

    /// Input stream ended while a value was still required
    InputClosed {
        /// What was being asked for
        field: &'static str,
    },

    /// Reading from or writing to the terminal failed
    Terminal {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a preview image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Internal computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordinateOutOfRange { axis, value, limit } => {
                write!(
                    f,
                    "Coordinate {axis} = {value} is out of range (0-{})",
                    limit.saturating_sub(1)
                )
            }
            Self::InvalidInput {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid {field} '{value}': {reason}")
            }
            Self::InputClosed { field } => {
                write!(f, "Input closed while reading {field}")
            }
            Self::Terminal { operation, source } => {
                write!(f, "Terminal error during {operation}: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::Terminal { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<ndarray::ShapeError> for PuzzleError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Computation {
            operation: "reshape",
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(field: &'static str, value: &str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidInput {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Check that an index addresses a row or column of the table grid
///
/// # Errors
///
/// Returns `CoordinateOutOfRange` if `value` is not below `limit`
pub fn check_index(axis: &'static str, value: usize, limit: usize) -> Result<usize> {
    if value < limit {
        Ok(value)
    } else {
        Err(PuzzleError::CoordinateOutOfRange { axis, value, limit })
    }
}
