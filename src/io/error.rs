//! Error types for maze construction and batch runs

use std::fmt;

/// Main error type for all maze operations
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// Configuration or layout validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An internal generation invariant did not hold
    ///
    /// Occurs only if a carved grid turns out to be disconnected, which the
    /// carving step rules out.
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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

impl std::error::Error for MazeError {}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MazeError {
    MazeError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Reject fractions outside `[0, 1]`, including NaN and infinities
///
/// # Errors
///
/// Returns `InvalidParameter` naming `parameter` when the value is out of range
pub fn ensure_fraction(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a finite value between 0 and 1",
        ))
    }
}
