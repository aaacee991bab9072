//! Error types for unitized values.

use unitized_core::UnitError;

/// Result type for operations on unitized values.
pub type UnitizedResult<T> = Result<T, UnitizedError>;

/// Error type for operations on unitized values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitizedError {
    /// A unit is not known to the registry.
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// A conversion between units of different dimensions.
    #[error("Dimensional mismatch: cannot convert {from} to {to}")]
    DimensionalMismatch {
        /// Display form of the source unit.
        from: String,
        /// Display form of the target unit.
        to: String,
    },

    /// A unit exponent overflowed during unit algebra.
    #[error("Exponent out of range for unit: {0}")]
    ExponentOverflow(String),

    /// An object reports units but cannot produce or convert its magnitude.
    #[error("Unitized object error: {0}")]
    UnitizedObject(String),

    /// A helper was called with an invalid combination of arguments.
    #[error("Usage error: {0}")]
    Usage(String),

    /// An operand that the operation cannot combine with a value with units.
    #[error("Unsupported operand for {op}: {operand}")]
    UnsupportedOperand {
        /// Name of the operation.
        op: &'static str,
        /// Description of the rejected operand.
        operand: String,
    },

    /// A computed result did not match its reference.
    #[error("Comparison failed: {0}")]
    ComparisonFailed(String),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<UnitError> for UnitizedError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::UnknownUnit(symbol) => UnitizedError::InvalidUnit(symbol),
            UnitError::IncompatibleDimensions { from, to } => {
                UnitizedError::DimensionalMismatch { from, to }
            }
            UnitError::ExponentOverflow(symbol) => UnitizedError::ExponentOverflow(symbol),
        }
    }
}
