//! Error type for unit descriptor operations.

/// Result type for unit descriptor operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// Error raised by a unit descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// A unit symbol is not present in the registry.
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    /// Conversion was requested between units of different dimensions.
    #[error("cannot convert {from} to {to}: incompatible dimensions")]
    IncompatibleDimensions {
        /// Display form of the source unit.
        from: String,
        /// Display form of the target unit.
        to: String,
    },

    /// A unit exponent left the representable range.
    #[error("exponent of '{0}' is out of range")]
    ExponentOverflow(String),
}
