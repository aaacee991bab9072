//! Pass/fail comparisons for checking computed results against reference values.
//!
//! Each helper logs a `PASSED` line at `info` level on success. On failure it logs the mismatch at
//! `warn` level and returns [`UnitizedError::ComparisonFailed`] carrying the same message.

use std::fmt::Display;

use unitized_core::UnitDescriptor;

use crate::capability::HasUnits;
use crate::error::{UnitizedError, UnitizedResult};
use crate::strip::strip_units;
use crate::value::ValueWithUnits;

/// Decimal places beyond this carry no information for an `f64`.
const MAX_PRINTED_DECIMALS: u32 = 17;

fn success(label: &str) -> UnitizedResult<()> {
    log::info!("\t{:.<66}PASSED", label);
    Ok(())
}

fn failure(message: String) -> UnitizedResult<()> {
    log::warn!("\t{}", message);
    Err(UnitizedError::ComparisonFailed(message))
}

/// Passes when `computed` matches `expected` to `digits` decimal places and is not NaN.
///
/// ```rust
/// use unitized::compare_values;
///
/// assert!(compare_values(1.0, 1.00004, 4, "energy").is_ok());
/// assert!(compare_values(1.0, 1.0002, 4, "energy").is_err());
/// ```
pub fn compare_values(expected: f64, computed: f64, digits: u32, label: &str) -> UnitizedResult<()> {
    let tolerance = 10f64.powi(-i32::try_from(digits).unwrap_or(i32::MAX));
    let precision = digits.saturating_add(1).min(MAX_PRINTED_DECIMALS) as usize;
    if (expected - computed).abs() > tolerance {
        return failure(format!(
            "{}: computed value ({:.*}) does not match ({:.*}) to {} decimal places.",
            label, precision, computed, precision, expected, digits
        ));
    }
    if computed.is_nan() {
        return failure(format!(
            "{}: computed value ({:.6}) does not match ({:.6}) to {} decimal places, \
             probably because the computed value is nan.",
            label, computed, expected, digits
        ));
    }
    success(label)
}

/// Compares two quantities after stripping `computed` into the units of `expected`.
///
/// # Errors
///
/// Any error from [`strip_units`], notably a dimensional mismatch, is returned unchanged.
pub fn compare_quantities<U, C>(
    expected: &ValueWithUnits<U>,
    computed: &C,
    digits: u32,
    label: &str,
) -> UnitizedResult<()>
where
    U: UnitDescriptor,
    C: HasUnits<Units = U> + ?Sized,
{
    let target = expected.units();
    let computed = strip_units(computed, Some(target), None)?;
    compare_values(expected.value(), computed, digits, label)
}

/// Passes when `computed` equals `expected`.
pub fn compare_integers(expected: i64, computed: i64, label: &str) -> UnitizedResult<()> {
    if expected != computed {
        return failure(format!(
            "{}: computed value ({}) does not match ({}).",
            label, computed, expected
        ));
    }
    success(label)
}

/// Passes when `computed` is exactly `expected`.
pub fn compare_strings<S: AsRef<str> + Display + ?Sized>(
    expected: &S,
    computed: &S,
    label: &str,
) -> UnitizedResult<()> {
    if expected.as_ref() != computed.as_ref() {
        return failure(format!(
            "{}: computed value ({}) does not match ({}).",
            label, computed, expected
        ));
    }
    success(label)
}
