//! Helpers that work on anything that may or may not carry units.

use unitized_core::UnitDescriptor;

use crate::capability::HasUnits;
use crate::config::UnitizedConfig;
use crate::error::{UnitizedError, UnitizedResult};

/// Returns `true` if `x` reports units.
///
/// ```rust
/// use unitized::{has_units, units, ValueWithUnits};
///
/// assert!(has_units(&ValueWithUnits::new(1.0, units::meter()).unwrap()));
/// assert!(!has_units(&1.0));
/// ```
pub fn has_units<T: HasUnits + ?Sized>(x: &T) -> bool {
    x.probe_units().is_some()
}

/// Strips the units off `x`, returning the bare magnitude.
///
/// Uses the default configuration; see [`strip_units_with`].
///
/// ```rust
/// use unitized::{strip_units, units, ValueWithUnits};
///
/// let d = ValueWithUnits::new(5.0, units::meter()).unwrap();
/// assert_eq!(strip_units(&d, None, None).unwrap(), 5.0);
/// let cm = strip_units(&d, Some(&units::centimeter()), None).unwrap();
/// assert!((cm - 500.0).abs() < 1e-9);
///
/// assert_eq!(strip_units(&5.0, None, None).unwrap(), 5.0);
/// let assumed = strip_units(&5.0, Some(&units::centimeter()), Some(&units::meter())).unwrap();
/// assert!((assumed - 500.0).abs() < 1e-9);
/// ```
pub fn strip_units<T: HasUnits + ?Sized>(
    x: &T,
    convert_to: Option<&T::Units>,
    assume_units: Option<&T::Units>,
) -> UnitizedResult<f64> {
    strip_units_with(x, convert_to, assume_units, &UnitizedConfig::default())
}

/// Strips the units off `x` under an explicit configuration.
///
/// * If `x` has units, its magnitude is returned, converted into `convert_to` when given.
/// * If `x` has no units, its magnitude is returned as is, unless both `assume_units` and
///   `convert_to` are given, in which case `x` is taken to be in `assume_units` and converted.
///
/// # Errors
///
/// * [`UnitizedError::Usage`] if `assume_units` is given without `convert_to`
/// * [`UnitizedError::InvalidUnit`] if type checking is on and a unit argument does not validate
/// * [`UnitizedError::UnitizedObject`] if `x` exposes no magnitude, or has no conversion method and
///   its units cannot be converted
/// * any error raised by the conversion method of `x`
pub fn strip_units_with<T: HasUnits + ?Sized>(
    x: &T,
    convert_to: Option<&T::Units>,
    assume_units: Option<&T::Units>,
    config: &UnitizedConfig,
) -> UnitizedResult<f64> {
    if assume_units.is_some() && convert_to.is_none() {
        return Err(UnitizedError::Usage(
            "strip_units with 'assume_units' must also have a 'convert_to' argument".to_string(),
        ));
    }

    if config.type_checking {
        for units in convert_to.into_iter().chain(assume_units) {
            if let Err(err) = units.validate() {
                log::debug!("strip_units rejected unit {}: {}", units, err);
                return Err(err.into());
            }
        }
    }

    match x.probe_units() {
        Some(units) => {
            let value = x.probe_value().ok_or_else(|| {
                UnitizedError::UnitizedObject(format!(
                    "don't know how to get value of object with units {}",
                    units
                ))
            })?;
            let Some(target) = convert_to else {
                return Ok(value);
            };
            if let Some(converted) = x.probe_in_units(target) {
                return converted;
            }
            log::debug!(
                "No conversion method for {} {}; using the conversion factor to {}",
                value,
                units,
                target
            );
            units
                .conversion_factor(target)
                .map(|factor| value * factor)
                .map_err(|err| {
                    UnitizedError::UnitizedObject(format!(
                        "don't know how to convert {} {} to {} ({})",
                        value, units, target, err
                    ))
                })
        }
        None => {
            let value = x.probe_value().ok_or_else(|| {
                UnitizedError::UnitizedObject(
                    "don't know how to get value of object without units".to_string(),
                )
            })?;
            match (assume_units, convert_to) {
                (Some(assumed), Some(target)) => Ok(value * assumed.conversion_factor(target)?),
                _ => Ok(value),
            }
        }
    }
}
