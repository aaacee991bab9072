//! The value-with-units type and its arithmetic.

use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::{Div, Mul, Neg};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use unitized_core::{Unit, UnitDescriptor};

use crate::capability::Unitized;
use crate::config::UnitizedConfig;
use crate::error::{UnitizedError, UnitizedResult};

/// A floating-point value together with the units it is expressed in.
///
/// `ValueWithUnits` behaves like an `f64` for arithmetic while carrying a unit descriptor:
///
/// - `*` and `/` compose units;
/// - [`try_add`](Self::try_add) and [`try_sub`](Self::try_sub) first convert the right operand into the
///   left operand's units, and fail if the dimensions differ;
/// - [`in_units`](Self::in_units) converts explicitly.
///
/// Values are immutable; every operation returns a new value.
///
/// With the `serde` feature, deserializing validates the units the same way as [`new`](Self::new).
///
/// # Examples
///
/// ```rust
/// use unitized::{units, ValueWithUnits};
///
/// let d = ValueWithUnits::new(1.5, units::angstrom()).unwrap();
/// let t = ValueWithUnits::new(2.0, units::angstrom()).unwrap();
/// let sum = d.try_add(&t).unwrap();
/// assert_eq!(sum.value(), 3.5);
///
/// let in_bohr = sum.in_units(&units::bohr()).unwrap();
/// assert!((in_bohr.value() - 6.614_041_436).abs() < 1e-8);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawValueWithUnits<U>",
        bound(deserialize = "U: UnitDescriptor + Deserialize<'de>")
    )
)]
pub struct ValueWithUnits<U = Unit> {
    value: f64,
    units: U,
}

/// Unvalidated wire form of a [`ValueWithUnits`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawValueWithUnits<U> {
    value: f64,
    units: U,
}

#[cfg(feature = "serde")]
impl<U: UnitDescriptor> TryFrom<RawValueWithUnits<U>> for ValueWithUnits<U> {
    type Error = UnitizedError;

    fn try_from(raw: RawValueWithUnits<U>) -> UnitizedResult<Self> {
        Self::new(raw.value, raw.units)
    }
}

/// Right-hand operand of a unit-aware operation.
///
/// Mirrors the three things a value can be combined with: another value with units, a bare unit, or a
/// plain number.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand<U = Unit> {
    /// Another value with units.
    Value(ValueWithUnits<U>),
    /// A bare unit; combining with it re-units the same magnitude.
    Units(U),
    /// A plain number.
    Scalar(f64),
}

impl<U: UnitDescriptor> Operand<U> {
    fn describe(&self) -> String {
        match self {
            Operand::Value(v) => format!("value {}", v),
            Operand::Units(u) => format!("bare unit {}", u),
            Operand::Scalar(n) => format!("plain number {}", n),
        }
    }
}

impl<U> From<ValueWithUnits<U>> for Operand<U> {
    fn from(value: ValueWithUnits<U>) -> Self {
        Operand::Value(value)
    }
}

impl<U: Clone> From<&ValueWithUnits<U>> for Operand<U> {
    fn from(value: &ValueWithUnits<U>) -> Self {
        Operand::Value(value.clone())
    }
}

impl<U> From<f64> for Operand<U> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<U: UnitDescriptor> ValueWithUnits<U> {
    /// Creates a value, validating `units`.
    ///
    /// Equivalent to [`with_config`](Self::with_config) with the default configuration.
    ///
    /// ```rust
    /// use unitized::{units, Unit, UnitizedError, ValueWithUnits};
    ///
    /// assert!(ValueWithUnits::new(3.0, units::meter()).is_ok());
    /// assert!(matches!(
    ///     ValueWithUnits::new(3.0, Unit::named("not-a-unit")),
    ///     Err(UnitizedError::InvalidUnit(_))
    /// ));
    /// ```
    pub fn new(value: f64, units: U) -> UnitizedResult<Self> {
        Self::with_config(value, units, &UnitizedConfig::default())
    }

    /// Creates a value, validating `units` only when `config.type_checking` is set.
    pub fn with_config(value: f64, units: U, config: &UnitizedConfig) -> UnitizedResult<Self> {
        if config.type_checking {
            if let Err(err) = units.validate() {
                log::debug!("Rejecting unit {} for value {}: {}", units, value, err);
                return Err(err.into());
            }
        } else {
            log::trace!("Building {} {} without unit validation", value, units);
        }
        Ok(Self::new_unchecked(value, units))
    }

    /// Creates a value without validating `units`.
    #[inline]
    pub const fn new_unchecked(value: f64, units: U) -> Self {
        Self { value, units }
    }

    /// Returns the bare magnitude.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the units the magnitude is expressed in.
    #[inline]
    pub fn units(&self) -> &U {
        &self.units
    }

    /// Splits the value into magnitude and units.
    pub fn into_parts(self) -> (f64, U) {
        (self.value, self.units)
    }

    /// Converts this value into `target` units.
    ///
    /// # Errors
    ///
    /// * [`UnitizedError::InvalidUnit`] if `target` is not a valid unit
    /// * [`UnitizedError::DimensionalMismatch`] if the dimensions differ
    pub fn in_units(&self, target: &U) -> UnitizedResult<Self> {
        target.validate()?;
        let factor = self.units.conversion_factor(target)?;
        log::trace!(
            "Converting {} {} to {} (factor {})",
            self.value,
            self.units,
            target,
            factor
        );
        Ok(Self::new_unchecked(self.value * factor, target.clone()))
    }

    /// Multiplies by a value, a bare unit or a plain number.
    ///
    /// ```rust
    /// use unitized::{units, Operand, ValueWithUnits};
    ///
    /// let energy = ValueWithUnits::new(2.0, units::kilocalorie()).unwrap();
    /// let per_mol = energy.divide(Operand::Units(units::mole()));
    /// assert_eq!(per_mol.value(), 2.0);
    /// assert_eq!(per_mol.units().to_string(), "kcal/mol");
    /// assert_eq!(energy.multiply(3.0).value(), 6.0);
    /// ```
    pub fn multiply(&self, rhs: impl Into<Operand<U>>) -> Self {
        match rhs.into() {
            Operand::Value(other) => Self::new_unchecked(
                self.value * other.value,
                self.units.multiply(&other.units),
            ),
            Operand::Units(units) => {
                Self::new_unchecked(self.value, self.units.multiply(&units))
            }
            Operand::Scalar(n) => Self::new_unchecked(self.value * n, self.units.clone()),
        }
    }

    /// Divides by a value, a bare unit or a plain number.
    pub fn divide(&self, rhs: impl Into<Operand<U>>) -> Self {
        match rhs.into() {
            Operand::Value(other) => Self::new_unchecked(
                self.value / other.value,
                self.units.divide(&other.units),
            ),
            Operand::Units(units) => Self::new_unchecked(self.value, self.units.divide(&units)),
            Operand::Scalar(n) => Self::new_unchecked(self.value / n, self.units.clone()),
        }
    }

    /// Adds another value, converting it into these units first.
    ///
    /// # Errors
    ///
    /// * [`UnitizedError::UnsupportedOperand`] for a plain number or a bare unit, which carry no
    ///   dimension to check against
    /// * any error from [`in_units`](Self::in_units), notably
    ///   [`UnitizedError::DimensionalMismatch`]
    pub fn try_add(&self, rhs: impl Into<Operand<U>>) -> UnitizedResult<Self> {
        let other = Self::value_operand("addition", rhs.into())?;
        let converted = other.in_units(&self.units)?;
        Ok(Self::new_unchecked(
            self.value + converted.value,
            self.units.clone(),
        ))
    }

    /// Subtracts another value, converting it into these units first.
    ///
    /// Fails exactly like [`try_add`](Self::try_add).
    pub fn try_sub(&self, rhs: impl Into<Operand<U>>) -> UnitizedResult<Self> {
        let other = Self::value_operand("subtraction", rhs.into())?;
        let converted = other.in_units(&self.units)?;
        Ok(Self::new_unchecked(
            self.value - converted.value,
            self.units.clone(),
        ))
    }

    /// Raises both the magnitude and the units to an integer power.
    pub fn powi(&self, n: i32) -> Self {
        Self::new_unchecked(self.value.powi(n), self.units.power(n))
    }

    /// Returns the absolute value, keeping the units.
    pub fn abs(&self) -> Self {
        Self::new_unchecked(self.value.abs(), self.units.clone())
    }

    fn value_operand(op: &'static str, rhs: Operand<U>) -> UnitizedResult<Self> {
        match rhs {
            Operand::Value(other) => Ok(other),
            other => Err(UnitizedError::UnsupportedOperand {
                op,
                operand: other.describe(),
            }),
        }
    }
}

impl<U: UnitDescriptor> Unitized for ValueWithUnits<U> {
    type Units = U;

    fn value(&self) -> f64 {
        self.value
    }

    fn units(&self) -> &U {
        &self.units
    }

    fn in_units(&self, target: &U) -> UnitizedResult<ValueWithUnits<U>> {
        ValueWithUnits::in_units(self, target)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: UnitDescriptor> Mul for ValueWithUnits<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl<'a, U: UnitDescriptor> Mul<&'a ValueWithUnits<U>> for &'a ValueWithUnits<U> {
    type Output = ValueWithUnits<U>;
    #[inline]
    fn mul(self, rhs: &'a ValueWithUnits<U>) -> ValueWithUnits<U> {
        self.multiply(rhs)
    }
}

impl<U: UnitDescriptor> Mul<f64> for ValueWithUnits<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new_unchecked(self.value * rhs, self.units)
    }
}

impl<U: UnitDescriptor> Mul<ValueWithUnits<U>> for f64 {
    type Output = ValueWithUnits<U>;
    #[inline]
    fn mul(self, rhs: ValueWithUnits<U>) -> ValueWithUnits<U> {
        rhs * self
    }
}

impl<U: UnitDescriptor> Div for ValueWithUnits<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl<'a, U: UnitDescriptor> Div<&'a ValueWithUnits<U>> for &'a ValueWithUnits<U> {
    type Output = ValueWithUnits<U>;
    #[inline]
    fn div(self, rhs: &'a ValueWithUnits<U>) -> ValueWithUnits<U> {
        self.divide(rhs)
    }
}

impl<U: UnitDescriptor> Div<f64> for ValueWithUnits<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new_unchecked(self.value / rhs, self.units)
    }
}

/// `n / v` carries the inverse of `v`'s units.
impl<U: UnitDescriptor> Div<ValueWithUnits<U>> for f64 {
    type Output = ValueWithUnits<U>;
    #[inline]
    fn div(self, rhs: ValueWithUnits<U>) -> ValueWithUnits<U> {
        ValueWithUnits::new_unchecked(self / rhs.value, rhs.units.power(-1))
    }
}

impl<U: UnitDescriptor> Neg for ValueWithUnits<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new_unchecked(-self.value, self.units)
    }
}

impl<U> PartialEq<f64> for ValueWithUnits<U> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

/// Integral magnitudes keep their trailing `.0` unless a precision is given.
impl<U: Display> Display for ValueWithUnits<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, self.units),
            None => write!(f, "{:?} {}", self.value, self.units),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use unitized_core::units::*;

    fn v(value: f64, units: Unit) -> ValueWithUnits {
        ValueWithUnits::new(value, units).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_and_accessors() {
        let q = v(42.0, meter());
        assert_eq!(q.value(), 42.0);
        assert_eq!(q.units(), &meter());
        assert_eq!(q.into_parts(), (42.0, meter()));
    }

    #[test]
    fn invalid_unit_rejected_when_checking() {
        let err = ValueWithUnits::new(3.0, Unit::named("not-a-unit")).unwrap_err();
        assert_eq!(err, UnitizedError::InvalidUnit("not-a-unit".into()));
    }

    #[test]
    fn invalid_unit_accepted_when_not_checking() {
        let q = ValueWithUnits::with_config(3.0, Unit::named("not-a-unit"), &UnitizedConfig::unchecked())
            .unwrap();
        assert_eq!(q.value(), 3.0);
        assert_eq!(q.to_string(), "3.0 not-a-unit");
    }

    #[test]
    fn unchecked_value_still_fails_to_convert() {
        let q = ValueWithUnits::new_unchecked(3.0, Unit::named("not-a-unit"));
        assert!(matches!(
            q.in_units(&meter()),
            Err(UnitizedError::InvalidUnit(symbol)) if symbol == "not-a-unit"
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn in_units_scales_value() {
        let q = v(5.0, meter()).in_units(&centimeter()).unwrap();
        assert_relative_eq!(q.value(), 500.0, max_relative = 1e-12);
        assert_eq!(q.units(), &centimeter());
    }

    #[test]
    fn in_units_rejects_invalid_target() {
        let err = v(5.0, meter()).in_units(&Unit::named("furlong")).unwrap_err();
        assert_eq!(err, UnitizedError::InvalidUnit("furlong".into()));
    }

    #[test]
    fn in_units_rejects_other_dimension() {
        let err = v(5.0, meter()).in_units(&second()).unwrap_err();
        assert!(matches!(err, UnitizedError::DimensionalMismatch { .. }));
    }

    #[test]
    fn in_units_composite() {
        let barrier = v(10.0, kilocalorie() / mole());
        let converted = barrier.in_units(&(kilojoule() / mole())).unwrap();
        assert_relative_eq!(converted.value(), 41.84, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Multiplication and division
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn multiply_values_composes_units() {
        let force_like = v(2.0, kilogram()) * v(3.0, meter());
        assert_eq!(force_like.value(), 6.0);
        assert_eq!(force_like.units(), &(kilogram() * meter()));
    }

    #[test]
    fn multiply_by_bare_unit_keeps_value() {
        let q = v(2.0, meter()).multiply(Operand::Units(meter()));
        assert_eq!(q.value(), 2.0);
        assert_eq!(q.units(), &meter().power(2));
    }

    #[test]
    fn multiply_by_scalar_is_commutative() {
        let q = v(5.0, second());
        assert_eq!((q.clone() * 3.0).value(), 15.0);
        assert_eq!((3.0 * q.clone()).value(), 15.0);
        assert_eq!((3.0 * q).units(), &second());
    }

    #[test]
    fn multiply_by_reference() {
        let a = v(2.0, meter());
        let b = v(4.0, meter());
        let area = &a * &b;
        assert_eq!(area.value(), 8.0);
        assert_eq!(area.units().to_string(), "m^2");
    }

    #[test]
    fn divide_values_composes_units() {
        let speed = v(100.0, meter()) / v(20.0, second());
        assert_eq!(speed.value(), 5.0);
        assert_eq!(speed.units().to_string(), "m/s");
    }

    #[test]
    fn divide_by_scalar_keeps_units() {
        let q = v(15.0, hartree()) / 3.0;
        assert_eq!(q.value(), 5.0);
        assert_eq!(q.units(), &hartree());
    }

    #[test]
    fn scalar_divided_by_value_inverts_units() {
        let rate = 1.0 / v(4.0, femtosecond());
        assert_eq!(rate.value(), 0.25);
        assert_eq!(rate.units(), &femtosecond().power(-1));
        assert_eq!(rate.to_string(), "0.25 1/fs");
    }

    #[test]
    fn divide_by_bare_unit() {
        let q = v(627.5, kilocalorie()).divide(Operand::Units(mole()));
        assert_eq!(q.value(), 627.5);
        assert_eq!(q.units().to_string(), "kcal/mol");
    }

    #[test]
    fn same_unit_division_is_dimensionless() {
        let ratio = &v(3.0, bohr()) / &v(1.5, bohr());
        assert_eq!(ratio.value(), 2.0);
        assert!(ratio.units().is_dimensionless());
        assert_eq!(ratio.to_string(), "2.0 1");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Addition and subtraction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_same_units() {
        let sum = v(1.0, meter()).try_add(v(2.0, meter())).unwrap();
        assert_eq!(sum.value(), 3.0);
        assert_eq!(sum.units(), &meter());
    }

    #[test]
    fn add_converts_right_operand() {
        let sum = v(1.0, meter()).try_add(&v(50.0, centimeter())).unwrap();
        assert_relative_eq!(sum.value(), 1.5, max_relative = 1e-12);
        assert_eq!(sum.units(), &meter());
    }

    #[test]
    fn sub_converts_right_operand() {
        let diff = v(1.0, hour()).try_sub(v(30.0, minute())).unwrap();
        assert_relative_eq!(diff.value(), 0.5, max_relative = 1e-12);
        assert_eq!(diff.units(), &hour());
    }

    #[test]
    fn add_incompatible_units_fails() {
        let err = v(1.0, meter()).try_add(v(1.0, second())).unwrap_err();
        assert_eq!(
            err,
            UnitizedError::DimensionalMismatch {
                from: "s".into(),
                to: "m".into()
            }
        );
    }

    #[test]
    fn add_plain_number_is_unsupported() {
        let err = v(1.0, meter()).try_add(2.0).unwrap_err();
        assert!(matches!(
            err,
            UnitizedError::UnsupportedOperand { op: "addition", .. }
        ));
    }

    #[test]
    fn sub_bare_unit_is_unsupported() {
        let err = v(1.0, meter()).try_sub(Operand::Units(meter())).unwrap_err();
        assert!(matches!(
            err,
            UnitizedError::UnsupportedOperand { op: "subtraction", ref operand } if operand == "bare unit m"
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Unary operations and powers
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn neg_and_abs_keep_units() {
        let q = v(-2.5, electronvolt());
        assert_eq!((-q.clone()).value(), 2.5);
        assert_eq!((-q.clone()).units(), &electronvolt());
        assert_eq!(q.abs().value(), 2.5);
        assert_eq!(q.abs().units(), &electronvolt());
    }

    #[test]
    fn powi_raises_units() {
        let volume = v(2.0, angstrom()).powi(3);
        assert_eq!(volume.value(), 8.0);
        assert_eq!(volume.units().to_string(), "Å^3");
        let back = volume.in_units(&bohr().power(3)).unwrap();
        assert_relative_eq!(back.value(), 8.0 * 1.889_726_124_626_f64.powi(3), max_relative = 1e-9);
    }

    #[test]
    fn overflowing_powers_saturate_instead_of_panicking() {
        let q = v(2.0, meter()).powi(i32::MAX).multiply(Operand::Units(meter()));
        assert_eq!(q.units().factors().collect::<Vec<_>>(), vec![("m", i32::MAX)]);
        assert_eq!(
            q.in_units(&meter()).unwrap_err(),
            UnitizedError::ExponentOverflow("m".into())
        );
        assert_eq!(
            ValueWithUnits::new(1.0, q.units().clone()).unwrap_err(),
            UnitizedError::ExponentOverflow("m".into())
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Equality, formatting, serde
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality() {
        assert_eq!(v(1.0, meter()), v(1.0, meter()));
        assert_ne!(v(1.0, meter()), v(1.0, second()));
        assert!(v(5.0, meter()) == 5.0);
        assert!(!(v(5.0, meter()) == 4.0));
    }

    #[test]
    fn display() {
        assert_eq!(v(42.5, meter()).to_string(), "42.5 m");
        assert_eq!(v(-99.9, kilocalorie() / mole()).to_string(), "-99.9 kcal/mol");
        assert_eq!(v(3.0, meter()).to_string(), "3.0 m");
        assert_eq!(format!("{:.2}", v(3.0, meter())), "3.00 m");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let q = v(1.25, meter() / second());
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":1.25,"units":{"m":1,"s":-1}}"#);
        let back: ValueWithUnits = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_unknown_unit() {
        let err = serde_json::from_str::<ValueWithUnits>(r#"{"value":1.0,"units":{"furlong":1}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid unit: furlong"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_normalizes_units() {
        let q: ValueWithUnits = serde_json::from_str(r#"{"value":2.0,"units":{"m":0}}"#).unwrap();
        assert_eq!(q.units(), &Unit::dimensionless());
        assert_eq!(q, v(2.0, Unit::dimensionless()));
    }

    #[test]
    fn unitized_trait_delegates() {
        let q = v(2.0, hour());
        assert_eq!(Unitized::value(&q), 2.0);
        assert_eq!(Unitized::units(&q), &hour());
        let minutes = Unitized::in_units(&q, &minute()).unwrap();
        assert_relative_eq!(minutes.value(), 120.0, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    fn energy_unit() -> impl Strategy<Value = Unit> {
        prop::sample::select(vec![
            joule(),
            kilojoule(),
            calorie(),
            kilocalorie(),
            electronvolt(),
            hartree(),
        ])
    }

    proptest! {
        #[test]
        fn prop_conversion_roundtrip(m in -1e6..1e6f64, u1 in energy_unit(), u2 in energy_unit()) {
            let original = v(m, u1.clone());
            let back = original.in_units(&u2).unwrap().in_units(&u1).unwrap();
            prop_assert!((back.value() - m).abs() <= 1e-9 * m.abs().max(1.0));
            prop_assert_eq!(back.units(), &u1);
        }

        #[test]
        fn prop_add_same_units(m1 in -1e6..1e6f64, m2 in -1e6..1e6f64, u in energy_unit()) {
            let sum = v(m1, u.clone()).try_add(v(m2, u.clone())).unwrap();
            prop_assert_eq!(sum.value(), m1 + m2);
            prop_assert_eq!(sum.units(), &u);
        }

        #[test]
        fn prop_mul_composes(m1 in -1e3..1e3f64, m2 in -1e3..1e3f64, u1 in energy_unit(), u2 in energy_unit()) {
            let product = v(m1, u1.clone()) * v(m2, u2.clone());
            prop_assert_eq!(product.value(), m1 * m2);
            prop_assert_eq!(product.units(), &u1.multiply(&u2));
        }
    }
}
