//! Unit descriptors.

use crate::dimension::Dimension;
use crate::error::{UnitError, UnitResult};
use crate::registry;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contract every **unit descriptor** fulfils.
///
/// A descriptor is an immutable token naming a physical unit, possibly composite. Values carry a
/// descriptor and delegate all unit algebra to it.
///
/// # Invariants
///
/// - `conversion_factor(a, b) * conversion_factor(b, a) ≈ 1` for compatible `a`, `b`.
/// - `multiply`, `divide` and `power` never fail; only `validate` and `conversion_factor` do. A
///   descriptor whose algebra overflowed must report it from `validate`.
pub trait UnitDescriptor: Clone + PartialEq + Debug + Display {
    /// Checks that this token really describes a unit.
    fn validate(&self) -> UnitResult<()>;

    /// Product of two units.
    fn multiply(&self, other: &Self) -> Self;

    /// Quotient of two units.
    fn divide(&self, other: &Self) -> Self;

    /// Integer power of a unit.
    fn power(&self, n: i32) -> Self;

    /// Factor that turns a magnitude expressed in `self` into one expressed in `target`.
    ///
    /// Fails with [`UnitError::IncompatibleDimensions`] if the units measure different dimensions.
    fn conversion_factor(&self, target: &Self) -> UnitResult<f64>;
}

/// A composite unit: a product of registered unit symbols raised to integer exponents.
///
/// Building a unit never fails; unknown symbols are representable and only rejected by
/// [`UnitDescriptor::validate`] or when the unit is resolved against the registry.
///
/// Exponents saturate at the `i32` bounds. A saturated factor fails to resolve with
/// [`UnitError::ExponentOverflow`], as does a factor whose dimension exponents overflow.
///
/// ```rust
/// use unitized_core::{units, Unit, UnitDescriptor};
///
/// let velocity = units::meter() / units::second();
/// assert_eq!(velocity.to_string(), "m/s");
///
/// let factor = velocity.conversion_factor(&(units::angstrom() / units::femtosecond())).unwrap();
/// assert!((factor - 1e-5).abs() < 1e-18);
///
/// assert!(Unit::named("not-a-unit").validate().is_err());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "BTreeMap<String, i32>", into = "BTreeMap<String, i32>")
)]
pub struct Unit {
    factors: BTreeMap<String, i32>,
}

impl Unit {
    /// The unit of pure numbers.
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// A single-factor unit. The symbol is not checked against the registry.
    pub fn named(symbol: impl Into<String>) -> Self {
        Self::from_factors([(symbol.into(), 1)])
    }

    /// Builds a unit from `(symbol, exponent)` pairs. Repeated symbols are merged and zero
    /// exponents dropped.
    pub fn from_factors<S, I>(factors: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, i32)>,
    {
        let mut unit = Self::default();
        for (symbol, exponent) in factors {
            unit.accumulate(symbol.into(), exponent);
        }
        unit
    }

    /// Iterates over `(symbol, exponent)` pairs in canonical order.
    pub fn factors(&self) -> impl Iterator<Item = (&str, i32)> {
        self.factors.iter().map(|(s, &e)| (s.as_str(), e))
    }

    /// Returns `true` if this is the unit of pure numbers.
    pub fn is_dimensionless(&self) -> bool {
        self.factors.is_empty()
    }

    /// Resolves the dimension of this unit through the registry.
    pub fn dimension(&self) -> UnitResult<Dimension> {
        self.factors()
            .try_fold(Dimension::DIMENSIONLESS, |acc, (symbol, exponent)| {
                let meta = resolve(symbol, exponent)?;
                meta.dim
                    .checked_powi(exponent)
                    .and_then(|dim| acc.checked_mul(dim))
                    .ok_or_else(|| UnitError::ExponentOverflow(symbol.to_string()))
            })
    }

    /// Scale of this unit relative to the canonical unit of its dimension.
    pub fn scale(&self) -> UnitResult<f64> {
        self.factors().try_fold(1.0, |acc, (symbol, exponent)| {
            let meta = resolve(symbol, exponent)?;
            Ok(acc * meta.scale_to_canonical.powi(exponent))
        })
    }

    /// Returns `true` if both units resolve and share a dimension.
    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        matches!((self.dimension(), other.dimension()), (Ok(a), Ok(b)) if a == b)
    }

    fn accumulate(&mut self, symbol: String, exponent: i32) {
        if exponent == 0 {
            return;
        }
        let entry = self.factors.entry(symbol).or_insert(0);
        *entry = entry.saturating_add(exponent);
        if *entry == 0 {
            self.factors.retain(|_, e| *e != 0);
        }
    }
}

impl From<BTreeMap<String, i32>> for Unit {
    /// Normalizes the map the same way as [`Unit::from_factors`].
    fn from(factors: BTreeMap<String, i32>) -> Self {
        Self::from_factors(factors)
    }
}

impl From<Unit> for BTreeMap<String, i32> {
    fn from(unit: Unit) -> Self {
        unit.factors
    }
}

fn lookup(symbol: &str) -> UnitResult<registry::UnitMeta> {
    registry::meta(symbol).ok_or_else(|| UnitError::UnknownUnit(symbol.to_string()))
}

/// Looks up a factor, rejecting exponents that saturated.
fn resolve(symbol: &str, exponent: i32) -> UnitResult<registry::UnitMeta> {
    let meta = lookup(symbol)?;
    if exponent == i32::MAX || exponent == i32::MIN {
        return Err(UnitError::ExponentOverflow(symbol.to_string()));
    }
    Ok(meta)
}

impl UnitDescriptor for Unit {
    fn validate(&self) -> UnitResult<()> {
        self.dimension().map(|_| ())
    }

    fn multiply(&self, other: &Self) -> Self {
        let mut product = self.clone();
        for (symbol, exponent) in other.factors() {
            product.accumulate(symbol.to_string(), exponent);
        }
        product
    }

    fn divide(&self, other: &Self) -> Self {
        self.multiply(&other.power(-1))
    }

    fn power(&self, n: i32) -> Self {
        Self::from_factors(self.factors().map(|(s, e)| (s, e.saturating_mul(n))))
    }

    fn conversion_factor(&self, target: &Self) -> UnitResult<f64> {
        let from_dim = self.dimension()?;
        let to_dim = target.dimension()?;
        if from_dim != to_dim {
            return Err(UnitError::IncompatibleDimensions {
                from: self.to_string(),
                to: target.to_string(),
            });
        }
        if self == target {
            return Ok(1.0);
        }
        Ok(self.scale()? / target.scale()?)
    }
}

impl Mul for Unit {
    type Output = Unit;
    fn mul(self, rhs: Unit) -> Unit {
        self.multiply(&rhs)
    }
}

impl Mul<&Unit> for &Unit {
    type Output = Unit;
    fn mul(self, rhs: &Unit) -> Unit {
        self.multiply(rhs)
    }
}

impl Div for Unit {
    type Output = Unit;
    fn div(self, rhs: Unit) -> Unit {
        self.divide(&rhs)
    }
}

impl Div<&Unit> for &Unit {
    type Output = Unit;
    fn div(self, rhs: &Unit) -> Unit {
        self.divide(rhs)
    }
}

fn write_factor(f: &mut Formatter<'_>, symbol: &str, exponent: i64) -> FmtResult {
    if exponent == 1 {
        f.write_str(symbol)
    } else {
        write!(f, "{}^{}", symbol, exponent)
    }
}

fn write_product<'a>(
    f: &mut Formatter<'_>,
    factors: impl Iterator<Item = (&'a str, i64)>,
) -> FmtResult {
    for (i, (symbol, exponent)) in factors.enumerate() {
        if i > 0 {
            f.write_str("*")?;
        }
        write_factor(f, symbol, exponent)?;
    }
    Ok(())
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let numerator: Vec<_> = self
            .factors()
            .filter(|&(_, e)| e > 0)
            .map(|(s, e)| (s, i64::from(e)))
            .collect();
        let denominator: Vec<_> = self
            .factors()
            .filter(|&(_, e)| e < 0)
            .map(|(s, e)| (s, -i64::from(e)))
            .collect();

        if numerator.is_empty() {
            f.write_str("1")?;
        } else {
            write_product(f, numerator.into_iter())?;
        }

        match denominator.len() {
            0 => Ok(()),
            1 => {
                f.write_str("/")?;
                write_product(f, denominator.into_iter())
            }
            _ => {
                f.write_str("/(")?;
                write_product(f, denominator.into_iter())?;
                f.write_str(")")
            }
        }
    }
}

impl Debug for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Unit({})", self)
    }
}
