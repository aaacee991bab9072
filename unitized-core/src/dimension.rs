//! Dimension types.

use core::fmt::{Display, Formatter, Result};
use core::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of base dimensions tracked by [`Dimension`].
pub const BASE_DIMENSIONS: usize = 7;

/// One of the base dimensions a [`Dimension`] is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// Length (`L`).
    Length,
    /// Mass (`M`).
    Mass,
    /// Time (`T`).
    Time,
    /// Electric charge (`Q`).
    Charge,
    /// Thermodynamic temperature (`Θ`).
    Temperature,
    /// Amount of substance (`N`).
    Amount,
    /// Plane angle (`A`).
    Angle,
}

impl BaseDimension {
    /// All base dimensions, in exponent-vector order.
    pub const ALL: [BaseDimension; BASE_DIMENSIONS] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Charge,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::Angle,
    ];

    /// Printable symbol of the base dimension.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::Charge => "Q",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Amount => "N",
            BaseDimension::Angle => "A",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// The physical dimension of a unit, as integer exponents over the base dimensions.
///
/// Two units can be converted into one another exactly when their dimensions are equal.
///
/// ```rust
/// use unitized_core::Dimension;
///
/// let velocity = Dimension::LENGTH / Dimension::TIME;
/// assert_eq!(velocity * Dimension::TIME, Dimension::LENGTH);
/// assert_eq!(velocity.to_string(), "L T^-1");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    exponents: [i32; BASE_DIMENSIONS],
}

impl Dimension {
    /// Dimension of pure numbers.
    pub const DIMENSIONLESS: Self = Self::new([0, 0, 0, 0, 0, 0, 0]);
    /// Length.
    pub const LENGTH: Self = Self::base(BaseDimension::Length);
    /// Mass.
    pub const MASS: Self = Self::base(BaseDimension::Mass);
    /// Time.
    pub const TIME: Self = Self::base(BaseDimension::Time);
    /// Electric charge.
    pub const CHARGE: Self = Self::base(BaseDimension::Charge);
    /// Temperature.
    pub const TEMPERATURE: Self = Self::base(BaseDimension::Temperature);
    /// Amount of substance.
    pub const AMOUNT: Self = Self::base(BaseDimension::Amount);
    /// Plane angle.
    pub const ANGLE: Self = Self::base(BaseDimension::Angle);
    /// Energy (`M L^2 T^-2`).
    pub const ENERGY: Self = Self::new([2, 1, -2, 0, 0, 0, 0]);

    /// Builds a dimension from raw exponents, in [`BaseDimension::ALL`] order.
    #[inline]
    pub const fn new(exponents: [i32; BASE_DIMENSIONS]) -> Self {
        Self { exponents }
    }

    /// The dimension consisting of a single base dimension.
    pub const fn base(base: BaseDimension) -> Self {
        let mut exponents = [0; BASE_DIMENSIONS];
        exponents[base.index()] = 1;
        Self { exponents }
    }

    /// Exponent of `base` in this dimension.
    #[inline]
    pub const fn exponent(&self, base: BaseDimension) -> i32 {
        self.exponents[base.index()]
    }

    /// Returns `true` if every exponent is zero.
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Raises the dimension to an integer power, saturating exponents at the `i32` bounds.
    pub fn powi(self, n: i32) -> Self {
        let mut exponents = self.exponents;
        for e in exponents.iter_mut() {
            *e = e.saturating_mul(n);
        }
        Self { exponents }
    }

    /// Raises the dimension to an integer power, or `None` if an exponent overflows.
    pub fn checked_powi(self, n: i32) -> Option<Self> {
        let mut exponents = self.exponents;
        for e in exponents.iter_mut() {
            *e = e.checked_mul(n)?;
        }
        Some(Self { exponents })
    }

    /// Product of two dimensions, or `None` if an exponent overflows.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let mut exponents = self.exponents;
        for (e, r) in exponents.iter_mut().zip(rhs.exponents) {
            *e = e.checked_add(r)?;
        }
        Some(Self { exponents })
    }
}

impl Mul for Dimension {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut exponents = self.exponents;
        for (e, r) in exponents.iter_mut().zip(rhs.exponents) {
            *e = e.saturating_add(r);
        }
        Self { exponents }
    }
}

impl Div for Dimension {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.powi(-1)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for base in BaseDimension::ALL {
            let e = self.exponent(base);
            if e == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if e == 1 {
                write!(f, "{}", base.symbol())?;
            } else {
                write!(f, "{}^{}", base.symbol(), e)?;
            }
        }
        Ok(())
    }
}
