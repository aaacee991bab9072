//! Capabilities of things that carry units.
//!
//! [`Unitized`] is the explicit contract a type opts into. [`HasUnits`] is the one place where a value is
//! *probed* for units, so [`crate::has_units`] and [`crate::strip_units`] can accept plain numbers and
//! foreign types that expose only part of the contract.

use unitized_core::{Unit, UnitDescriptor};

use crate::error::UnitizedResult;
use crate::value::ValueWithUnits;

/// Abstract contract for things with units.
///
/// Implementors expose a magnitude, the units it is expressed in, and a conversion into other units.
/// Arithmetic implemented on an implementor is expected to propagate units the way
/// [`ValueWithUnits`] does.
pub trait Unitized {
    /// Unit descriptor the value is expressed in.
    type Units: UnitDescriptor;

    /// The bare magnitude.
    fn value(&self) -> f64;

    /// The units the magnitude is expressed in.
    fn units(&self) -> &Self::Units;

    /// The same quantity expressed in `target`.
    fn in_units(&self, target: &Self::Units) -> UnitizedResult<ValueWithUnits<Self::Units>>;
}

/// Capability probe used by [`crate::has_units`] and [`crate::strip_units`].
///
/// The probe asks for exactly three things: the units, the magnitude and a conversion method. Each may be
/// absent. Every [`Unitized`] type gets a full implementation for free; implement this trait directly
/// for types that only expose part of it.
pub trait HasUnits {
    /// Unit descriptor reported by [`HasUnits::probe_units`].
    type Units: UnitDescriptor;

    /// Units attached to the value, if any.
    fn probe_units(&self) -> Option<&Self::Units>;

    /// Bare magnitude, if the value exposes one.
    fn probe_value(&self) -> Option<f64>;

    /// Magnitude converted into `target`, if the value knows how to convert itself.
    fn probe_in_units(&self, target: &Self::Units) -> Option<UnitizedResult<f64>> {
        let _ = target;
        None
    }
}

impl<T: Unitized> HasUnits for T {
    type Units = T::Units;

    fn probe_units(&self) -> Option<&T::Units> {
        Some(Unitized::units(self))
    }

    fn probe_value(&self) -> Option<f64> {
        Some(Unitized::value(self))
    }

    fn probe_in_units(&self, target: &T::Units) -> Option<UnitizedResult<f64>> {
        Some(Unitized::in_units(self, target).map(|converted| converted.value()))
    }
}

impl HasUnits for f64 {
    type Units = Unit;

    fn probe_units(&self) -> Option<&Unit> {
        None
    }

    fn probe_value(&self) -> Option<f64> {
        Some(*self)
    }
}

impl HasUnits for f32 {
    type Units = Unit;

    fn probe_units(&self) -> Option<&Unit> {
        None
    }

    fn probe_value(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}
