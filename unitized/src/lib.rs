//! Floating-point values that carry physical units.
//!
//! `unitized` pairs an `f64` magnitude with a runtime unit descriptor from [`unitized_core`] and gives
//! the pair unit-aware arithmetic:
//!
//! - [`ValueWithUnits`] multiplies and divides like a number while composing its units, and adds or
//!   subtracts only after converting the right operand into the left operand's units.
//! - [`Unitized`] is the contract for things with units; [`HasUnits`] is the probe behind
//!   [`has_units`] and [`strip_units`], which also accept plain numbers.
//! - [`UnitizedConfig`] controls whether unit arguments are validated.
//! - [`compare_values`] and friends check computed results against references to a number of
//!   decimal places.
//!
//! # Quick start
//!
//! ```rust
//! use unitized::{strip_units, units, ValueWithUnits};
//!
//! let barrier = ValueWithUnits::new(12.5, units::kilocalorie() / units::mole()).unwrap();
//! let in_kj = barrier.in_units(&(units::kilojoule() / units::mole())).unwrap();
//! assert!((in_kj.value() - 52.3).abs() < 1e-12);
//!
//! let length = ValueWithUnits::new(2.0, units::angstrom()).unwrap();
//! let area = &length * &length;
//! assert_eq!(area.to_string(), "4.0 Å^2");
//!
//! let pm = strip_units(&length, Some(&units::picometer()), None).unwrap();
//! assert!((pm - 200.0).abs() < 1e-9);
//! ```
//!
//! # Validation
//!
//! Construction validates units against the registry unless type checking is turned off:
//!
//! ```rust
//! use unitized::{Unit, UnitizedConfig, ValueWithUnits};
//!
//! assert!(ValueWithUnits::new(3.0, Unit::named("not-a-unit")).is_err());
//! assert!(
//!     ValueWithUnits::with_config(3.0, Unit::named("not-a-unit"), &UnitizedConfig::unchecked())
//!         .is_ok()
//! );
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod capability;
mod compare;
mod config;
mod error;
mod strip;
mod value;

pub use unitized_core::*;

pub use capability::{HasUnits, Unitized};
pub use compare::{compare_integers, compare_quantities, compare_strings, compare_values};
pub use config::UnitizedConfig;
pub use error::{UnitizedError, UnitizedResult};
pub use strip::{has_units, strip_units, strip_units_with};
pub use value::{Operand, ValueWithUnits};
