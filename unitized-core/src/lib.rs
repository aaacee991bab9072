//! Runtime unit descriptors for unitized values.
//!
//! `unitized-core` provides the unit side of the `unitized` workspace:
//!
//! - A [`Dimension`] is a vector of integer exponents over seven base dimensions.
//! - The [`registry`] maps unit symbols (`"m"`, `"Eh"`, `"kcal"`, …) to a dimension and a scale.
//! - A [`Unit`] is a product of registered symbols raised to integer exponents.
//! - [`UnitDescriptor`] is the contract a value type relies on: validation, composition and
//!   conversion factors.
//!
//! Most users should depend on `unitized` (the facade crate), which adds the value type itself.
//!
//! # What this crate does not try to solve
//!
//! - Parsing unit expressions from strings.
//! - A complete SI table; only the units in [`units`] are registered.
//! - Affine units (°C, °F); every registered unit is a pure scale of its canonical unit.
//!
//! # Quick start
//!
//! ```rust
//! use unitized_core::{units, UnitDescriptor};
//!
//! let kcal_mol = units::kilocalorie() / units::mole();
//! let kj_mol = units::kilojoule() / units::mole();
//! let factor = kcal_mol.conversion_factor(&kj_mol).unwrap();
//! assert!((factor - 4.184).abs() < 1e-12);
//!
//! assert!(units::meter().conversion_factor(&units::second()).is_err());
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`Unit`] (a symbol → exponent map) and [`Dimension`].

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod macros;
pub mod registry;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{BaseDimension, Dimension, BASE_DIMENSIONS};
pub use error::{UnitError, UnitResult};
pub use registry::UnitMeta;
pub use unit::{Unit, UnitDescriptor};

/// Predefined units, one constructor per registry entry.
pub mod units;
