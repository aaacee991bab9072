//! Predefined units.
//!
//! Scales are expressed relative to the canonical SI unit of each dimension (metre, kilogram, second,
//! coulomb, kelvin, mole, radian; joule for energy). Physical constants follow CODATA 2018; the SI
//! defining constants (elementary charge, thermochemical calorie) are exact.
//!
//! ```rust
//! use unitized_core::{units, UnitDescriptor};
//!
//! let factor = units::hartree().conversion_factor(&units::electronvolt()).unwrap();
//! assert!((factor - 27.211_386_245_988).abs() < 1e-9);
//! ```

use crate::Dimension;
use core::f64::consts::PI;

crate::define_units! {
    // ─────────────────────────────────────────────────────────────────────────
    // Length
    // ─────────────────────────────────────────────────────────────────────────
    /// Metre (SI base unit).
    meter => ("m", "meter", Dimension::LENGTH, 1.0),
    /// Centimetre (`1e-2 m`).
    centimeter => ("cm", "centimeter", Dimension::LENGTH, 1e-2),
    /// Millimetre (`1e-3 m`).
    millimeter => ("mm", "millimeter", Dimension::LENGTH, 1e-3),
    /// Nanometre (`1e-9 m`).
    nanometer => ("nm", "nanometer", Dimension::LENGTH, 1e-9),
    /// Picometre (`1e-12 m`).
    picometer => ("pm", "picometer", Dimension::LENGTH, 1e-12),
    /// Ångström (`1e-10 m`).
    angstrom => ("Å", "angstrom", Dimension::LENGTH, 1e-10),
    /// Bohr radius.
    bohr => ("bohr", "bohr", Dimension::LENGTH, 5.291_772_109_03e-11),

    // ─────────────────────────────────────────────────────────────────────────
    // Time
    // ─────────────────────────────────────────────────────────────────────────
    /// Second (SI base unit).
    second => ("s", "second", Dimension::TIME, 1.0),
    /// Millisecond.
    millisecond => ("ms", "millisecond", Dimension::TIME, 1e-3),
    /// Microsecond.
    microsecond => ("us", "microsecond", Dimension::TIME, 1e-6),
    /// Nanosecond.
    nanosecond => ("ns", "nanosecond", Dimension::TIME, 1e-9),
    /// Picosecond.
    picosecond => ("ps", "picosecond", Dimension::TIME, 1e-12),
    /// Femtosecond.
    femtosecond => ("fs", "femtosecond", Dimension::TIME, 1e-15),
    /// Minute (`60 s`).
    minute => ("min", "minute", Dimension::TIME, 60.0),
    /// Hour (`3600 s`).
    hour => ("h", "hour", Dimension::TIME, 3_600.0),

    // ─────────────────────────────────────────────────────────────────────────
    // Mass
    // ─────────────────────────────────────────────────────────────────────────
    /// Kilogram (SI base unit).
    kilogram => ("kg", "kilogram", Dimension::MASS, 1.0),
    /// Gram.
    gram => ("g", "gram", Dimension::MASS, 1e-3),
    /// Unified atomic mass unit (dalton).
    atomic_mass_unit => ("amu", "atomic mass unit", Dimension::MASS, 1.660_539_066_60e-27),
    /// Electron rest mass.
    electron_mass => ("m_e", "electron mass", Dimension::MASS, 9.109_383_701_5e-31),

    // ─────────────────────────────────────────────────────────────────────────
    // Energy
    // ─────────────────────────────────────────────────────────────────────────
    /// Joule (SI derived unit).
    joule => ("J", "joule", Dimension::ENERGY, 1.0),
    /// Kilojoule.
    kilojoule => ("kJ", "kilojoule", Dimension::ENERGY, 1e3),
    /// Thermochemical calorie (`4.184 J`).
    calorie => ("cal", "calorie", Dimension::ENERGY, 4.184),
    /// Thermochemical kilocalorie (`4184 J`).
    kilocalorie => ("kcal", "kilocalorie", Dimension::ENERGY, 4_184.0),
    /// Electronvolt (exact since the 2019 SI redefinition).
    electronvolt => ("eV", "electronvolt", Dimension::ENERGY, 1.602_176_634e-19),
    /// Hartree (atomic unit of energy).
    hartree => ("Eh", "hartree", Dimension::ENERGY, 4.359_744_722_207_1e-18),

    // ─────────────────────────────────────────────────────────────────────────
    // Amount, charge, temperature, angle
    // ─────────────────────────────────────────────────────────────────────────
    /// Mole (SI base unit).
    mole => ("mol", "mole", Dimension::AMOUNT, 1.0),
    /// Coulomb (SI derived unit).
    coulomb => ("C", "coulomb", Dimension::CHARGE, 1.0),
    /// Elementary charge.
    elementary_charge => ("e", "elementary charge", Dimension::CHARGE, 1.602_176_634e-19),
    /// Kelvin (SI base unit).
    kelvin => ("K", "kelvin", Dimension::TEMPERATURE, 1.0),
    /// Radian.
    radian => ("rad", "radian", Dimension::ANGLE, 1.0),
    /// Degree (`π/180 rad`).
    degree => ("deg", "degree", Dimension::ANGLE, PI / 180.0),
}
