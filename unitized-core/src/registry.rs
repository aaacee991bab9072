//! Unit registry and conversion logic.
//!
//! The registry maps unit symbols to their metadata (dimension, scaling factor, name) and implements
//! conversion between compatible atomic units. Composite units in [`crate::Unit`] resolve every factor
//! through this registry.
//!
//! # Conversion Formula
//!
//! Conversions go through the canonical unit of each dimension:
//!
//! ```text
//! v_canonical = v_src * src.scale_to_canonical
//! v_dst = v_canonical / dst.scale_to_canonical
//! ```

use crate::dimension::Dimension;
use crate::error::{UnitError, UnitResult};
use crate::units;

/// Metadata about an atomic unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitMeta {
    /// Printable symbol, also the registry key.
    pub symbol: &'static str,
    /// Human-readable name of the unit.
    pub name: &'static str,
    /// The dimension this unit belongs to.
    pub dim: Dimension,
    /// Scaling factor to convert to the canonical unit for this dimension.
    ///
    /// For example, for kilojoule: `scale_to_canonical = 1000.0` (1 kJ = 1000 J).
    pub scale_to_canonical: f64,
}

/// Returns metadata for the given symbol, or `None` if it is not registered.
#[inline]
pub fn meta(symbol: &str) -> Option<UnitMeta> {
    units::lookup(symbol)
}

/// Returns `true` if `symbol` is registered.
#[inline]
pub fn is_known(symbol: &str) -> bool {
    meta(symbol).is_some()
}

/// Iterates over every registered unit.
pub fn known_units() -> impl Iterator<Item = &'static UnitMeta> {
    units::ALL.iter()
}

/// Returns the dimension for the given symbol.
#[inline]
pub fn dimension(symbol: &str) -> Option<Dimension> {
    meta(symbol).map(|m| m.dim)
}

/// Checks if two symbols name units of the same dimension.
///
/// Also returns `false` if either unit is not recognized.
#[inline]
pub fn compatible(a: &str, b: &str) -> bool {
    match (dimension(a), dimension(b)) {
        (Some(da), Some(db)) => da == db,
        _ => false,
    }
}

/// Converts a value from one atomic unit to another.
///
/// # Errors
///
/// * [`UnitError::UnknownUnit`] if either symbol is not recognized
/// * [`UnitError::IncompatibleDimensions`] if the units have different dimensions
///
/// # Example
///
/// ```rust
/// use unitized_core::registry;
///
/// let cm = registry::convert_value(1500.0, "m", "cm").unwrap();
/// assert!((cm - 150_000.0).abs() < 1e-9);
/// ```
pub fn convert_value(v: f64, src: &str, dst: &str) -> UnitResult<f64> {
    let src_meta = meta(src).ok_or_else(|| UnitError::UnknownUnit(src.to_string()))?;
    let dst_meta = meta(dst).ok_or_else(|| UnitError::UnknownUnit(dst.to_string()))?;

    if src_meta.dim != dst_meta.dim {
        return Err(UnitError::IncompatibleDimensions {
            from: src.to_string(),
            to: dst.to_string(),
        });
    }

    if src == dst {
        return Ok(v);
    }

    let v_canonical = v * src_meta.scale_to_canonical;
    Ok(v_canonical / dst_meta.scale_to_canonical)
}
