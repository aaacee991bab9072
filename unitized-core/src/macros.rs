//! Macros for defining the unit table.

/// Generates the registry table, the symbol lookup and one constructor per unit.
///
/// Each entry reads `constructor => ("symbol", "name", dimension, scale_to_canonical)`.
/// The expansion provides:
///
/// - `pub const ALL: &[UnitMeta]`, every entry in declaration order;
/// - `pub(crate) fn lookup(&str) -> Option<UnitMeta>`, a `match` over the symbols;
/// - `pub fn constructor() -> Unit` for every entry.
#[macro_export]
#[doc(hidden)]
macro_rules! define_units {
    ($(
        $(#[$attr:meta])*
        $ctor:ident => ($symbol:literal, $name:literal, $dim:expr, $scale:expr)
    ),* $(,)?) => {
        /// Every unit known to the registry, in declaration order.
        pub const ALL: &[$crate::registry::UnitMeta] = &[
            $(
                $crate::registry::UnitMeta {
                    symbol: $symbol,
                    name: $name,
                    dim: $dim,
                    scale_to_canonical: $scale,
                }
            ),*
        ];

        pub(crate) fn lookup(symbol: &str) -> Option<$crate::registry::UnitMeta> {
            match symbol {
                $(
                    $symbol => Some($crate::registry::UnitMeta {
                        symbol: $symbol,
                        name: $name,
                        dim: $dim,
                        scale_to_canonical: $scale,
                    }),
                )*
                _ => None,
            }
        }

        $(
            $(#[$attr])*
            #[inline]
            pub fn $ctor() -> $crate::Unit {
                $crate::Unit::named($symbol)
            }
        )*
    };
}
