//! Configuration for unitized values.
//!
//! The only setting today is whether unit arguments are validated. It is an explicit value passed to
//! constructors (see [`crate::ValueWithUnits::with_config`]) and to [`crate::strip_units_with`]. With
//! the `serde` feature it can be read from a TOML file:
//!
//! ```toml
//! [units]
//! type_checking = false
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::fs;
#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use crate::error::{UnitizedError, UnitizedResult};

/// Settings that control how unitized values are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitizedConfig {
    /// Validate unit arguments on construction and in `strip_units`.
    #[cfg_attr(feature = "serde", serde(default = "default_type_checking"))]
    pub type_checking: bool,
}

/// On-disk layout of a configuration file.
#[cfg(feature = "serde")]
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    units: UnitizedConfig,
}

fn default_type_checking() -> bool {
    true
}

impl Default for UnitizedConfig {
    fn default() -> Self {
        Self {
            type_checking: default_type_checking(),
        }
    }
}

impl UnitizedConfig {
    /// Configuration with the given validation setting.
    pub const fn new(type_checking: bool) -> Self {
        Self { type_checking }
    }

    /// Configuration with validation turned off.
    pub const fn unchecked() -> Self {
        Self::new(false)
    }

    /// Parse configuration from TOML text.
    ///
    /// A missing `[units]` table or missing key falls back to the defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> UnitizedResult<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| {
            UnitizedError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        Ok(file.units)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(UnitizedConfig)` if successful
    /// * `Err(UnitizedError::Configuration)` if the file cannot be read or parsed
    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> UnitizedResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UnitizedError::Configuration(format!("Failed to read config file: {}", e))
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded unit configuration from {} (type_checking = {})",
            path.display(),
            config.type_checking
        );
        Ok(config)
    }
}
