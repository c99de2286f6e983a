//! Configuration system for the simulator core.
//!
//! This module defines the configuration structure used to parameterize the
//! functional core. It provides:
//! 1. **Defaults:** Baseline ISA string and verification settings.
//! 2. **Deserialization:** JSON intake from the debugger front end.
//!
//! Configuration is supplied via JSON from the debugger or use `Config::default()` directly.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the functional core.
mod defaults {
    /// ISA extension letters enabled at reset.
    ///
    /// `I` is the base integer set; `D` brings in the double-precision
    /// templates and the FDIV.D verification pipeline.
    pub const EXTENSIONS: &str = "ID";

    /// Whether the FPU verification shadow runs beside native arithmetic.
    pub const VERIFY_FPU: bool = true;
}

/// Root configuration for the functional core.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extension letters (`A..=Z`) to enable; each letter installs its opcode
    /// templates and sets the matching `misa` capability bit.
    pub extensions: String,
    /// Run the bit-level FPU reference pipeline beside every native divide.
    pub verify_fpu: bool,
}

impl Default for Config {
    /// Returns the baseline configuration (`I` + `D`, verification on).
    fn default() -> Self {
        Self {
            extensions: defaults::EXTENSIONS.to_owned(),
            verify_fpu: defaults::VERIFY_FPU,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON text; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed or
    /// contains unknown fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
