//! Common types shared across the simulator core.
//!
//! This module collects the building blocks used by every other subsystem:
//! 1. **Registers:** The 64-bit register cell with IEEE-754 field views.
//! 2. **Errors:** Traps, registry construction faults, and debug-port faults.

/// Error and trap definitions.
pub mod error;
/// 64-bit register cell with integer and floating-point views.
pub mod reg;

pub use error::{BuildError, ConfigError, RegistryError, TapError, Trap};
pub use reg::Reg64;
