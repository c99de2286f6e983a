//! RV64D double-precision extension.
//!
//! This module carries the opcode patterns for the implemented D-extension
//! arithmetic instructions and wires them to their handlers.

use crate::common::RegistryError;
use crate::core::exec;
use crate::isa::registry::Registry;
use crate::isa::template::Template;

/// Textual opcode patterns for the D extension.
///
/// All four share the OP-FP major opcode (`1010011`) and are distinguished by
/// funct7; register and rounding-mode fields are free.
pub mod patterns {
    /// FADD.D: double-precision addition.
    pub const FADD_D: &str = "0000001??????????????????1010011";
    /// FSUB.D: double-precision subtraction.
    pub const FSUB_D: &str = "0000101??????????????????1010011";
    /// FMUL.D: double-precision multiplication.
    pub const FMUL_D: &str = "0001001??????????????????1010011";
    /// FDIV.D: double-precision division, shadowed by the verification pipeline.
    pub const FDIV_D: &str = "0001101??????????????????1010011";
}

/// Installs the D-extension templates into a registry.
///
/// # Errors
///
/// Returns a [`RegistryError`] when a pattern fails to compile or collides
/// with an already-registered template.
pub fn install(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(
        Template::parse("FADD.D", patterns::FADD_D)?,
        Box::new(exec::fadd_d),
    )?;
    registry.register(
        Template::parse("FSUB.D", patterns::FSUB_D)?,
        Box::new(exec::fsub_d),
    )?;
    registry.register(
        Template::parse("FMUL.D", patterns::FMUL_D)?,
        Box::new(exec::fmul_d),
    )?;
    registry.register(
        Template::parse("FDIV.D", patterns::FDIV_D)?,
        Box::new(exec::fdiv_d),
    )?;
    Ok(())
}
