//! Instruction set support.
//!
//! This module groups everything related to instruction encodings:
//! 1. **Fields:** Extraction of R-type fields from raw 32-bit words.
//! 2. **Templates:** Wildcard bit patterns compiled to mask/value pairs.
//! 3. **Registry:** Conflict-checked template-to-handler dispatch.
//! 4. **RV64D:** Double-precision opcode patterns and handler installation.

/// R-type field extraction from raw instruction words.
pub mod instruction;
/// Opcode template registry and decoder.
pub mod registry;
/// Double-precision (D extension) patterns and installation.
pub mod rv64d;
/// Wildcard bit-pattern compilation.
pub mod template;

/// Length in bytes of every instruction this core executes.
///
/// Handlers report their own length so the interface is ready for
/// variable-length encodings, but the base set is uniformly 32-bit.
pub const INSTRUCTION_BYTES: u32 = 4;
