//! Architectural state.
//!
//! This module holds the register-level state of the functional core:
//! 1. **Register File:** The unified 32-entry 64-bit register file.
//! 2. **CSRs:** Control and status registers, including `misa`.

/// Control and status registers.
pub mod csr;
/// Unified register file.
pub mod regfile;
