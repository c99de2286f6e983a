//! Unified Register File.
//!
//! This module implements the register file for the functional core. It
//! performs the following:
//! 1. **Storage:** Maintains 32 unified 64-bit registers holding integer or
//!    floating-point values.
//! 2. **Invariant Enforcement:** Ensures that register 0 is hardwired to zero.
//! 3. **Views:** Raw-bit and double-precision access to each cell.

use crate::common::Reg64;

/// Unified register file.
///
/// Contains 32 registers shared by integer and floating-point operations, as
/// the functional model keeps one flat file. Register 0 is hardwired to zero
/// and cannot be modified.
#[derive(Debug)]
pub struct RegisterFile {
    regs: [Reg64; 32],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [Reg64::default(); 32],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The cell stored at the index. Register 0 always reads as zero.
    pub fn read(&self, idx: usize) -> Reg64 {
        if idx == 0 {
            Reg64::default()
        } else {
            self.regs[idx]
        }
    }

    /// Writes a value to a register.
    ///
    /// Writes to register 0 are ignored.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The cell to store.
    pub fn write(&mut self, idx: usize, val: Reg64) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Reads a register as an IEEE-754 double.
    pub fn read_f64(&self, idx: usize) -> f64 {
        self.read(idx).as_f64()
    }

    /// Writes the bit pattern of a double to a register.
    pub fn write_f64(&mut self, idx: usize, val: f64) {
        self.write(idx, Reg64::from_f64(val));
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting for debugging purposes.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            println!(
                "r{:<2}={:#018x} r{:<2}={:#018x}",
                i,
                self.regs[i].bits(),
                i + 1,
                self.regs[i + 1].bits()
            );
        }
    }
}
