//! Control and Status Register (CSR) definitions and operations.
//!
//! This module implements the CSR subsystem kept by the functional core. It provides:
//! 1. **Address Definitions:** Constants for the implemented machine CSRs.
//! 2. **Field Masks:** `misa` width and extension-bit helpers.
//! 3. **Register Storage:** The `Csrs` struct for maintaining architectural state.
//! 4. **Access Logic:** Standardized read and write operations for register interaction.

/// Machine vendor ID CSR address.
pub const MVENDORID: u32 = 0xF11;

/// Machine architecture ID CSR address.
pub const MARCHID: u32 = 0xF12;

/// Machine implementation ID CSR address.
pub const MIMPID: u32 = 0xF13;

/// Machine hardware thread ID CSR address.
pub const MHARTID: u32 = 0xF14;

/// Machine ISA register CSR address.
pub const MISA: u32 = 0x301;

/// Highest CSR address representable in the 12-bit CSR space.
pub const CSR_ADDR_MAX: u32 = 0xFFF;

/// `misa` MXL field value for a 64-bit machine, pre-shifted into bits 63:62.
pub const MISA_MXL_64: u64 = 2 << 62;

/// Double-precision extension bit in `misa`.
pub const MISA_EXT_D: u64 = 1 << 3;

/// Single-precision extension bit in `misa`.
pub const MISA_EXT_F: u64 = 1 << 5;

/// Base integer ISA bit in `misa`.
pub const MISA_EXT_I: u64 = 1 << 8;

/// Control and status register bank.
///
/// Only the registers the debugger actually inspects are backed by storage;
/// reads of any other address return zero and writes to them are dropped.
#[derive(Clone, Copy, Debug)]
pub struct Csrs {
    /// Machine ISA and extensions register.
    pub misa: u64,
    /// Machine vendor ID (zero: non-commercial implementation).
    pub mvendorid: u64,
    /// Machine architecture ID.
    pub marchid: u64,
    /// Machine implementation ID.
    pub mimpid: u64,
    /// Hardware thread ID.
    pub mhartid: u64,
}

impl Default for Csrs {
    fn default() -> Self {
        Self::new()
    }
}

impl Csrs {
    /// Creates the CSR bank in its reset state.
    ///
    /// `misa` starts with only the MXL width field set; extension bits are
    /// turned on individually through the debug port.
    pub fn new() -> Self {
        Self {
            misa: MISA_MXL_64,
            mvendorid: 0,
            marchid: 0,
            mimpid: 0,
            mhartid: 0,
        }
    }

    /// Reads a CSR by address.
    ///
    /// # Arguments
    ///
    /// * `addr` - 12-bit CSR address.
    ///
    /// # Returns
    ///
    /// The register value, or zero for unimplemented addresses.
    pub fn read(&self, addr: u32) -> u64 {
        match addr {
            MISA => self.misa,
            MVENDORID => self.mvendorid,
            MARCHID => self.marchid,
            MIMPID => self.mimpid,
            MHARTID => self.mhartid,
            _ => 0,
        }
    }

    /// Writes a CSR by address.
    ///
    /// Writes to read-only ID registers and unimplemented addresses are
    /// silently dropped, matching hardware behavior.
    ///
    /// # Arguments
    ///
    /// * `addr` - 12-bit CSR address.
    /// * `val` - Value to store.
    pub fn write(&mut self, addr: u32, val: u64) {
        if addr == MISA {
            self.misa = val;
        }
    }
}
