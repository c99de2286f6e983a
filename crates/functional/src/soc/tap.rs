//! Debug port and extension enabling.
//!
//! This module defines the external access path into the core. It provides:
//! 1. **Port Trait:** Byte-buffer reads and writes over a flat address space.
//! 2. **CSR Window:** The region where the CSR bank is mapped, eight bytes
//!    per CSR address, little-endian.
//! 3. **Capability Updates:** Read-modify-write of `misa` to advertise ISA
//!    extensions.

use crate::common::TapError;
use crate::core::Cpu;
use crate::core::arch::csr;

/// Base address of the CSR window in the debug-port address space.
pub const CSR_REGION_BASE: u64 = 0x0100_0000;

/// Bytes occupied by one CSR slot.
pub const CSR_SLOT_BYTES: u64 = 8;

/// Size in bytes of the CSR window (4096 slots of 8 bytes).
pub const CSR_REGION_SIZE: u64 = (csr::CSR_ADDR_MAX as u64 + 1) * CSR_SLOT_BYTES;

/// External access port into the core.
///
/// All accesses are little-endian and must cover exactly one aligned slot.
/// Implementors must be `Send + Sync` so a debugger session can own the core
/// across threads.
pub trait DebugPort: Send + Sync {
    /// Reads `buf.len()` bytes starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a [`TapError`] when the access is outside a mapped window or
    /// not slot-aligned.
    fn read(&mut self, addr: u64, buf: &mut [u8]) -> Result<(), TapError>;

    /// Writes `buf.len()` bytes starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a [`TapError`] when the access is outside a mapped window or
    /// not slot-aligned.
    fn write(&mut self, addr: u64, buf: &[u8]) -> Result<(), TapError>;
}

/// Maps a port address to a CSR address.
fn csr_slot(addr: u64, len: usize) -> Result<u32, TapError> {
    if !(CSR_REGION_BASE..CSR_REGION_BASE + CSR_REGION_SIZE).contains(&addr) {
        return Err(TapError::OutOfRange { addr });
    }
    let offset = addr - CSR_REGION_BASE;
    if offset % CSR_SLOT_BYTES != 0 || len != CSR_SLOT_BYTES as usize {
        return Err(TapError::Misaligned { addr, len });
    }
    Ok((offset / CSR_SLOT_BYTES) as u32)
}

impl DebugPort for Cpu {
    fn read(&mut self, addr: u64, buf: &mut [u8]) -> Result<(), TapError> {
        let slot = csr_slot(addr, buf.len())?;
        buf.copy_from_slice(&self.state.csrs.read(slot).to_le_bytes());
        Ok(())
    }

    fn write(&mut self, addr: u64, buf: &[u8]) -> Result<(), TapError> {
        let slot = csr_slot(addr, buf.len())?;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(buf);
        self.state.csrs.write(slot, u64::from_le_bytes(bytes));
        Ok(())
    }
}

/// Port address of a CSR slot.
pub const fn csr_port_addr(csr_addr: u32) -> u64 {
    CSR_REGION_BASE + csr_addr as u64 * CSR_SLOT_BYTES
}

/// `misa` bit index advertised for an extension letter.
///
/// # Errors
///
/// Returns [`TapError::BadExtension`] for letters outside `A..=Z`.
pub const fn misa_bit(letter: char) -> Result<u32, TapError> {
    if letter.is_ascii_uppercase() {
        Ok(letter as u32 - 'A' as u32)
    } else {
        Err(TapError::BadExtension(letter))
    }
}

/// Advertises an ISA extension by setting its `misa` bit.
///
/// Performs a read-modify-write through the debug port so the update takes
/// the same path external tools use; all other `misa` bits are preserved.
///
/// # Arguments
///
/// * `port` - The access port of the target core.
/// * `letter` - Extension letter (`A..=Z`).
///
/// # Errors
///
/// Returns a [`TapError`] when the letter is invalid or the port access
/// fails.
pub fn enable_extension(port: &mut impl DebugPort, letter: char) -> Result<(), TapError> {
    let bit = misa_bit(letter)?;
    let addr = csr_port_addr(csr::MISA);

    let mut buf = [0u8; 8];
    port.read(addr, &mut buf)?;
    let misa = u64::from_le_bytes(buf) | 1u64 << bit;
    port.write(addr, &misa.to_le_bytes())
}
