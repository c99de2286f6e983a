//! Instruction field extraction.
//!
//! This module provides bit-level access to the fields of a raw 32-bit
//! R-type instruction word: opcode, destination, sources, and function codes.

/// Bit shift for the destination register field.
const RD_SHIFT: u32 = 7;

/// Bit shift for the minor function code field.
const FUNCT3_SHIFT: u32 = 12;

/// Bit shift for the first source register field.
const RS1_SHIFT: u32 = 15;

/// Bit shift for the second source register field.
const RS2_SHIFT: u32 = 20;

/// Bit shift for the major function code field.
const FUNCT7_SHIFT: u32 = 25;

/// Mask for the 7-bit opcode field.
const OPCODE_MASK: u32 = 0x7F;

/// Mask for 5-bit register index fields.
const REG_MASK: u32 = 0x1F;

/// Mask for the 3-bit minor function code.
const FUNCT3_MASK: u32 = 0x7;

/// Mask for the 7-bit major function code.
const FUNCT7_MASK: u32 = 0x7F;

/// Field accessors for raw 32-bit instruction words.
///
/// Implemented on `u32` so handlers can pull fields straight from the word
/// they were dispatched with.
pub trait InstructionBits {
    /// Returns the 7-bit opcode (bits 6:0).
    fn opcode(self) -> u32;
    /// Returns the destination register index (bits 11:7).
    fn rd(self) -> usize;
    /// Returns the 3-bit minor function code (bits 14:12).
    fn funct3(self) -> u32;
    /// Returns the first source register index (bits 19:15).
    fn rs1(self) -> usize;
    /// Returns the second source register index (bits 24:20).
    fn rs2(self) -> usize;
    /// Returns the 7-bit major function code (bits 31:25).
    fn funct7(self) -> u32;
}

impl InstructionBits for u32 {
    #[inline]
    fn opcode(self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline]
    fn rd(self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn funct3(self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline]
    fn rs1(self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn rs2(self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn funct7(self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}
