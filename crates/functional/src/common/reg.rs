//! 64-bit register cell.
//!
//! This module defines the value type stored in the unified register file. It provides:
//! 1. **Views:** Reinterpretation of one 64-bit cell as `u64`, `i64`, or `f64`.
//! 2. **IEEE-754 Fields:** Sign, biased exponent, and mantissa accessors for doubles.
//! 3. **Packing:** Reassembly of a double from its raw fields.

/// Bit position of the IEEE-754 double sign bit.
pub const F64_SIGN_SHIFT: u32 = 63;

/// Bit position of the IEEE-754 double exponent field.
pub const F64_EXP_SHIFT: u32 = 52;

/// Mask for the 11-bit biased exponent field (after shifting).
pub const F64_EXP_MASK: u64 = 0x7FF;

/// Mask for the 52-bit mantissa field.
pub const F64_MANT_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

/// One 64-bit register cell.
///
/// The functional core keeps integer and floating-point values in the same
/// storage; the views below reinterpret the raw bits without conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reg64(u64);

impl Reg64 {
    /// Creates a cell from raw bits.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Creates a cell holding the bit pattern of a double.
    pub const fn from_f64(val: f64) -> Self {
        Self(val.to_bits())
    }

    /// Returns the raw 64-bit contents.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns the contents reinterpreted as a signed integer.
    pub const fn as_i64(self) -> i64 {
        self.0 as i64
    }

    /// Returns the contents reinterpreted as an IEEE-754 double.
    pub const fn as_f64(self) -> f64 {
        f64::from_bits(self.0)
    }

    /// Returns the double sign bit (0 or 1).
    pub const fn sign(self) -> u64 {
        self.0 >> F64_SIGN_SHIFT
    }

    /// Returns the 11-bit biased exponent field.
    pub const fn exponent(self) -> u64 {
        (self.0 >> F64_EXP_SHIFT) & F64_EXP_MASK
    }

    /// Returns the raw 52-bit mantissa field (no implied bit).
    pub const fn mantissa(self) -> u64 {
        self.0 & F64_MANT_MASK
    }

    /// Reassembles a double from raw sign, exponent, and mantissa fields.
    ///
    /// Fields wider than their slot are truncated, matching bit-field
    /// assignment semantics in the hardware model.
    pub const fn pack(sign: u64, exponent: u64, mantissa: u64) -> Self {
        Self(
            (sign & 1) << F64_SIGN_SHIFT
                | (exponent & F64_EXP_MASK) << F64_EXP_SHIFT
                | (mantissa & F64_MANT_MASK),
        )
    }
}
