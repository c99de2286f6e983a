//! 53-bit restoring long divider.
//!
//! This module implements the mantissa divider feeding the FDIV.D reference
//! pipeline. It mirrors the hardware unit: one quotient bit is resolved per
//! iteration by a trial subtraction, producing a 106-bit quotient composite
//! alongside normalization metadata.

/// Number of fractional quotient bits resolved after the integer bit.
const FRACTION_BITS: u32 = 104;

/// Buffer index of the integer quotient bit.
const INTEGER_BIT: u32 = 104;

/// Divider outputs.
///
/// `bits` holds the quotient composite: the integer bit at index 104 and the
/// bit of weight `2^-j` at index `104 - j`. Index 105 is the carry lane and is
/// always clear for in-range inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Idiv53 {
    /// Quotient composite (106 bits, LSB-first indexing by significance).
    pub bits: u128,
    /// Index of the first set quotient bit; zero when the quotient is at
    /// least one or identically zero.
    pub shift: u32,
    /// Set when the quotient reached one (integer bit resolved to 1).
    pub over_bit: bool,
    /// Set when the division terminated with no remainder.
    pub zero_resid: bool,
}

/// Divides a 53-bit dividend by a pre-normalized 53-bit divisor.
///
/// The divisor must either be zero or have bit 52 set (the pre-normalization
/// stage guarantees this). A zero divisor produces an all-zero composite; the
/// downstream result multiplexers mask that case via divide-by-zero detection.
///
/// # Arguments
///
/// * `dividend` - Composed mantissa of the dividend (implied bit included).
/// * `divisor` - Pre-normalized composed mantissa of the divisor.
///
/// # Returns
///
/// The quotient composite and normalization metadata.
pub fn idiv53(dividend: u64, divisor: u64) -> Idiv53 {
    if divisor == 0 {
        return Idiv53::default();
    }

    let mut remainder = dividend;
    let mut bits = 0u128;
    let mut first_set: Option<u32> = None;

    // Restoring division: the remainder stays below the divisor (< 2^53)
    // after each step, so the doubling never overflows u64.
    for j in 0..=FRACTION_BITS {
        if remainder >= divisor {
            remainder -= divisor;
            bits |= 1u128 << (INTEGER_BIT - j);
            if first_set.is_none() {
                first_set = Some(j);
            }
        }
        remainder <<= 1;
    }

    Idiv53 {
        bits,
        shift: first_set.unwrap_or(0),
        over_bit: (bits >> INTEGER_BIT) & 1 == 1,
        zero_resid: remainder == 0,
    }
}
