//! FDIV.D verification pipeline.
//!
//! This module reconstructs IEEE-754 double-precision division at the bit
//! level, stage for stage, the way the hardware divider computes it. It
//! performs the following:
//! 1. **Decomposition:** Operand split into sign, exponent, and mantissa.
//! 2. **Pre-normalization:** Divisor mantissa aligned so its top bit is set.
//! 3. **Long Division:** 53-bit restoring division into a 106-bit composite.
//! 4. **Alignment:** Left shift to normalize, then right shift for denormal
//!    and near-zero exponents.
//! 5. **Rounding:** Round-to-nearest-even over the retained 53 bits.
//! 6. **Classification:** NaN, infinity, overflow, underflow, divide-by-zero.
//! 7. **Result Multiplexing:** Priority selection of the final fields.
//!
//! The model exists to cross-check hardware netlists, so it reproduces the
//! reference unit exactly, including its quirks: the zero test inspects only
//! sign and exponent, and halfway detection ignores residue beyond the
//! 105-bit window. Disagreements with the native divide are expected for
//! those inputs and are surfaced as diagnostics, never as errors.

use crate::common::reg::{F64_EXP_MASK, F64_MANT_MASK, Reg64};

/// Restoring long divider (quotient composite producer).
pub mod idiv53;

use idiv53::idiv53;

/// Implied leading mantissa bit of a normalized double.
pub const HIDDEN_BIT: u64 = 0x0010_0000_0000_0000;

/// All 53 retained mantissa bits set; rounding up from here carries into the
/// exponent.
pub const MANT_ONES: u64 = 0x001F_FFFF_FFFF_FFFF;

/// Discarded-bit window holding exactly one half ULP (guard bit set, rest clear).
pub const HALF_ULP: u64 = 0x0008_0000_0000_0000;

/// Quiet bit of the 52-bit mantissa field.
pub const QUIET_BIT: u64 = 0x0008_0000_0000_0000;

/// Width of the alignment window in bits.
const WINDOW_BITS: u32 = 105;

/// Mask covering the alignment window.
const WINDOW_MASK: u128 = (1 << WINDOW_BITS) - 1;

/// Exponent bias of an IEEE-754 double.
const EXP_BIAS: i64 = 1023;

/// Outcome of one shadowed division.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FdivResult {
    /// Bit pattern produced by the native divide; this is what gets delivered.
    pub native: u64,
    /// Bit pattern produced by the reference pipeline.
    pub model: u64,
}

impl FdivResult {
    /// Returns `true` when both paths agree bit-for-bit.
    pub const fn matches(&self) -> bool {
        self.native == self.model
    }
}

/// Runs the native divide and the reference pipeline side by side.
///
/// # Arguments
///
/// * `a_bits` - Dividend as raw double bits.
/// * `b_bits` - Divisor as raw double bits.
pub fn fdiv_check(a_bits: u64, b_bits: u64) -> FdivResult {
    let native = (f64::from_bits(a_bits) / f64::from_bits(b_bits)).to_bits();
    FdivResult {
        native,
        model: fdiv_model(a_bits, b_bits),
    }
}

/// Computes `a / b` through the bit-level reference pipeline.
///
/// # Arguments
///
/// * `a_bits` - Dividend as raw double bits.
/// * `b_bits` - Divisor as raw double bits.
///
/// # Returns
///
/// The quotient as raw double bits, exactly as the hardware unit forms it.
pub fn fdiv_model(a_bits: u64, b_bits: u64) -> u64 {
    let a = Reg64::from_bits(a_bits);
    let b = Reg64::from_bits(b_bits);

    let (sign_a, exp_a) = (a.sign(), a.exponent());
    let (sign_b, exp_b) = (b.sign(), b.exponent());

    // Zero detection checks sign and exponent only; the mantissa is not
    // inspected. Kept as the netlist has it.
    let zero_a = sign_a == 0 && exp_a == 0;
    let zero_b = sign_b == 0 && exp_b == 0;

    let mant_a = a.mantissa() | if exp_a != 0 { HIDDEN_BIT } else { 0 };
    let mant_b = b.mantissa() | if exp_b != 0 { HIDDEN_BIT } else { 0 };

    // Pre-normalize the divisor so its top bit sits at position 52.
    let mut pre_shift: u32 = 0;
    while pre_shift < 52 && (mant_b >> (52 - pre_shift)) & 1 == 0 {
        pre_shift += 1;
    }
    let divisor = mant_b << pre_shift;

    let div = idiv53(mant_a, divisor);

    // Left-align the quotient so its leading bit lands at window index 104.
    let mant_align = (div.bits << div.shift) & WINDOW_MASK;

    let exp_ab = exp_a as i64 - exp_b as i64 + EXP_BIAS;
    let mut exp_shift = pre_shift as i64 - div.shift as i64;
    if exp_b == 0 && exp_a != 0 {
        exp_shift -= 1;
    }
    let exp_align = exp_ab + exp_shift;

    // Denormal and near-zero results are shifted back right.
    let mut post_shift: i64 = 0;
    if exp_align <= 0 {
        post_shift = -exp_align;
        if exp_b != 0 && exp_a != 0 {
            post_shift += 1;
        }
    }

    let mant_post = if post_shift >= i64::from(WINDOW_BITS) {
        0
    } else {
        mant_align >> post_shift
    };

    let mant_short = (mant_post >> 52) as u64 & MANT_ONES;
    let discarded = mant_post as u64 & F64_MANT_MASK;

    let mant_ones = mant_short == MANT_ONES;

    // Round to nearest, ties to even: suppress the round-up only when the
    // discarded window is exactly half an ULP and the retained LSB is even.
    let lsb_odd = (mant_post >> 52) & 1 == 1;
    let guard = (mant_post >> 51) & 1 == 1;
    let halfway = discarded == HALF_ULP;
    let rnd_bit = guard && !(halfway && !lsb_odd);

    // Exceptions, judged on the 13-bit aligned exponent.
    let nan_res = exp_align == 0x7FF;
    let overflow = (exp_align >> 12) & 1 == 0 && (exp_align >> 11) & 1 == 1;
    let underflow = (exp_align >> 12) & 1 == 1 && (exp_align >> 11) & 1 == 1;

    // Operand borders.
    let exp_ones_a = exp_a == F64_EXP_MASK;
    let exp_ones_b = exp_b == F64_EXP_MASK;
    let mant_zero_a = a.mantissa() == 0;
    let mant_zero_b = b.mantissa() == 0;
    let inf_a = exp_ones_a && mant_zero_a;
    let inf_b = exp_ones_b && mant_zero_b;
    let nan_a = exp_ones_a && !mant_zero_a;
    let nan_b = exp_ones_b && !mant_zero_b;
    let div_on_zero = zero_b || mant_b == 0;

    // Result multiplexers, in the hardware's priority order.
    let sign = if inf_a && inf_b {
        1
    } else if nan_a {
        sign_a
    } else if nan_b {
        sign_b
    } else if div_on_zero && zero_a {
        1
    } else {
        sign_a ^ sign_b
    };

    let exponent = if nan_b {
        exp_b
    } else if (underflow || zero_a || zero_b) && !div_on_zero {
        0
    } else if overflow || div_on_zero {
        F64_EXP_MASK
    } else if exp_ones_a {
        exp_a
    } else if inf_b || exp_align < 0 {
        0
    } else {
        exp_align as u64 + u64::from(mant_ones && rnd_bit && !overflow)
    };

    let mantissa = if (zero_a && zero_b) || (inf_a && inf_b) {
        QUIET_BIT
    } else if nan_a {
        a.mantissa() | QUIET_BIT
    } else if nan_b {
        b.mantissa() | QUIET_BIT
    } else if overflow || nan_res || inf_a || inf_b {
        0
    } else {
        mant_short + u64::from(rnd_bit)
    };

    Reg64::pack(sign, exponent, mantissa).bits()
}
