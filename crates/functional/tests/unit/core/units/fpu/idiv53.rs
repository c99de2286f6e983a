//! # Restoring Divider Tests
//!
//! Tests for the 53-bit long divider feeding the FDIV.D pipeline.

use rvdbg_core::core::units::fpu::HIDDEN_BIT;
use rvdbg_core::core::units::fpu::idiv53::idiv53;

/// Index of the integer quotient bit in the composite.
const TOP: u32 = 104;

#[test]
fn test_equal_operands_quotient_one() {
    let q = idiv53(HIDDEN_BIT, HIDDEN_BIT);
    assert_eq!(q.bits, 1u128 << TOP);
    assert_eq!(q.shift, 0);
    assert!(q.over_bit);
    assert!(q.zero_resid);
}

#[test]
fn test_three_halves() {
    // 1.5 / 1.0: integer bit plus the first fraction bit.
    let q = idiv53(HIDDEN_BIT | HIDDEN_BIT >> 1, HIDDEN_BIT);
    assert_eq!(q.bits, 1u128 << TOP | 1u128 << (TOP - 1));
    assert_eq!(q.shift, 0);
    assert!(q.over_bit);
    assert!(q.zero_resid);
}

#[test]
fn test_one_half_normalizes_with_shift_one() {
    let q = idiv53(HIDDEN_BIT >> 1, HIDDEN_BIT);
    assert_eq!(q.bits, 1u128 << (TOP - 1));
    assert_eq!(q.shift, 1);
    assert!(!q.over_bit);
    assert!(q.zero_resid);
}

#[test]
fn test_two_thirds_repeats_and_never_terminates() {
    // 2^52 / (3 * 2^51): quotient 0.101010...
    let q = idiv53(HIDDEN_BIT, HIDDEN_BIT | HIDDEN_BIT >> 1);
    assert_eq!(q.shift, 1);
    assert!(!q.over_bit);
    assert!(!q.zero_resid);
    // Every second bit set, starting just below the integer bit.
    for j in 1..=104u32 {
        let bit = (q.bits >> (TOP - j)) & 1;
        assert_eq!(bit, u128::from(j % 2 == 1), "quotient bit {j}");
    }
}

#[test]
fn test_zero_dividend() {
    let q = idiv53(0, HIDDEN_BIT);
    assert_eq!(q.bits, 0);
    assert_eq!(q.shift, 0);
    assert!(!q.over_bit);
    assert!(q.zero_resid);
}

#[test]
fn test_zero_divisor_yields_empty_composite() {
    let q = idiv53(HIDDEN_BIT, 0);
    assert_eq!(q.bits, 0);
    assert_eq!(q.shift, 0);
    assert!(!q.over_bit);
    assert!(!q.zero_resid);
}

#[test]
fn test_small_dividend_deep_shift() {
    // 1 / 2^52: the single quotient bit sits 52 places down.
    let q = idiv53(1, HIDDEN_BIT);
    assert_eq!(q.bits, 1u128 << (TOP - 52));
    assert_eq!(q.shift, 52);
    assert!(q.zero_resid);
}

#[test]
fn test_carry_lane_stays_clear() {
    // The quotient is strictly below two for in-range inputs, so bit 105
    // can never be produced.
    for (dividend, divisor) in [
        (HIDDEN_BIT | 0xF_FFFF_FFFF_FFFF, HIDDEN_BIT),
        (HIDDEN_BIT, HIDDEN_BIT),
        (0xF_FFFF_FFFF_FFFF, HIDDEN_BIT | 1),
    ] {
        let q = idiv53(dividend, divisor);
        assert_eq!((q.bits >> 105) & 1, 0);
    }
}
