//! # Opcode Template Tests
//!
//! Tests for wildcard pattern compilation, word matching, and overlap
//! detection.

use rvdbg_core::common::RegistryError;
use rvdbg_core::isa::rv64d::patterns;
use rvdbg_core::isa::template::Template;

use crate::common::{FUNCT7_FDIV_D, OP_FP, fdiv_d, r_type};

#[test]
fn test_parse_fdiv_pattern_mask_and_value() {
    let t = Template::parse("FDIV.D", patterns::FDIV_D).unwrap();
    // funct7 and opcode are fixed; rd, funct3, rs1, rs2 are free.
    assert_eq!(t.mask, 0xFE00_007F);
    assert_eq!(t.value, 0x1A00_0053);
}

#[test]
fn test_parse_rejects_short_pattern() {
    let err = Template::parse("BAD", "0001101").unwrap_err();
    assert!(matches!(
        err,
        RegistryError::InvalidPattern { mnemonic: "BAD", .. }
    ));
}

#[test]
fn test_parse_rejects_bad_symbol() {
    let err = Template::parse("BAD", "0001101?????????????????x1010011").unwrap_err();
    assert!(matches!(err, RegistryError::InvalidPattern { .. }));
}

#[test]
fn test_matches_any_register_combination() {
    let t = Template::parse("FDIV.D", patterns::FDIV_D).unwrap();
    for (rd, rs1, rs2) in [(0, 0, 0), (1, 2, 3), (31, 31, 31), (17, 5, 29)] {
        assert!(t.matches(fdiv_d(rd, rs1, rs2)));
    }
}

#[test]
fn test_rejects_other_funct7() {
    let t = Template::parse("FDIV.D", patterns::FDIV_D).unwrap();
    let word = r_type(OP_FP, 1, 0, 2, 3, FUNCT7_FDIV_D | 0b100_0000);
    assert!(!t.matches(word));
}

#[test]
fn test_rejects_other_opcode() {
    let t = Template::parse("FDIV.D", patterns::FDIV_D).unwrap();
    let word = r_type(0b011_0011, 1, 0, 2, 3, FUNCT7_FDIV_D);
    assert!(!t.matches(word));
}

#[test]
fn test_identical_patterns_overlap() {
    let a = Template::parse("A", patterns::FDIV_D).unwrap();
    let b = Template::parse("B", patterns::FDIV_D).unwrap();
    assert!(a.overlaps(&b));
}

#[test]
fn test_distinct_funct7_do_not_overlap() {
    let div = Template::parse("FDIV.D", patterns::FDIV_D).unwrap();
    let add = Template::parse("FADD.D", patterns::FADD_D).unwrap();
    assert!(!div.overlaps(&add));
    assert!(!add.overlaps(&div));
}

#[test]
fn test_wildcard_pattern_overlaps_everything() {
    let any = Template::parse("ANY", "????????????????????????????????").unwrap();
    let div = Template::parse("FDIV.D", patterns::FDIV_D).unwrap();
    assert_eq!(any.mask, 0);
    assert!(any.overlaps(&div));
    assert!(div.overlaps(&any));
}

#[test]
fn test_overlap_requires_agreement_on_common_bits_only() {
    // Fixed bits are disjoint, so every word matching one can be extended to
    // match the other.
    let low = Template::parse("LOW", "????????????????????????????0011").unwrap();
    let high = Template::parse("HIGH", "1100????????????????????????????").unwrap();
    assert!(low.overlaps(&high));
}
