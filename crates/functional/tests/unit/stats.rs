//! # Verification Statistics Tests

use rvdbg_core::stats::VerifyStats;

#[test]
fn test_default_counters_are_zero() {
    let stats = VerifyStats::default();
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.fdiv_checked, 0);
    assert_eq!(stats.fdiv_mismatches, 0);
}

#[test]
fn test_mismatch_rate_with_no_checks() {
    let stats = VerifyStats::default();
    assert_eq!(stats.mismatch_rate(), 0.0);
}

#[test]
fn test_mismatch_rate() {
    let stats = VerifyStats {
        instructions_retired: 10,
        fdiv_checked: 4,
        fdiv_mismatches: 1,
    };
    assert_eq!(stats.mismatch_rate(), 0.25);
}
