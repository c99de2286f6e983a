//! Verification statistics collection and reporting.
//!
//! This module tracks the health of the FPU verification shadow. It provides:
//! 1. **Retirement:** Count of instructions executed through the registry.
//! 2. **Coverage:** Number of divides checked against the reference pipeline.
//! 3. **Mismatches:** Number of divides where the pipeline disagreed with hardware.

/// Counters describing verification activity.
///
/// All counters are monotonically increasing over the life of a CPU.
#[derive(Clone, Copy, Debug, Default)]
pub struct VerifyStats {
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,
    /// Number of FDIV.D results compared against the reference pipeline.
    pub fdiv_checked: u64,
    /// Number of FDIV.D comparisons that disagreed bit-for-bit.
    pub fdiv_mismatches: u64,
}

impl VerifyStats {
    /// Returns the fraction of checked divides that disagreed, or 0 when no
    /// divide has been checked yet.
    pub fn mismatch_rate(&self) -> f64 {
        if self.fdiv_checked == 0 {
            0.0
        } else {
            self.fdiv_mismatches as f64 / self.fdiv_checked as f64
        }
    }
}
