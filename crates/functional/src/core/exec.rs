//! Instruction handlers.
//!
//! This module implements the execution semantics of the registered
//! instructions. Arithmetic runs on the host FPU; FDIV.D additionally runs
//! the bit-level reference pipeline and reports any disagreement.

use tracing::warn;

use crate::common::Reg64;
use crate::core::CpuState;
use crate::core::units::fpu;
use crate::isa::INSTRUCTION_BYTES;
use crate::isa::instruction::InstructionBits;

/// Applies a binary double-precision operation to the operand registers.
fn fp_binary(state: &mut CpuState, word: u32, op: impl Fn(f64, f64) -> f64) -> u32 {
    let a = state.regs.read_f64(word.rs1());
    let b = state.regs.read_f64(word.rs2());
    state.regs.write_f64(word.rd(), op(a, b));
    INSTRUCTION_BYTES
}

/// FADD.D: double-precision addition.
pub fn fadd_d(state: &mut CpuState, word: u32) -> u32 {
    fp_binary(state, word, |a, b| a + b)
}

/// FSUB.D: double-precision subtraction.
pub fn fsub_d(state: &mut CpuState, word: u32) -> u32 {
    fp_binary(state, word, |a, b| a - b)
}

/// FMUL.D: double-precision multiplication.
pub fn fmul_d(state: &mut CpuState, word: u32) -> u32 {
    fp_binary(state, word, |a, b| a * b)
}

/// FDIV.D: double-precision division with the verification shadow.
///
/// The native quotient is always what lands in the destination register.
/// When verification is enabled the reference pipeline runs beside it; a
/// bit-level disagreement emits one advisory diagnostic and bumps the
/// mismatch counter.
pub fn fdiv_d(state: &mut CpuState, word: u32) -> u32 {
    let a = state.regs.read(word.rs1()).bits();
    let b = state.regs.read(word.rs2()).bits();

    if state.verify_fpu {
        let check = fpu::fdiv_check(a, b);
        state.regs.write(word.rd(), Reg64::from_bits(check.native));
        state.stats.fdiv_checked += 1;
        if !check.matches() {
            state.stats.fdiv_mismatches += 1;
            warn!("FDIV.D {:016x} != {:016x}", check.native, check.model);
        }
    } else {
        let quotient = f64::from_bits(a) / f64::from_bits(b);
        state.regs.write_f64(word.rd(), quotient);
    }
    INSTRUCTION_BYTES
}
