//! CPU core.
//!
//! This module assembles the functional core: architectural state, the opcode
//! registry, and the execution entry point. It provides:
//! 1. **State:** Register file, CSR bank, and verification counters.
//! 2. **Construction:** Registry build with fail-fast template checking and
//!    capability (`misa`) setup through the debug port.
//! 3. **Execution:** Single-instruction decode-and-execute.

/// Architectural state (registers, CSRs).
pub mod arch;
/// Instruction handlers.
pub mod exec;
/// Execution units (FPU).
pub mod units;

use crate::common::{BuildError, Trap};
use crate::config::Config;
use crate::core::arch::csr::Csrs;
use crate::core::arch::regfile::RegisterFile;
use crate::isa::registry::Registry;
use crate::isa::rv64d;
use crate::soc::tap;
use crate::stats::VerifyStats;

/// Mutable architectural state handed to instruction handlers.
#[derive(Debug, Default)]
pub struct CpuState {
    /// Unified register file.
    pub regs: RegisterFile,
    /// Control and status registers.
    pub csrs: Csrs,
    /// Verification counters.
    pub stats: VerifyStats,
    /// Whether the FPU verification shadow is active.
    pub verify_fpu: bool,
}

/// The functional CPU.
///
/// Holds the architectural state and the opcode registry. The registry is
/// built once during construction and never changes afterwards.
#[derive(Debug)]
pub struct Cpu {
    /// Architectural state mutated by instruction execution.
    pub state: CpuState,
    registry: Registry,
}

impl Cpu {
    /// Builds a CPU from a configuration.
    ///
    /// Installs the opcode templates for every configured extension, then
    /// advertises each extension in `misa` through the debug port.
    ///
    /// # Arguments
    ///
    /// * `config` - Extension letters and verification settings.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] when a template fails to compile, two
    /// templates overlap, or an extension letter is invalid. Nothing executes
    /// on a partially built CPU.
    pub fn new(config: &Config) -> Result<Self, BuildError> {
        let mut registry = Registry::new();
        for letter in config.extensions.chars() {
            if letter == 'D' {
                rv64d::install(&mut registry)?;
            }
        }

        let mut cpu = Self {
            state: CpuState {
                regs: RegisterFile::new(),
                csrs: Csrs::new(),
                stats: VerifyStats::default(),
                verify_fpu: config.verify_fpu,
            },
            registry,
        };

        for letter in config.extensions.chars() {
            tap::enable_extension(&mut cpu, letter)?;
        }
        Ok(cpu)
    }

    /// Decodes and executes one instruction word.
    ///
    /// # Returns
    ///
    /// The instruction length in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::IllegalInstruction`] when no template matches the
    /// word; architectural state is untouched in that case.
    pub fn execute(&mut self, word: u32) -> Result<u32, Trap> {
        let len = self.registry.exec(&mut self.state, word)?;
        self.state.stats.instructions_retired += 1;
        Ok(len)
    }

    /// Read-only access to the opcode registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
