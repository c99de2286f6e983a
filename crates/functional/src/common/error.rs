//! Trap and construction fault definitions.
//!
//! This module defines the error handling for the simulator core. It provides:
//! 1. **Trap Representation:** Synchronous exceptions raised during execution.
//! 2. **Registry Faults:** Template compilation and ambiguity errors caught at build time.
//! 3. **Debug-Port Faults:** Out-of-window and malformed external accesses.
//! 4. **Error Handling:** Integration with standard Rust error traits for system-level reporting.

use thiserror::Error;

/// RISC-V trap types raised by the functional core.
///
/// Traps are returned to the caller rather than handled internally; the
/// debugger decides how to surface them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Illegal instruction exception.
    ///
    /// Raised when an instruction word matches no registered opcode template.
    /// The associated value is the instruction encoding.
    #[error("IllegalInstruction({0:#010x})")]
    IllegalInstruction(u32),
}

/// Faults detected while building the opcode registry.
///
/// These are configuration errors: they are raised before any instruction
/// executes and abort CPU construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two templates can both match some concrete instruction word.
    ///
    /// Registration order would silently decide which handler wins, so the
    /// overlap is rejected outright.
    #[error("template {new} overlaps already-registered {existing}")]
    AmbiguousTemplate {
        /// Mnemonic of the template being registered.
        new: &'static str,
        /// Mnemonic of the earlier template it collides with.
        existing: &'static str,
    },

    /// A bit pattern string could not be compiled.
    ///
    /// Patterns must be exactly 32 characters drawn from `0`, `1`, `?`.
    #[error("invalid opcode pattern for {mnemonic}: {reason}")]
    InvalidPattern {
        /// Mnemonic the pattern was supplied for.
        mnemonic: &'static str,
        /// Human-readable rejection reason.
        reason: String,
    },
}

/// Faults raised on the external debug-port access path.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TapError {
    /// Access outside the mapped register window.
    #[error("debug-port access out of range: {addr:#x}")]
    OutOfRange {
        /// Faulting port address.
        addr: u64,
    },

    /// Access not aligned to the 8-byte register granule, or with a buffer
    /// of the wrong length.
    #[error("debug-port access misaligned: {addr:#x} len {len}")]
    Misaligned {
        /// Faulting port address.
        addr: u64,
        /// Supplied buffer length.
        len: usize,
    },

    /// Extension letter outside `A..=Z`.
    #[error("extension letter must be A-Z, got {0:?}")]
    BadExtension(char),
}

/// Configuration parse failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The supplied JSON could not be deserialized into a [`crate::Config`].
    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Faults that can abort CPU construction.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Opcode registry construction failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Enabling a configured extension failed.
    #[error(transparent)]
    Tap(#[from] TapError),
}
