//! Functional RISC-V simulator core library.
//!
//! This crate implements the instruction-level execution core used by the debugger with the following:
//! 1. **ISA:** Wildcard opcode templates, a conflict-checked registry, and the decoder.
//! 2. **Core:** Unified register file, CSR state, and instruction handlers.
//! 3. **FPU:** A bit-level FDIV.D reference pipeline run beside the native divide.
//! 4. **SoC:** The debug-port access path used for capability (`misa`) updates.
//! 5. **Simulation:** Configuration and verification statistics collection.

/// Common types (registers, traps, registry and debug-port errors).
pub mod common;
/// Simulator configuration (defaults, JSON deserialization).
pub mod config;
/// CPU core (architectural state, instruction handlers, FPU units).
pub mod core;
/// Instruction set (templates, registry, field extraction, RV64D).
pub mod isa;
/// System-on-chip access path (debug port, extension enabling).
pub mod soc;
/// Verification statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds architectural state and the opcode registry.
pub use crate::core::Cpu;
