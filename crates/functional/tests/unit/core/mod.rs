//! Core unit tests.

/// Instruction handler tests through the full CPU.
pub mod exec;
/// Execution unit tests.
pub mod units;
