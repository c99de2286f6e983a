//! Functional execution units.

/// Floating-point division verification pipeline.
pub mod fpu;
