//! System-on-chip access path.
//!
//! The functional core exposes its CSR bank to the debugger through a flat
//! memory-mapped debug port; this module defines that port and the
//! capability-update helper built on it.

/// Debug port trait, CSR window mapping, and extension enabling.
pub mod tap;

pub use tap::{DebugPort, enable_extension};
