//! Wildcard opcode templates.
//!
//! This module compiles the textual bit patterns used to describe instruction
//! encodings into mask/value pairs. It provides:
//! 1. **Compilation:** `{0,1,?}` pattern strings to `(mask, value)` pairs.
//! 2. **Matching:** Constant-time word matching against a compiled template.
//! 3. **Conflict Detection:** Pairwise overlap checks used by the registry.

use std::fmt;

use crate::common::RegistryError;

/// Width of an instruction pattern in bits.
const PATTERN_WIDTH: usize = 32;

/// A compiled opcode template.
///
/// The textual form fixes some bits (`0`/`1`) and leaves the rest free (`?`);
/// the compiled form keeps the fixed positions in `mask` and their required
/// values in `value`. A word matches when `word & mask == value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template {
    /// Instruction mnemonic, e.g. `"FDIV.D"`.
    pub mnemonic: &'static str,
    /// Set bits mark positions the pattern fixes.
    pub mask: u32,
    /// Required values at the fixed positions; zero elsewhere.
    pub value: u32,
}

impl Template {
    /// Compiles a 32-character pattern string.
    ///
    /// The leftmost character describes bit 31. Valid symbols are `0`, `1`,
    /// and `?` (don't care).
    ///
    /// # Arguments
    ///
    /// * `mnemonic` - Instruction name used in errors and diagnostics.
    /// * `pattern` - The textual bit pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPattern`] when the pattern is not
    /// exactly 32 symbols or contains a symbol outside `{0, 1, ?}`.
    pub fn parse(mnemonic: &'static str, pattern: &str) -> Result<Self, RegistryError> {
        if pattern.len() != PATTERN_WIDTH {
            return Err(RegistryError::InvalidPattern {
                mnemonic,
                reason: format!("expected {PATTERN_WIDTH} symbols, got {}", pattern.len()),
            });
        }

        let mut mask = 0u32;
        let mut value = 0u32;
        for (pos, symbol) in pattern.chars().enumerate() {
            let bit = 1u32 << (PATTERN_WIDTH - 1 - pos);
            match symbol {
                '0' => mask |= bit,
                '1' => {
                    mask |= bit;
                    value |= bit;
                }
                '?' => {}
                other => {
                    return Err(RegistryError::InvalidPattern {
                        mnemonic,
                        reason: format!("symbol {other:?} at bit {}", PATTERN_WIDTH - 1 - pos),
                    });
                }
            }
        }

        Ok(Self {
            mnemonic,
            mask,
            value,
        })
    }

    /// Returns `true` when the word satisfies every fixed bit of the template.
    #[inline]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.value
    }

    /// Returns `true` when some concrete word can match both templates.
    ///
    /// Two templates overlap exactly when they agree on every bit position
    /// fixed by both of them.
    pub const fn overlaps(&self, other: &Self) -> bool {
        let common = self.mask & other.mask;
        self.value & common == other.value & common
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (mask {:#010x}, value {:#010x})",
            self.mnemonic, self.mask, self.value
        )
    }
}
