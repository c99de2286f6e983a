//! Opcode template registry and decoder.
//!
//! This module dispatches raw instruction words to handlers. It provides:
//! 1. **Registration:** Template installation with build-time ambiguity rejection.
//! 2. **Decoding:** Linear mask/value scan over the registered templates.
//! 3. **Execution:** Handler invocation returning the consumed instruction length.

use tracing::debug;

use crate::common::{RegistryError, Trap};
use crate::core::CpuState;
use crate::isa::template::Template;

/// Instruction handler signature.
///
/// Handlers mutate architectural state and return the instruction length in
/// bytes. They never fail: anything that would fail is rejected at decode.
pub type Handler = Box<dyn Fn(&mut CpuState, u32) -> u32 + Send + Sync>;

/// One registered template with its handler.
pub struct Entry {
    /// The compiled opcode template.
    pub template: Template,
    handler: Handler,
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

/// The opcode registry.
///
/// Built once during CPU construction and immutable afterwards. Registration
/// rejects any template that could match a word an earlier template also
/// matches, so by construction at most one entry matches any word and the
/// first-match decode scan is unambiguous.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a template with its handler.
    ///
    /// # Arguments
    ///
    /// * `template` - The compiled opcode template.
    /// * `handler` - Callback invoked for every word the template matches.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AmbiguousTemplate`] when the template overlaps
    /// one already registered.
    pub fn register(&mut self, template: Template, handler: Handler) -> Result<(), RegistryError> {
        for entry in &self.entries {
            if template.overlaps(&entry.template) {
                return Err(RegistryError::AmbiguousTemplate {
                    new: template.mnemonic,
                    existing: entry.template.mnemonic,
                });
            }
        }
        debug!(mnemonic = template.mnemonic, "registered opcode template");
        self.entries.push(Entry { template, handler });
        Ok(())
    }

    /// Finds the entry matching an instruction word.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::IllegalInstruction`] when no template matches.
    pub fn decode(&self, word: u32) -> Result<&Entry, Trap> {
        self.entries
            .iter()
            .find(|entry| entry.template.matches(word))
            .ok_or(Trap::IllegalInstruction(word))
    }

    /// Decodes and executes an instruction word.
    ///
    /// # Returns
    ///
    /// The instruction length in bytes reported by the handler.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::IllegalInstruction`] when no template matches; state is
    /// untouched in that case.
    pub fn exec(&self, state: &mut CpuState, word: u32) -> Result<u32, Trap> {
        let entry = self.decode(word)?;
        Ok((entry.handler)(state, word))
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
