//! Local scope management for routine translation.
//!
//! `LocalScope` tracks the locals visible at each point of a routine:
//! - Declaration with fresh slot allocation
//! - Nested block scopes
//! - Shadowing with restoration when the shadowing binding is retired
//!
//! Bindings form a stack. Blocks are threaded right to left, so a block
//! binds all of its declarations up front and [`retire`](LocalScope::retire)s
//! them one by one, last first, as the fold passes over each declaration.

use rustc_hash::FxHashMap;
use syscraws_core::{Span, TranslateError};
use syscraws_registry::TypeId;

// ============================================================================
// Types
// ============================================================================

/// Information about a local variable.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVar {
    /// Variable name
    pub name: String,
    /// Declared or inferred type
    pub ty: TypeId,
    /// Frame slot index
    pub slot: usize,
    /// Scope depth where declared
    pub depth: u32,
}

/// A live binding and whatever it shadows.
#[derive(Debug)]
struct Binding {
    name: String,
    depth: u32,
    shadowed: Option<LocalVar>,
}

// ============================================================================
// LocalScope
// ============================================================================

/// Local scope for a routine being translated.
#[derive(Debug, Default)]
pub struct LocalScope {
    /// Visible variables by name
    variables: FxHashMap<String, LocalVar>,

    /// Live bindings, innermost last
    bindings: Vec<Binding>,

    /// Current scope depth (0 = routine scope)
    scope_depth: u32,

    /// Next free slot; slots are never reused
    next_slot: usize,
}

impl LocalScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Scope Management
    // ==========================================================================

    /// Enter a new scope (block, if branch, loop body).
    pub fn push_scope(&mut self) {
        self.scope_depth += 1;
    }

    /// Exit the current scope, retiring any bindings still live in it.
    pub fn pop_scope(&mut self) {
        while self
            .bindings
            .last()
            .is_some_and(|b| b.depth == self.scope_depth)
        {
            self.retire_last();
        }
        self.scope_depth = self.scope_depth.saturating_sub(1);
    }

    /// Get current scope depth.
    pub fn depth(&self) -> u32 {
        self.scope_depth
    }

    // ==========================================================================
    // Declaration
    // ==========================================================================

    /// Declare a local in the current scope and allocate its slot.
    ///
    /// Shadowing a binding from an enclosing scope is allowed; redeclaring a
    /// name in the same scope is an error.
    pub fn declare(&mut self, name: &str, ty: TypeId, span: Span) -> Result<usize, TranslateError> {
        if self.is_declared_in_current_scope(name) {
            return Err(TranslateError::DuplicateBinding {
                name: name.to_string(),
                span,
            });
        }

        let slot = self.allocate_slot();
        let var = LocalVar {
            name: name.to_string(),
            ty,
            slot,
            depth: self.scope_depth,
        };
        let shadowed = self.variables.insert(name.to_string(), var);
        self.bindings.push(Binding {
            name: name.to_string(),
            depth: self.scope_depth,
            shadowed,
        });

        Ok(slot)
    }

    /// End the most recent binding of `name`, restoring what it shadowed.
    ///
    /// Bindings are retired in reverse declaration order.
    pub fn retire(&mut self, name: &str) {
        debug_assert!(
            self.bindings.last().is_some_and(|b| b.name == name),
            "bindings must be retired innermost first"
        );
        self.retire_last();
    }

    fn retire_last(&mut self) {
        let Some(binding) = self.bindings.pop() else {
            return;
        };
        match binding.shadowed {
            Some(previous) => {
                self.variables.insert(binding.name, previous);
            }
            None => {
                self.variables.remove(&binding.name);
            }
        }
    }

    fn allocate_slot(&mut self) -> usize {
        let slot = self.next_slot;
        self.next_slot += 1;
        slot
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Look up a visible variable by name.
    pub fn get(&self, name: &str) -> Option<&LocalVar> {
        self.variables.get(name)
    }

    /// Check if a name is declared in the current scope (not enclosing ones).
    pub fn is_declared_in_current_scope(&self, name: &str) -> bool {
        self.variables
            .get(name)
            .is_some_and(|v| v.depth == self.scope_depth)
    }

    /// Slots allocated so far, which is the frame size the routine needs.
    pub fn num_slots(&self) -> usize {
        self.next_slot
    }
}
