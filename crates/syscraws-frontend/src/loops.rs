//! Loop target tracking for break/continue.
//!
//! A statement is translated against a single successor, which is not enough
//! for `break` and `continue`. Each enclosing loop therefore pushes its exit
//! and re-test targets here while its body is translated.

use syscraws_ir::Next;

/// Jump targets for one enclosing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LoopTargets {
    /// Where `break` goes: the statement after the loop
    break_target: Next,
    /// Where `continue` goes: the loop head
    continue_target: Next,
}

/// Stack of enclosing loops, innermost last.
#[derive(Debug, Default)]
pub struct LoopStack {
    loops: Vec<LoopTargets>,
}

impl LoopStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a loop.
    pub fn enter_loop(&mut self, break_target: Next, continue_target: Next) {
        self.loops.push(LoopTargets {
            break_target,
            continue_target,
        });
    }

    /// Exit the innermost loop.
    pub fn exit_loop(&mut self) {
        self.loops.pop();
    }

    /// Break target of the innermost loop.
    pub fn break_target(&self) -> Option<Next> {
        self.loops.last().map(|l| l.break_target)
    }

    /// Continue target of the innermost loop.
    pub fn continue_target(&self) -> Option<Next> {
        self.loops.last().map(|l| l.continue_target)
    }
}
