//! Operator overload table.

use rustc_hash::FxHashMap;
use syscraws_core::OperatorTag;
use syscraws_ir::Callable;

use crate::TypeId;

/// One overload of an operator or global function.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Interned function type of this overload
    pub signature: TypeId,
    /// What a call to this overload invokes
    pub callable: Callable,
}

/// Per-operator overload lists, kept in registration order.
///
/// Resolution scans a list front to back and takes the first exact match, so
/// registration order is the tie-break.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
    candidates: FxHashMap<OperatorTag, Vec<Candidate>>,
}

impl OperatorTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an overload for `op`.
    pub fn register(&mut self, op: OperatorTag, candidate: Candidate) {
        self.candidates.entry(op).or_default().push(candidate);
    }

    /// Overloads of `op`, in registration order.
    pub fn candidates(&self, op: OperatorTag) -> &[Candidate] {
        self.candidates
            .get(&op)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of operators with at least one overload.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether no operator has an overload.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
