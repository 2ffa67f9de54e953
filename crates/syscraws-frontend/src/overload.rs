//! Overload resolution for operator and function calls.
//!
//! ## Algorithm
//!
//! 1. Scan the candidates in registration order
//! 2. A candidate matches when its parameter list is exactly the argument
//!    type list, compared by interned handle
//! 3. The first match wins
//!
//! There are no implicit conversions, so `int + float` has no candidate.
//! Arity and type mismatches are reported the same way.

use syscraws_core::{OperatorTag, Span, TranslateError};
use syscraws_ir::Callable;
use syscraws_registry::{Candidate, TypeId, TypeRegistry};

use crate::context::Context;

/// Result of successful overload resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct OverloadMatch {
    /// Interned signature of the chosen overload
    pub signature: TypeId,
    /// Return type of the chosen overload
    pub ret: TypeId,
    /// What the call invokes
    pub callable: Callable,
}

/// First candidate whose parameters are exactly `arg_types`.
pub fn find_exact_match<'r>(
    candidates: &'r [Candidate],
    arg_types: &[TypeId],
    types: &TypeRegistry,
) -> Option<(&'r Candidate, TypeId)> {
    candidates.iter().find_map(|candidate| {
        let sig = types.as_function(candidate.signature)?;
        sig.accepts(arg_types).then_some((candidate, sig.ret))
    })
}

/// Resolve an operator applied to arguments of the given types.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn resolve_operator(
    ctx: &Context,
    op: OperatorTag,
    arg_types: &[TypeId],
    span: Span,
) -> Result<OverloadMatch, TranslateError> {
    let candidates = ctx.registry().operator_candidates(op);
    resolve(ctx, candidates, arg_types, span, || op.to_string())
}

/// Resolve a global function called with arguments of the given types.
pub fn resolve_function(
    ctx: &Context,
    name: &str,
    arg_types: &[TypeId],
    span: Span,
) -> Result<OverloadMatch, TranslateError> {
    let candidates = ctx.registry().function_candidates(name);
    resolve(ctx, candidates, arg_types, span, || format!("'{name}'"))
}

fn resolve(
    ctx: &Context,
    candidates: &[Candidate],
    arg_types: &[TypeId],
    span: Span,
    callee: impl FnOnce() -> String,
) -> Result<OverloadMatch, TranslateError> {
    let types = ctx.registry().types();
    match find_exact_match(candidates, arg_types, types) {
        Some((candidate, ret)) => Ok(OverloadMatch {
            signature: candidate.signature,
            ret,
            callable: candidate.callable.clone(),
        }),
        None => Err(no_matching_overload(ctx, callee(), arg_types, span)),
    }
}

/// Build the diagnostic for a call no candidate accepts.
pub(crate) fn no_matching_overload(
    ctx: &Context,
    callee: String,
    arg_types: &[TypeId],
    span: Span,
) -> TranslateError {
    TranslateError::NoMatchingOverload {
        callee,
        arity: arg_types.len(),
        args: ctx.registry().types().display_list(arg_types),
        span,
    }
}
