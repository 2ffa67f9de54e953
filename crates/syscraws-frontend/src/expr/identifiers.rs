//! Identifier resolution.
//!
//! Lookup order: locals (innermost first), then global functions, then
//! global constants.

use syscraws_ast::Ident;
use syscraws_core::TranslateError;
use syscraws_ir::{IrExpr, Value};

use super::{ExprTranslator, Result, Translated};

/// Translate an identifier used as a value.
pub fn translate_ident(translator: &ExprTranslator<'_>, ident: &Ident<'_>) -> Result<Translated> {
    if let Some(var) = translator.scope().get(ident.name) {
        return Ok(Translated::new(var.ty, IrExpr::Local(var.slot)));
    }

    let registry = translator.ctx().registry();

    let functions = registry.function_candidates(ident.name);
    match functions {
        [] => {}
        [only] => {
            return Ok(Translated::new(
                only.signature,
                IrExpr::Imm(Value::Func(only.callable.clone())),
            ));
        }
        _ => {
            return Err(TranslateError::AmbiguousFunctionValue {
                name: ident.name.to_string(),
                candidates: functions.len(),
                span: ident.span,
            });
        }
    }

    if let Some(constant) = registry.constant(ident.name) {
        return Ok(Translated::new(
            constant.ty,
            IrExpr::Imm(constant.value.clone()),
        ));
    }

    Err(TranslateError::UnresolvedIdentifier {
        name: ident.name.to_string(),
        span: ident.span,
    })
}
