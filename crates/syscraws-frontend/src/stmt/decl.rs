//! Local declarations.
//!
//! A declaration is translated in two halves. [`prepare_decl`] resolves the
//! type, translates the initializer, allocates a slot, and binds the name.
//! [`emit_decl`] emits the initialization and retires the binding. A block
//! prepares all of its declarations in source order before threading, and
//! emits each one as the right-to-left fold reaches it.
//!
//! [`prepare_decl`]: StmtTranslator::prepare_decl
//! [`emit_decl`]: StmtTranslator::emit_decl

use syscraws_ast::{DeclStmt, Pattern};
use syscraws_core::TranslateError;
use syscraws_ir::{IrExpr, IrStmt, Next};

use super::{Result, StmtTranslator};

/// A declaration whose name is bound but whose initialization is not yet emitted.
#[derive(Debug)]
pub(super) struct PreparedDecl {
    name: String,
    slot: usize,
    init: Option<IrExpr>,
}

impl<'ctx> StmtTranslator<'ctx> {
    /// Translate a declaration outside of a block.
    ///
    /// The binding has nothing after it to be visible to, so it is retired
    /// immediately.
    pub(super) fn translate_decl(&mut self, decl: &DeclStmt<'_>, successor: Next) -> Result<Next> {
        let prepared = self.prepare_decl(decl)?;
        Ok(self.emit_decl(prepared, successor))
    }

    /// Resolve, translate, and bind a declaration.
    pub(super) fn prepare_decl(&mut self, decl: &DeclStmt<'_>) -> Result<PreparedDecl> {
        let Pattern::Ident(ident) = decl.pattern;

        if decl.ty.is_none() && decl.init.is_none() {
            return Err(TranslateError::InvalidDeclaration { span: decl.span });
        }

        let declared = match &decl.ty {
            Some(ty) => Some(self.ctx.resolve_type(ty)?),
            None => None,
        };

        let init = match decl.init {
            Some(expr) => Some((self.expr_translator().translate(expr)?, expr.span())),
            None => None,
        };

        let ty = match (declared, &init) {
            (Some(declared), Some((init, span))) => {
                self.expr_translator()
                    .expect_type(declared, init.ty, *span)?;
                declared
            }
            (Some(declared), None) => declared,
            (None, Some((init, _))) => init.ty,
            (None, None) => return Err(TranslateError::InvalidDeclaration { span: decl.span }),
        };

        let slot = self.scope.declare(ident.name, ty, ident.span)?;

        Ok(PreparedDecl {
            name: ident.name.to_string(),
            slot,
            init: init.map(|(init, _)| init.ir),
        })
    }

    /// Emit the initialization of a prepared declaration and retire its binding.
    pub(super) fn emit_decl(&mut self, prepared: PreparedDecl, successor: Next) -> Next {
        self.scope.retire(&prepared.name);
        self.push(IrStmt::Init {
            slot: prepared.slot,
            value: prepared.init,
            next: successor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::translate_routine;
    use crate::Context;
    use bumpalo::Bump;
    use syscraws_ast::{AstBuilder, DeclStmt, Ident, Pattern, Stmt};
    use syscraws_core::{Span, TranslateError};
    use syscraws_ir::{IrExpr, IrStmt, Next, Value};

    #[test]
    fn typed_declaration_with_initializer() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();

        let routine =
            translate_routine(&ctx, &b.decl("x", Some("float"), Some(b.float(1.5)))).unwrap();
        assert_eq!(routine.num_locals, 1);
        let Next::Stmt(id) = routine.entry else {
            panic!("expected a statement");
        };
        assert_eq!(
            routine.body.get(id),
            Some(&IrStmt::Init {
                slot: 0,
                value: Some(IrExpr::Imm(Value::Float(1.5))),
                next: Next::End,
            })
        );
    }

    #[test]
    fn declaration_without_initializer() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();

        let routine = translate_routine(&ctx, &b.decl("x", Some("int"), None)).unwrap();
        let Next::Stmt(id) = routine.entry else {
            panic!("expected a statement");
        };
        assert!(matches!(
            routine.body.get(id),
            Some(IrStmt::Init { value: None, .. })
        ));
    }

    #[test]
    fn initializer_must_match_declared_type() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();

        let stmt = b.decl("x", Some("bool"), Some(b.at(1, 14).int(0)));
        let err = translate_routine(&ctx, &stmt).unwrap_err();
        assert_eq!(
            err,
            TranslateError::TypeMismatch {
                expected: "bool".to_string(),
                found: "int".to_string(),
                span: Span::point(1, 14)
            }
        );
    }

    #[test]
    fn neither_type_nor_initializer() {
        let ctx = Context::new();
        let stmt = Stmt::Decl(DeclStmt {
            pattern: Pattern::Ident(Ident::new("x", Span::default())),
            ty: None,
            init: None,
            span: Span::on_line(5, 1, 6),
        });

        let err = translate_routine(&ctx, &stmt).unwrap_err();
        assert_eq!(
            err,
            TranslateError::InvalidDeclaration {
                span: Span::on_line(5, 1, 6)
            }
        );
    }

    #[test]
    fn unknown_declared_type() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();

        let err = translate_routine(&ctx, &b.decl("x", Some("double"), None)).unwrap_err();
        assert!(matches!(err, TranslateError::UnknownType { ref name, .. } if name == "double"));
    }
}
