//! Context - the registry a compilation translates against.

use syscraws_ast::TypeExpr;
use syscraws_core::{OperatorTag, TranslateError};
use syscraws_ir::{Callable, Value};
use syscraws_registry::{SymbolRegistry, TypeId};

/// Types, operators, and global symbols for one compilation.
///
/// Built once, then shared immutably by every translation. Registration
/// needs `&mut self`, so it cannot overlap with a translation in progress.
#[derive(Debug, Clone)]
pub struct Context {
    registry: SymbolRegistry,
}

impl Context {
    /// A context with the built-in operators, functions, and constants.
    pub fn new() -> Self {
        Self::from_registry(SymbolRegistry::with_builtins())
    }

    /// A context with only the primitive types.
    pub fn empty() -> Self {
        Self::from_registry(SymbolRegistry::new())
    }

    /// Wrap an existing registry.
    pub fn from_registry(registry: SymbolRegistry) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// Append an operator overload.
    pub fn register_operator(
        &mut self,
        op: OperatorTag,
        params: Vec<TypeId>,
        ret: TypeId,
        callable: Callable,
    ) -> TypeId {
        self.registry.register_operator(op, params, ret, callable)
    }

    /// Append a global function overload.
    pub fn register_function(
        &mut self,
        name: impl Into<String>,
        params: Vec<TypeId>,
        ret: TypeId,
        callable: Callable,
    ) -> TypeId {
        self.registry.register_function(name, params, ret, callable)
    }

    /// Define a global constant.
    pub fn register_constant(&mut self, name: impl Into<String>, ty: TypeId, value: Value) {
        self.registry.register_constant(name, ty, value);
    }

    /// Intern a function type.
    pub fn function_type(&mut self, params: Vec<TypeId>, ret: TypeId) -> TypeId {
        self.registry.types_mut().function(params, ret)
    }

    /// Resolve a surface type reference.
    pub fn resolve_type(&self, ty: &TypeExpr<'_>) -> Result<TypeId, TranslateError> {
        match ty {
            TypeExpr::Named(ident) => self
                .registry
                .types()
                .lookup_named(ident.name)
                .ok_or_else(|| TranslateError::UnknownType {
                    name: ident.name.to_string(),
                    span: ident.span,
                }),
        }
    }

    /// Render a type for diagnostics.
    pub fn type_name(&self, ty: TypeId) -> String {
        self.registry.types().display(ty).to_string()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use syscraws_ast::AstBuilder;
    use syscraws_core::Span;
    use syscraws_ir::{Builtin, Env, FuncDef, IrExpr, IrStmt, Next, StmtArena};

    #[test]
    fn resolve_named_types() {
        let ctx = Context::new();
        assert_eq!(
            ctx.resolve_type(&TypeExpr::named("int", Span::default())),
            Ok(TypeId::INT)
        );
        assert_eq!(
            ctx.resolve_type(&TypeExpr::named("float", Span::default())),
            Ok(TypeId::FLOAT)
        );
    }

    #[test]
    fn unknown_type() {
        let ctx = Context::new();
        let err = ctx
            .resolve_type(&TypeExpr::named("vec3", Span::on_line(2, 8, 4)))
            .unwrap_err();
        assert_eq!(
            err,
            TranslateError::UnknownType {
                name: "vec3".to_string(),
                span: Span::on_line(2, 8, 4)
            }
        );
    }

    #[test]
    fn registration_extends_builtins() {
        let mut ctx = Context::new();
        let before = ctx.registry().operator_candidates(OperatorTag::Equal).len();
        let sig = ctx.register_operator(
            OperatorTag::Equal,
            vec![TypeId::BOOL, TypeId::BOOL],
            TypeId::BOOL,
            Builtin::IEq.into(),
        );
        assert_eq!(
            ctx.registry().operator_candidates(OperatorTag::Equal).len(),
            before + 1
        );
        assert_eq!(ctx.type_name(sig), "(bool, bool) -> bool");
    }

    #[test]
    fn empty_context_has_no_builtins() {
        let ctx = Context::empty();
        assert!(ctx.registry().operators().is_empty());
        assert!(ctx.registry().constant("true").is_none());
    }

    /// `greet() -> string`, written directly in IR.
    fn greet_routine() -> Callable {
        let mut body = StmtArena::new();
        let ret = body.push(IrStmt::Return {
            value: Some(IrExpr::Imm(Value::from("hello"))),
        });
        FuncDef {
            body,
            entry: Next::Stmt(ret),
            num_params: 0,
            num_locals: 0,
        }
        .into()
    }

    #[test]
    fn shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Context>();

        let mut ctx = Context::new();
        ctx.register_function("greet", vec![], TypeId::STRING, greet_routine());
        let ctx = &ctx;

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(move || {
                        let arena = Bump::new();
                        let b = AstBuilder::new(&arena);
                        let stmt = b.block(&[
                            b.expr_stmt(b.call_named("print", &[b.string("hi")])),
                            b.return_(Some(b.call_named("greet", &[]))),
                        ]);
                        let routine = crate::translate_routine(ctx, &stmt).unwrap();
                        let mut env = Env::new();
                        let value = routine.invoke(&mut env, Vec::new()).unwrap();
                        (value, env.take_output())
                    })
                })
                .collect();
            for handle in handles {
                let (value, output) = handle.join().unwrap();
                assert_eq!(value, Value::from("hello"));
                assert_eq!(output, ["hi"]);
            }
        });
    }
}
