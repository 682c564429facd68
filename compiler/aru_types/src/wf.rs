//! Well-formedness (spec §4.B).

use crate::context::{Context, Elem};
use crate::error::TypeError;
use crate::ty::Type;

/// `wellFormed(Γ, A)`: fails with `UnboundTypeVar` when a `TVar(α)` has no
/// `EnvTVar(α)` in `Γ`, or `UnknownExistential` when a `TEVar(ά)` has neither
/// `EnvTEVar(ά)` nor `EnvSolved(ά, _)`. Recurses structurally, pushing
/// `EnvTVar(α)` when descending under `TAll`.
pub fn well_formed(ctx: &Context, ty: &Type) -> Result<(), TypeError> {
    match ty {
        Type::TLit(_) => Ok(()),
        Type::TVar(v) => {
            if ctx.elems().iter().any(|e| matches!(e, Elem::TVar(v2) if v2 == v)) {
                Ok(())
            } else {
                Err(TypeError::UnboundTypeVar(*v))
            }
        }
        Type::TEVar(ev) => {
            let known = ctx.elems().iter().any(|e| {
                matches!(e, Elem::TEVar(e2) if e2 == ev) || matches!(e, Elem::Solved(e2, _) if e2 == ev)
            });
            if known {
                Ok(())
            } else {
                Err(TypeError::UnknownExistential(*ev))
            }
        }
        Type::TFun(a, b) => {
            well_formed(ctx, a)?;
            well_formed(ctx, b)
        }
        Type::TAll(v, body) => {
            let mut inner = ctx.clone();
            inner.push(Elem::TVar(*v));
            well_formed(&inner, body)
        }
        Type::TData(_, args) => {
            for arg in args {
                well_formed(ctx, arg)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aru_ir::StringInterner;
    use crate::ty::EVar;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_unbound_tvar() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let ctx = Context::new();
        let err = well_formed(&ctx, &Type::TVar(a)).unwrap_err();
        assert_eq!(matches!(err, TypeError::UnboundTypeVar(_)), true);
    }

    #[test]
    fn accepts_tvar_bound_by_forall_descent() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let ctx = Context::new();
        // wellFormed(Γ, forall a. a) pushes EnvTVar(a) before checking the body.
        assert_eq!(well_formed(&ctx, &Type::all(a, Type::TVar(a))).is_ok(), true);
    }

    #[test]
    fn rejects_unknown_existential() {
        let ctx = Context::new();
        let err = well_formed(&ctx, &Type::TEVar(EVar::from_raw(0))).unwrap_err();
        assert_eq!(matches!(err, TypeError::UnknownExistential(_)), true);
    }

    #[test]
    fn accepts_solved_existential() {
        let mut interner = StringInterner::new();
        let int = interner.intern("Int");
        let mut ctx = Context::new();
        let ev = EVar::from_raw(0);
        ctx.push(Elem::Solved(ev, Type::TLit(int)));
        assert_eq!(well_formed(&ctx, &Type::TEVar(ev)).is_ok(), true);
    }
}
