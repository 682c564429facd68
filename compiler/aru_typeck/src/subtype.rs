//! Subtyping (spec §4.D). `A <: B` under the ordered context, mutually
//! recursive with instantiation. Grounded on `subtype` in
//! `examples/other_examples/.../siml__src-bi_types.rs`.

use aru_types::context::Elem;
use aru_types::ty::Type;
use tracing::debug;

use crate::cxt::Cxt;
use crate::error::{type_mismatch, CheckError};
use crate::instantiate::{instantiate_l, instantiate_r};
use crate::stack::ensure_sufficient_stack;

/// `Γ ⊢ A <: B ⊣ Δ`, mutating `cxt.local` into `Δ` in place.
pub fn subtype(cxt: &mut Cxt, a: &Type, b: &Type) -> Result<(), CheckError> {
    ensure_sufficient_stack(cxt.options.stack_red_zone, cxt.options.stack_size, || subtype_inner(cxt, a, b))
}

fn subtype_inner(cxt: &mut Cxt, a: &Type, b: &Type) -> Result<(), CheckError> {
    debug!(?a, ?b, "subtype");
    match (a, b) {
        // <:Var, <:Unit (TLit doubles as both literal base types and nullary
        // data types with no params)
        (Type::TVar(x), Type::TVar(y)) if x == y => Ok(()),
        (Type::TLit(x), Type::TLit(y)) if x == y => Ok(()),

        // <:Exvar
        (Type::TEVar(a1), Type::TEVar(a2)) if a1 == a2 => Ok(()),

        // <:->
        (Type::TFun(a1, a2), Type::TFun(b1, b2)) => {
            subtype(cxt, b1, a1)?;
            let a2 = cxt.apply(a2);
            let b2 = cxt.apply(b2);
            subtype(cxt, &a2, &b2)
        }

        // <:Data: invariant in each argument, same head, same arity.
        (Type::TData(n1, args1), Type::TData(n2, args2))
            if n1 == n2 && args1.len() == args2.len() =>
        {
            for (x, y) in args1.iter().zip(args2.iter()) {
                let x = cxt.apply(x);
                let y = cxt.apply(y);
                subtype(cxt, &x, &y)?;
            }
            Ok(())
        }

        // <:forallR: B's bound variable is pushed as a fresh rigid (reusing
        // its name, per the renamer's uniqueness guarantee), dropped after.
        (_, Type::TAll(beta, body)) => {
            cxt.push(Elem::TVar(*beta));
            subtype(cxt, a, body)?;
            cxt.drop_trailing(&Elem::TVar(*beta));
            Ok(())
        }

        // <:forallL: A's bound variable is eliminated, so it becomes a fresh
        // existential under a marker.
        (Type::TAll(alpha, body), _) => {
            let fresh = cxt.fresh_evar();
            cxt.push_all([Elem::Mark(fresh), Elem::TEVar(fresh)]);
            let substituted = body.subst_var(*alpha, &Type::TEVar(fresh));
            subtype(cxt, &substituted, b)?;
            cxt.drop_trailing(&Elem::Mark(fresh));
            Ok(())
        }

        // <:InstantiateL / <:InstantiateR, with the occurs check guarding
        // against `ά` appearing free in the opposing monotype.
        (Type::TEVar(ev), _) if !b.frees().contains(ev) => instantiate_l(cxt, *ev, b),
        (_, Type::TEVar(ev)) if !a.frees().contains(ev) => instantiate_r(cxt, a, *ev),

        _ => Err(type_mismatch(cxt.apply(b), cxt.apply(a))),
    }
}
