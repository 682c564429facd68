//! Instantiation (spec §4.C): `InstL`/`InstR` solve existentials under a
//! subtyping direction. Grounded on `instantiate_l`/`instantiate_r` in
//! `examples/other_examples/.../siml__src-bi_types.rs`, with the `AllL`/`AllR`
//! cases implemented literally per spec §4.C rather than that reference's
//! encoding (see `DESIGN.md`).

use aru_types::context::Elem;
use aru_types::ty::{EVar, Type};
use tracing::debug;

use crate::cxt::Cxt;
use crate::error::CheckError;
use crate::stack::ensure_sufficient_stack;

/// Establishes `ά <: A`.
pub fn instantiate_l(cxt: &mut Cxt, ev: EVar, ty: &Type) -> Result<(), CheckError> {
    ensure_sufficient_stack(cxt.options.stack_red_zone, cxt.options.stack_size, || instantiate_l_inner(cxt, ev, ty))
}

#[allow(clippy::expect_used, reason = "Reach's target was just matched as an unsolved existential")]
fn instantiate_l_inner(cxt: &mut Cxt, ev: EVar, ty: &Type) -> Result<(), CheckError> {
    debug!(?ev, ?ty, "instantiate_l");
    match ty {
        // Reach: ty is an existential standing to the right of `ev` — solve
        // it to `ev` rather than the other way around, preserving the
        // left-to-right dependency order (spec §4.C rule 2).
        Type::TEVar(other) if cxt.local.existentials_ordered(ev, *other) => {
            cxt.local = cxt
                .local
                .solve(*other, Type::TEVar(ev))
                .expect("instantiate_l: InstLReach target not unsolved");
            Ok(())
        }
        Type::TFun(a, b) => {
            let a1 = cxt.fresh_evar();
            let a2 = cxt.fresh_evar();
            cxt.local = cxt.local.insert_at_tevar(
                ev,
                vec![
                    Elem::TEVar(a2),
                    Elem::TEVar(a1),
                    Elem::Solved(ev, Type::fun(Type::TEVar(a1), Type::TEVar(a2))),
                ],
            );
            instantiate_r(cxt, a, a1)?;
            let applied = cxt.apply(b);
            instantiate_l(cxt, a2, &applied)
        }
        Type::TAll(eps, body) => {
            // InstLAllR: push the bound variable as a plain rigid — no
            // fresh name needed, the renamer guarantees global uniqueness.
            cxt.push(Elem::TVar(*eps));
            instantiate_l(cxt, ev, body)?;
            cxt.drop_trailing(&Elem::TVar(*eps));
            Ok(())
        }
        _ if ty.is_mono() => {
            // Solve: ty must be well-formed against the prefix strictly to
            // the left of `ev` (enforced inside `Context::solve`).
            cxt.local = cxt
                .local
                .solve(ev, ty.clone())
                .ok_or_else(|| occurs_or_escape_error(ty))?;
            Ok(())
        }
        _ => unreachable!("instantiate_l: non-monotype reached the Solve case"),
    }
}

/// Establishes `A <: ά`.
pub fn instantiate_r(cxt: &mut Cxt, ty: &Type, ev: EVar) -> Result<(), CheckError> {
    ensure_sufficient_stack(cxt.options.stack_red_zone, cxt.options.stack_size, || instantiate_r_inner(cxt, ty, ev))
}

#[allow(clippy::expect_used, reason = "Reach's target was just matched as an unsolved existential")]
fn instantiate_r_inner(cxt: &mut Cxt, ty: &Type, ev: EVar) -> Result<(), CheckError> {
    debug!(?ty, ?ev, "instantiate_r");
    match ty {
        Type::TEVar(other) if cxt.local.existentials_ordered(ev, *other) => {
            cxt.local = cxt
                .local
                .solve(*other, Type::TEVar(ev))
                .expect("instantiate_r: InstRReach target not unsolved");
            Ok(())
        }
        Type::TFun(a, b) => {
            let a1 = cxt.fresh_evar();
            let a2 = cxt.fresh_evar();
            cxt.local = cxt.local.insert_at_tevar(
                ev,
                vec![
                    Elem::TEVar(a2),
                    Elem::TEVar(a1),
                    Elem::Solved(ev, Type::fun(Type::TEVar(a1), Type::TEVar(a2))),
                ],
            );
            instantiate_l(cxt, a1, a)?;
            let applied = cxt.apply(b);
            instantiate_r(cxt, &applied, a2)
        }
        Type::TAll(eps, body) => {
            // InstRAllL: the bound variable is being eliminated to produce a
            // usable instance, so it becomes a fresh existential, guarded by
            // a marker so it (and anything solved in its scope) is dropped
            // once this instantiation is done.
            let fresh = cxt.fresh_evar();
            cxt.push_all([Elem::Mark(fresh), Elem::TEVar(fresh)]);
            let substituted = body.subst_var(*eps, &Type::TEVar(fresh));
            instantiate_r(cxt, &substituted, ev)?;
            cxt.drop_trailing(&Elem::Mark(fresh));
            Ok(())
        }
        _ if ty.is_mono() => {
            cxt.local = cxt
                .local
                .solve(ev, ty.clone())
                .ok_or_else(|| occurs_or_escape_error(ty))?;
            Ok(())
        }
        _ => unreachable!("instantiate_r: non-monotype reached the Solve case"),
    }
}

/// A monotype failed the solve-step well-formedness check: either it
/// mentions an existential to the right of the one being solved (occurs
/// check, escaping scope) or an unbound variable. Surfaced uniformly as a
/// type mismatch, mirroring the occurs-check failure in spec §8 scenario 5.
fn occurs_or_escape_error(ty: &Type) -> CheckError {
    crate::error::type_mismatch(ty.clone(), ty.clone())
}
