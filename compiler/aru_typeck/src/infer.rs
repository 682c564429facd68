//! Bidirectional inference and checking (spec §4.E). `check`, `infer`, and
//! `apply_infer` are mutually recursive with `subtype`/`instantiate_l`/
//! `instantiate_r`. Grounded on `infer`/`check`/`applySynth` in
//! `examples/other_examples/.../siml__src-bi_types.rs`.

use aru_ir::Name;
use aru_types::ast::{Bind, Exp, Lit};
use aru_types::context::Elem;
use aru_types::ty::Type;
use aru_types::typed::{TypedExp, TypedExpKind};
use tracing::debug;

use crate::cxt::Cxt;
use crate::error::{type_mismatch, CheckError};
use crate::pattern::infer_branch;
use crate::stack::ensure_sufficient_stack;
use crate::subtype::subtype;

fn lit_type(cxt: &Cxt, lit: Lit) -> Type {
    match lit {
        Lit::Int(_) => Type::TLit(cxt.int_name()),
        Lit::Char(_) => Type::TLit(cxt.char_name()),
    }
}

/// `check(e, A)`.
pub fn check(cxt: &mut Cxt, e: &Exp, ty: &Type) -> Result<TypedExp, CheckError> {
    ensure_sufficient_stack(cxt.options.stack_red_zone, cxt.options.stack_size, || check_inner(cxt, e, ty))
}

fn check_inner(cxt: &mut Cxt, e: &Exp, ty: &Type) -> Result<TypedExp, CheckError> {
    debug!(?ty, "check");
    match (e, ty) {
        (_, Type::TAll(alpha, body)) => {
            cxt.push(Elem::TVar(*alpha));
            let out = check(cxt, e, body)?;
            cxt.drop_trailing(&Elem::TVar(*alpha));
            Ok(out)
        }
        (Exp::Abs(x, body), Type::TFun(a1, a2)) => {
            cxt.push(Elem::Var(*x, (**a1).clone()));
            let typed_body = check(cxt, body, a2)?;
            cxt.drop_trailing(&Elem::Var(*x, (**a1).clone()));
            Ok(TypedExp::new(TypedExpKind::Abs(*x, Box::new(typed_body)), ty.clone()))
        }
        _ => {
            let (typed_e, inferred) = infer(cxt, e)?;
            let expected = cxt.apply(ty);
            let inferred = cxt.apply(&inferred);
            subtype(cxt, &inferred, &expected)?;
            let final_ty = cxt.apply(&expected);
            Ok(TypedExp::new(typed_e.kind, final_ty))
        }
    }
}

/// `infer(e)`.
pub fn infer(cxt: &mut Cxt, e: &Exp) -> Result<(TypedExp, Type), CheckError> {
    ensure_sufficient_stack(cxt.options.stack_red_zone, cxt.options.stack_size, || infer_inner(cxt, e))
}

fn infer_inner(cxt: &mut Cxt, e: &Exp) -> Result<(TypedExp, Type), CheckError> {
    debug!("infer");
    match e {
        Exp::Lit(l) => {
            let ty = lit_type(cxt, *l);
            Ok((TypedExp::new(TypedExpKind::Lit(*l), ty.clone()), ty))
        }

        Exp::Var(x) => {
            if let Some(ty) = cxt.local.find_var(*x) {
                let ty = ty.clone();
                return Ok((TypedExp::new(TypedExpKind::Var(*x), ty.clone()), ty));
            }
            if let Some(ty) = cxt.sig.get(x) {
                let ty = ty.clone();
                return Ok((TypedExp::new(TypedExpKind::Var(*x), ty.clone()), ty));
            }
            // Auto-extend: only for genuine forward references to another
            // top-level binding, never a blanket fallback — see DESIGN.md.
            if cxt.binds.contains_key(x) {
                let fresh = cxt.fresh_evar();
                cxt.push_all([Elem::TEVar(fresh), Elem::Var(*x, Type::TEVar(fresh))]);
                let ty = Type::TEVar(fresh);
                return Ok((TypedExp::new(TypedExpKind::Var(*x), ty.clone()), ty));
            }
            Err(CheckError::UnresolvedName(*x))
        }

        Exp::Inj(ctor) => match cxt.data_injs.get(ctor) {
            Some(ty) => {
                let ty = ty.clone();
                Ok((TypedExp::new(TypedExpKind::Inj(*ctor), ty.clone()), ty))
            }
            None => Err(CheckError::Type(aru_types::TypeError::UnknownConstructor(*ctor))),
        },

        Exp::Ann(inner, ty) => {
            aru_types::wf::well_formed(&cxt.local, ty)?;
            let typed = check(cxt, inner, ty)?;
            let final_ty = typed.ty.clone();
            Ok((typed, final_ty))
        }

        Exp::App(e1, e2) => {
            let (typed_e1, a) = infer(cxt, e1)?;
            let a = cxt.apply(&a);
            let (typed_e2, c) = apply_infer(cxt, &a, e2)?;
            Ok((
                TypedExp::new(TypedExpKind::App(Box::new(typed_e1), Box::new(typed_e2)), c.clone()),
                c,
            ))
        }

        Exp::Abs(x, body) => {
            let a = cxt.fresh_evar();
            let e = cxt.fresh_evar();
            cxt.push_all([Elem::TEVar(a), Elem::TEVar(e), Elem::Var(*x, Type::TEVar(a))]);
            let typed_body = check(cxt, body, &Type::TEVar(e))?;
            cxt.drop_trailing(&Elem::Var(*x, Type::TEVar(a)));
            let fn_ty = Type::fun(Type::TEVar(a), Type::TEVar(e));
            Ok((TypedExp::new(TypedExpKind::Abs(*x, Box::new(typed_body)), fn_ty.clone()), fn_ty))
        }

        Exp::Let(bind, body) => {
            let (typed_bind, a) = infer_let_bind(cxt, bind)?;
            cxt.push(Elem::Var(bind.name, a.clone()));
            let (typed_body, c) = infer(cxt, body)?;
            let (left, _right) = match cxt.local.split_on(&Elem::Var(bind.name, a)) {
                Some(split) => split,
                None => unreachable!("infer ELet: EnvVar just pushed must be present"),
            };
            cxt.local = left;
            Ok((
                TypedExp::new(
                    TypedExpKind::Let(typed_bind, Box::new(typed_body)),
                    c.clone(),
                ),
                c,
            ))
        }

        Exp::Add(e1, e2) => {
            let int = Type::TLit(cxt.int_name());
            let t1 = check(cxt, e1, &int)?;
            let t2 = check(cxt, e2, &int)?;
            Ok((
                TypedExp::new(TypedExpKind::Add(Box::new(t1), Box::new(t2)), int.clone()),
                int,
            ))
        }

        Exp::Case(scrutinee, branches) => {
            let (typed_scrutinee, scrutinee_ty) = infer(cxt, scrutinee)?;
            let scrutinee_ty = cxt.apply(&scrutinee_ty);
            let mut typed_branches = Vec::with_capacity(branches.len());
            let mut result_ty: Option<Type> = None;
            for branch in branches {
                let (typed_branch, branch_ty) = infer_branch(cxt, branch, &scrutinee_ty)?;
                let branch_ty = cxt.apply(&branch_ty);
                match &result_ty {
                    None => result_ty = Some(branch_ty),
                    Some(acc) => {
                        let acc = cxt.apply(acc);
                        subtype(cxt, &branch_ty, &acc)?;
                        result_ty = Some(cxt.apply(&acc));
                    }
                }
                typed_branches.push(typed_branch);
            }
            let result_ty = result_ty.ok_or_else(|| type_mismatch(scrutinee_ty.clone(), scrutinee_ty.clone()))?;
            Ok((
                TypedExp::new(
                    TypedExpKind::Case(Box::new(typed_scrutinee), typed_branches),
                    result_ty.clone(),
                ),
                result_ty,
            ))
        }
    }
}

fn infer_let_bind(cxt: &mut Cxt, bind: &Bind) -> Result<(aru_types::typed::TypedBind, Type), CheckError> {
    let curried = bind.curried_rhs();
    let (typed_rhs, ty) = infer(cxt, &curried)?;
    let ty = cxt.apply(&ty);
    Ok((
        aru_types::typed::TypedBind {
            name: bind.name,
            args: Vec::new(),
            ty: ty.clone(),
            body: Box::new(typed_rhs),
        },
        ty,
    ))
}

/// `applyInfer(A, e)`.
pub fn apply_infer(cxt: &mut Cxt, ty: &Type, e: &Exp) -> Result<(TypedExp, Type), CheckError> {
    ensure_sufficient_stack(cxt.options.stack_red_zone, cxt.options.stack_size, || apply_infer_inner(cxt, ty, e))
}

fn apply_infer_inner(cxt: &mut Cxt, ty: &Type, e: &Exp) -> Result<(TypedExp, Type), CheckError> {
    debug!(?ty, "apply_infer");
    match ty {
        Type::TAll(alpha, body) => {
            let fresh = cxt.fresh_evar();
            cxt.push(Elem::TEVar(fresh));
            let substituted = body.subst_var(*alpha, &Type::TEVar(fresh));
            apply_infer(cxt, &substituted, e)
        }
        Type::TEVar(ev) => {
            let a1 = cxt.fresh_evar();
            let a2 = cxt.fresh_evar();
            cxt.local = cxt.local.insert_at_tevar(
                *ev,
                vec![
                    Elem::TEVar(a2),
                    Elem::TEVar(a1),
                    Elem::Solved(*ev, Type::fun(Type::TEVar(a1), Type::TEVar(a2))),
                ],
            );
            let typed_e = check(cxt, e, &Type::TEVar(a1))?;
            Ok((typed_e, Type::TEVar(a2)))
        }
        Type::TFun(a, c) => {
            let typed_e = check(cxt, e, a)?;
            Ok((typed_e, (**c).clone()))
        }
        _ => Err(CheckError::Type(aru_types::TypeError::NotAFunction(ty.clone()))),
    }
}

/// Shared by `program::typecheck_program` to build the curried rhs' initial
/// inference/check entry point for a top-level binding.
pub fn infer_or_check_top(cxt: &mut Cxt, name: Name, curried: &Exp, sig: Option<&Type>) -> Result<(TypedExp, Type), CheckError> {
    match sig {
        Some(ty) => {
            let typed = check(cxt, curried, ty)?;
            Ok((typed, ty.clone()))
        }
        None => {
            let (typed, ty) = infer(cxt, curried)?;
            if !cxt.local.is_complete() {
                return Err(CheckError::AmbiguousPolymorphism(name));
            }
            Ok((typed, cxt.apply(&ty)))
        }
    }
}
