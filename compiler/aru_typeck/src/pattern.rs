//! Pattern matching (spec §4.F).

use aru_types::ast::{Branch, Lit, Pattern};
use aru_types::context::Elem;
use aru_types::ty::Type;
use aru_types::typed::{TypedBranch, TypedPattern, TypedPatternKind};
use aru_types::TypeError;

use crate::cxt::Cxt;
use crate::error::CheckError;
use crate::infer::infer;
use crate::subtype::subtype;

fn lit_type(cxt: &Cxt, lit: Lit) -> Type {
    match lit {
        Lit::Int(_) => Type::TLit(cxt.int_name()),
        Lit::Char(_) => Type::TLit(cxt.char_name()),
    }
}

/// `inferBranch(Branch(p, e), T_scrut)`.
pub fn infer_branch(cxt: &mut Cxt, branch: &Branch, scrutinee_ty: &Type) -> Result<(TypedBranch, Type), CheckError> {
    let typed_pattern = check_pattern(cxt, &branch.pattern, scrutinee_ty)?;
    let (typed_body, ty) = infer(cxt, &branch.body)?;
    Ok((
        TypedBranch {
            pattern: typed_pattern,
            body: typed_body,
        },
        ty,
    ))
}

/// `checkPattern(p, T)`.
pub fn check_pattern(cxt: &mut Cxt, pattern: &Pattern, ty: &Type) -> Result<TypedPattern, CheckError> {
    match pattern {
        Pattern::Var(x) => {
            cxt.push(Elem::Var(*x, ty.clone()));
            Ok(TypedPattern::new(TypedPatternKind::Var(*x), ty.clone()))
        }
        Pattern::Catch => Ok(TypedPattern::new(TypedPatternKind::Catch, ty.clone())),
        Pattern::Lit(l) => {
            let lit_ty = lit_type(cxt, *l);
            subtype(cxt, &lit_ty, ty)?;
            Ok(TypedPattern::new(TypedPatternKind::Lit(*l), ty.clone()))
        }
        Pattern::Enum(ctor) => {
            let ctor_ty = cxt
                .data_injs
                .get(ctor)
                .cloned()
                .ok_or(CheckError::Type(TypeError::UnknownConstructor(*ctor)))?;
            subtype(cxt, &ctor_ty, ty)?;
            Ok(TypedPattern::new(TypedPatternKind::Enum(*ctor), ty.clone()))
        }
        Pattern::Inj(ctor, sub_patterns) => check_inj_pattern(cxt, *ctor, sub_patterns, ty),
    }
}

/// `PInj(κ, [pᵢ])`: instantiate the constructor's bound parameters with
/// fresh existentials, subtype its (instantiated) result type against the
/// scrutinee type, then check each sub-pattern against the correspondingly
/// substituted argument type.
fn check_inj_pattern(
    cxt: &mut Cxt,
    ctor: aru_ir::Name,
    sub_patterns: &[Pattern],
    ty: &Type,
) -> Result<TypedPattern, CheckError> {
    let ctor_ty = cxt
        .data_injs
        .get(&ctor)
        .cloned()
        .ok_or(CheckError::Type(TypeError::UnknownConstructor(ctor)))?;

    let mut instantiated = ctor_ty;
    while let Type::TAll(alpha, body) = instantiated {
        let fresh = cxt.fresh_evar();
        cxt.push(Elem::TEVar(fresh));
        instantiated = body.subst_var(alpha, &Type::TEVar(fresh));
    }

    let mut arg_tys = Vec::new();
    let mut result_ty = instantiated;
    while let Type::TFun(a, b) = result_ty {
        arg_tys.push(*a);
        result_ty = *b;
    }

    if arg_tys.len() != sub_patterns.len() {
        return Err(CheckError::Type(TypeError::ArityMismatch {
            ctor,
            expected: arg_tys.len(),
            found: sub_patterns.len(),
        }));
    }

    subtype(cxt, &result_ty, ty)?;

    let mut typed_sub_patterns = Vec::with_capacity(sub_patterns.len());
    for (sub_pattern, arg_ty) in sub_patterns.iter().zip(arg_tys.iter()) {
        let expected = cxt.apply(arg_ty);
        typed_sub_patterns.push(check_pattern(cxt, sub_pattern, &expected)?);
    }

    Ok(TypedPattern::new(TypedPatternKind::Inj(ctor, typed_sub_patterns), ty.clone()))
}
