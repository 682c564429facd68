//! Whole-program entry point (spec §4.E `typecheckBind` driver, §12
//! supplemented feature: a single `typecheck_program` call replacing the
//! hand-looping a caller would otherwise have to do itself).

use aru_ir::StringInterner;
use aru_types::ast::{Def, Program};
use aru_types::context::Context;
use aru_types::typed::TypedProgram;

use crate::cxt::{CheckerOptions, Cxt};
use crate::data::check_data;
use crate::error::CheckError;
use crate::infer::infer_or_check_top;

/// Type-checks a whole program, returning the typed IR in source-binding
/// order.
///
/// Bindings must already be in dependency order (spec §6); this function
/// does not reorder them. Two passes over `program.defs`:
/// 1. Collect every data declaration's constructor types and every
///    binding's untyped RHS (for `infer`'s auto-extend lookup).
/// 2. Check or infer each binding in order, resetting the local context to
///    empty before each one (spec §4.E step 3).
pub fn typecheck_program(interner: &mut StringInterner, program: &Program) -> Result<TypedProgram, CheckError> {
    typecheck_program_with_options(interner, program, CheckerOptions::default())
}

/// As [`typecheck_program`], but with configurable stack-growth thresholds.
pub fn typecheck_program_with_options(
    interner: &mut StringInterner,
    program: &Program,
    options: CheckerOptions,
) -> Result<TypedProgram, CheckError> {
    let mut cxt = Cxt::with_options(interner, options);

    for def in &program.defs {
        match def {
            Def::Data(data) => {
                for (ctor, ty) in check_data(data)? {
                    cxt.data_injs.insert(ctor, ty);
                }
            }
            Def::Bind(bind, _sig) => {
                cxt.binds.insert(bind.name, (*bind.rhs).clone());
            }
        }
    }

    let mut typed_binds = Vec::new();
    for def in &program.defs {
        let Def::Bind(bind, sig) = def else { continue };

        cxt.local = Context::new();
        let curried = bind.curried_rhs();
        let (typed_rhs, ty) = infer_or_check_top(&mut cxt, bind.name, &curried, sig.as_ref())?;
        cxt.sig.insert(bind.name, ty.clone());

        typed_binds.push(aru_types::typed::TypedBind {
            name: bind.name,
            args: Vec::new(),
            ty,
            body: Box::new(typed_rhs),
        });
    }

    Ok(TypedProgram { binds: typed_binds })
}
