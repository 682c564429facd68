//! Type-level errors (spec §7), shared between the checker and the
//! monomorphizer.

use aru_diagnostic::{Diagnostic, ErrorCode};
use aru_ir::{Name, StringInterner};
use thiserror::Error;

use crate::ty::{EVar, Type};

/// A type-level error. Checker-specific errors (`AmbiguousPolymorphism`,
/// `BadDataDefinition`, ...) and monomorphizer-specific errors
/// (`MissingMain`, `LetNotSupported`, ...) live in their own crates and wrap
/// this one, since those failure modes don't arise from type operations
/// themselves (spec §7).
#[derive(Clone, Debug, Error)]
pub enum TypeError {
    #[error("unbound type variable")]
    UnboundTypeVar(Name),
    #[error("unknown existential variable")]
    UnknownExistential(EVar),
    #[error("unknown constructor")]
    UnknownConstructor(Name),
    #[error("type mismatch")]
    TypeMismatch { expected: Type, found: Type },
    #[error("not a function type")]
    NotAFunction(Type),
    #[error("arity mismatch")]
    ArityMismatch { ctor: Name, expected: usize, found: usize },
}

impl TypeError {
    pub fn to_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        match self {
            TypeError::UnboundTypeVar(n) => Diagnostic::error(ErrorCode::UnboundTypeVar)
                .with_message(format!("unbound type variable `{}`", interner.resolve(*n))),
            TypeError::UnknownExistential(e) => Diagnostic::error(ErrorCode::UnknownExistential)
                .with_message(format!("unknown existential variable `{e}`")),
            TypeError::UnknownConstructor(n) => Diagnostic::error(ErrorCode::UnknownConstructor)
                .with_message(format!("unknown constructor `{}`", interner.resolve(*n))),
            TypeError::TypeMismatch { expected, found } => Diagnostic::error(ErrorCode::TypeMismatch)
                .with_message(format!(
                    "type mismatch: expected `{}`, found `{}`",
                    expected.display(interner),
                    found.display(interner),
                )),
            TypeError::NotAFunction(ty) => Diagnostic::error(ErrorCode::NotAFunction)
                .with_message(format!("`{}` is not a function", ty.display(interner))),
            TypeError::ArityMismatch { ctor, expected, found } => {
                Diagnostic::error(ErrorCode::ArityMismatch).with_message(format!(
                    "constructor `{}` expects {expected} argument(s), found {found}",
                    interner.resolve(*ctor),
                ))
            }
        }
    }
}
