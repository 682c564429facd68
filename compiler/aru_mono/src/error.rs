//! Monomorphizer-level errors (spec §7). All of these indicate a bug in an
//! earlier stage (the checker or lambda lifter), never a user-facing
//! diagnosis of the source program — by the time the monomorphizer runs,
//! the program has already type-checked.

use aru_diagnostic::{Diagnostic, ErrorCode};
use aru_ir::{Name, StringInterner};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum MonoError {
    /// A binding's declared type and the expected (concrete) type it is
    /// being specialized against don't share the same shape.
    #[error("structural type mismatch during monomorphization")]
    StructuralTypeMismatch,
    /// `mono` encountered a `TVar` absent from the current `polys` mapping.
    #[error("type variable not mapped during monomorphization")]
    UnmappedTypeVariable,
    #[error("no `main` binding found")]
    MissingMain,
    /// Nested `Let` after lambda lifting — an accepted limitation of the
    /// core (spec §4.G).
    #[error("nested let is not supported by the monomorphizer")]
    LetNotSupported,
    #[error("unresolved global reference")]
    UnresolvedName(Name),
}

impl MonoError {
    pub fn to_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        match self {
            MonoError::StructuralTypeMismatch => {
                Diagnostic::error(ErrorCode::StructuralTypeMismatch).with_message("structural type mismatch during monomorphization")
            }
            MonoError::UnmappedTypeVariable => {
                Diagnostic::error(ErrorCode::UnmappedTypeVariable).with_message("type variable not mapped during monomorphization")
            }
            MonoError::MissingMain => Diagnostic::error(ErrorCode::MissingMain).with_message("no `main` binding found"),
            MonoError::LetNotSupported => {
                Diagnostic::error(ErrorCode::LetNotSupported).with_message("nested let is not supported by the monomorphizer")
            }
            MonoError::UnresolvedName(n) => Diagnostic::error(ErrorCode::UnresolvedName)
                .with_message(format!("unresolved global reference `{}`", interner.resolve(*n))),
        }
    }
}
