//! Checker-level errors (spec §7): type errors plus the failure modes that
//! arise from processing bindings and data declarations rather than from
//! type operations themselves.

use aru_diagnostic::{Diagnostic, ErrorCode};
use aru_ir::{Name, StringInterner};
use aru_types::{Type, TypeError};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Type(#[from] TypeError),
    /// A reference to a name that is in no local scope, no signature table,
    /// and no top-level binding — see the Open Question resolution in
    /// `DESIGN.md` for how this differs from the auto-extend path.
    #[error("unresolved name")]
    UnresolvedName(Name),
    /// Context not complete after inferring an unannotated binding.
    #[error("ambiguous polymorphism")]
    AmbiguousPolymorphism(Name),
    #[error("bad data definition")]
    BadDataDefinition(Name),
    #[error("data constructor uses unbound type parameters")]
    UnboundDataParams(Name),
}

impl CheckError {
    pub fn to_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        match self {
            CheckError::Type(type_err) => type_err.to_diagnostic(interner),
            CheckError::UnresolvedName(n) => Diagnostic::error(ErrorCode::UnresolvedName)
                .with_message(format!("unresolved name `{}`", interner.resolve(*n))),
            CheckError::AmbiguousPolymorphism(n) => Diagnostic::error(ErrorCode::AmbiguousPolymorphism)
                .with_message(format!(
                    "binding `{}` is ambiguous: give it an explicit type signature",
                    interner.resolve(*n),
                )),
            CheckError::BadDataDefinition(n) => Diagnostic::error(ErrorCode::BadDataDefinition)
                .with_message(format!("malformed data definition `{}`", interner.resolve(*n))),
            CheckError::UnboundDataParams(n) => Diagnostic::error(ErrorCode::UnboundDataParams)
                .with_message(format!(
                    "constructor `{}` mentions a type parameter not bound by its data declaration",
                    interner.resolve(*n),
                )),
        }
    }
}

/// Convenience constructor used throughout `infer`/`check`/`subtype`.
pub fn type_mismatch(expected: Type, found: Type) -> CheckError {
    CheckError::Type(TypeError::TypeMismatch { expected, found })
}
