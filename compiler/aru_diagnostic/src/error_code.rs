//! Error code taxonomy for the semantic-analysis core.
//!
//! One code per error kind named in spec §7, so each failure mode is
//! searchable independent of its rendered message.

use std::fmt;

/// A stable, searchable error code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Propagated from an earlier, out-of-scope stage (lexer/parser/renamer).
    SyntaxOrShape,
    UnboundTypeVar,
    UnknownExistential,
    UnknownConstructor,
    UnresolvedName,
    TypeMismatch,
    NotAFunction,
    ArityMismatch,
    AmbiguousPolymorphism,
    BadDataDefinition,
    UnboundDataParams,
    StructuralTypeMismatch,
    UnmappedTypeVariable,
    MissingMain,
    LetNotSupported,
}

impl ErrorCode {
    /// Stable four-digit code string, e.g. `E1003`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::SyntaxOrShape => "E1000",
            ErrorCode::UnboundTypeVar => "E1001",
            ErrorCode::UnknownExistential => "E1002",
            ErrorCode::UnknownConstructor => "E1003",
            ErrorCode::UnresolvedName => "E1004",
            ErrorCode::TypeMismatch => "E1005",
            ErrorCode::NotAFunction => "E1006",
            ErrorCode::ArityMismatch => "E1007",
            ErrorCode::AmbiguousPolymorphism => "E1008",
            ErrorCode::BadDataDefinition => "E1009",
            ErrorCode::UnboundDataParams => "E1010",
            ErrorCode::StructuralTypeMismatch => "E2000",
            ErrorCode::UnmappedTypeVariable => "E2001",
            ErrorCode::MissingMain => "E2002",
            ErrorCode::LetNotSupported => "E2003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
