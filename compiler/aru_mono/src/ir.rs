//! Monomorphic IR — the monomorphizer's output (spec §3, §4.G, §6).
//!
//! Every `Type` reachable from this IR is ground: no `TVar`, `TEVar`, or
//! `TAll` remains (testable property 6, §8). Mirrors [`aru_types::typed`]'s
//! shape since monomorphization only rewrites types and mangles names, it
//! never changes expression structure.

use aru_ir::Name;
use aru_types::ast::Lit;
use aru_types::ty::Type;

#[derive(Clone, Debug, PartialEq)]
pub struct MonoExp {
    pub kind: MonoExpKind,
    pub ty: Type,
}

impl MonoExp {
    pub fn new(kind: MonoExpKind, ty: Type) -> Self {
        MonoExp { kind, ty }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MonoExpKind {
    Lit(Lit),
    /// A reference, either to a local (lambda-bound) term variable or,
    /// after mangling, to another entry in the monomorphic program.
    Id(Name),
    Inj(Name),
    App(Box<MonoExp>, Box<MonoExp>),
    Abs(Name, Box<MonoExp>),
    Add(Box<MonoExp>, Box<MonoExp>),
    Case(Box<MonoExp>, Vec<MonoBranch>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonoPattern {
    pub kind: MonoPatternKind,
    pub ty: Type,
}

impl MonoPattern {
    pub fn new(kind: MonoPatternKind, ty: Type) -> Self {
        MonoPattern { kind, ty }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MonoPatternKind {
    Var(Name),
    Catch,
    Lit(Lit),
    Enum(Name),
    Inj(Name, Vec<MonoPattern>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonoBranch {
    pub pattern: MonoPattern,
    pub body: MonoExp,
}

/// One monomorphic binding, keyed in [`crate::state::Monomorphizer::output`]
/// by its mangled name. Every formal parameter has already been erased into
/// an explicit `Abs` in `body` (spec §4.G step 5, the "arguments are
/// internal lambdas" convention) — there is no separate args list.
#[derive(Clone, Debug)]
pub struct MonoBind {
    pub name: Name,
    pub ty: Type,
    pub body: Box<MonoExp>,
}

#[derive(Clone, Debug, Default)]
pub struct MonoProgram {
    pub binds: Vec<MonoBind>,
}
