//! Source-level (untyped) IR — the checker's inbound interface (spec §6).
//!
//! This is what the external, out-of-scope pipeline stages (lexer, parser,
//! renamer, desugarer) hand to the checker: a flat list of [`Def`]s with
//! globally-unique binder names (the renamer's invariant).

use aru_ir::Name;

use crate::ty::Type;

/// An integer or character literal.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Lit {
    Int(i64),
    Char(char),
}

/// A source expression.
#[derive(Clone, Debug)]
pub enum Exp {
    Lit(Lit),
    Var(Name),
    /// Reference to a data constructor (`κ`).
    Inj(Name),
    Ann(Box<Exp>, Type),
    App(Box<Exp>, Box<Exp>),
    Abs(Name, Box<Exp>),
    Let(Bind, Box<Exp>),
    Add(Box<Exp>, Box<Exp>),
    Case(Box<Exp>, Vec<Branch>),
}

/// A pattern.
#[derive(Clone, Debug)]
pub enum Pattern {
    Var(Name),
    /// Wildcard (`_`).
    Catch,
    Lit(Lit),
    /// Nullary constructor.
    Enum(Name),
    /// Constructor applied to sub-patterns.
    Inj(Name, Vec<Pattern>),
}

/// One `case` branch.
#[derive(Clone, Debug)]
pub struct Branch {
    pub pattern: Pattern,
    pub body: Exp,
}

/// A binding `name args... = rhs`, curried into `foldr EAbs rhs args` by the
/// checker (spec §4.E).
#[derive(Clone, Debug)]
pub struct Bind {
    pub name: Name,
    pub args: Vec<Name>,
    pub rhs: Box<Exp>,
}

impl Bind {
    /// `foldr EAbs rhs vars`: wrap `rhs` in one `EAbs` per argument.
    pub fn curried_rhs(&self) -> Exp {
        self.args
            .iter()
            .rev()
            .fold((*self.rhs).clone(), |body, &arg| Exp::Abs(arg, Box::new(body)))
    }
}

/// One constructor injection in a data declaration: `κ : T_κ`, where `T_κ`
/// is the full arrow type `A₁ → … → Aₙ → D α⃗` as written (no leading `TAll`
/// — the injection shares the data declaration's bound parameters).
#[derive(Clone, Debug)]
pub struct DataInj {
    pub ctor: Name,
    pub ty: Type,
}

/// A data-type declaration. `T` (spec §6) is `TAll* (TData name [TVar …])`;
/// `params` are the bound type variables in declaration order.
#[derive(Clone, Debug)]
pub struct Data {
    pub name: Name,
    pub params: Vec<Name>,
    pub injs: Vec<DataInj>,
}

/// A top-level definition.
#[derive(Clone, Debug)]
pub enum Def {
    Data(Data),
    /// `DBind`, optionally paired with a `DSig` giving an explicit type.
    Bind(Bind, Option<Type>),
}

/// A flat, renamed, desugared program — the checker's sole input.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub defs: Vec<Def>,
}
