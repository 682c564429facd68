//! Types (spec §3).
//!
//! Mirrors the `Type` enum in `examples/other_examples/.../siml__src-bi_types.rs`
//! (`Int | Bool | Var | Existential | Poly | Fun`), generalized to this
//! language's literal/data-type surface (`TLit`, `TData`) and named to match
//! spec §3 exactly (`TLit`, `TVar`, `TEVar`, `TFun`, `TAll`, `TData`).

use std::fmt;

use aru_ir::{Name, StringInterner};
use rustc_hash::FxHashSet;

/// An existential (unification) variable.
///
/// Represented as a counter-backed id rather than an interned [`Name`]:
/// existentials are compiler-generated (never user-written), so collisions
/// are impossible by construction (spec §9) and a plain `u32` avoids paying
/// for interning on the hot path of `instantiate`/`subtype`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct EVar(u32);

impl EVar {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        EVar(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}", self.0)
    }
}

/// A type, per spec §3.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Type {
    /// Primitive type constant (`Int`, `Char`, or a nullary user data type).
    TLit(Name),
    /// Universal (rigid) type variable.
    TVar(Name),
    /// Existential (unification) variable.
    TEVar(EVar),
    /// Function type, right-associative.
    TFun(Box<Type>, Box<Type>),
    /// Universal quantifier; may appear at any position (higher-rank).
    TAll(Name, Box<Type>),
    /// Applied data constructor.
    TData(Name, Vec<Type>),
}

impl Type {
    pub fn fun(a: Type, b: Type) -> Type {
        Type::TFun(Box::new(a), Box::new(b))
    }

    pub fn all(a: Name, body: Type) -> Type {
        Type::TAll(a, Box::new(body))
    }

    /// A type is monotype iff it contains no `TAll`.
    pub fn is_mono(&self) -> bool {
        match self {
            Type::TLit(_) | Type::TVar(_) | Type::TEVar(_) => true,
            Type::TAll(..) => false,
            Type::TFun(a, b) => a.is_mono() && b.is_mono(),
            Type::TData(_, args) => args.iter().all(Type::is_mono),
        }
    }

    /// Free existential variables. Ignores `TVar` and `TLit`, per spec §3.
    pub fn frees(&self) -> FxHashSet<EVar> {
        let mut set = FxHashSet::default();
        self.frees_into(&mut set);
        set
    }

    fn frees_into(&self, set: &mut FxHashSet<EVar>) {
        match self {
            Type::TLit(_) | Type::TVar(_) => {}
            Type::TEVar(e) => {
                set.insert(*e);
            }
            Type::TFun(a, b) => {
                a.frees_into(set);
                b.frees_into(set);
            }
            Type::TAll(_, body) => body.frees_into(set),
            Type::TData(_, args) => {
                for arg in args {
                    arg.frees_into(set);
                }
            }
        }
    }

    /// Capture-avoiding-by-construction substitution of a rigid `TVar` (used
    /// when instantiating a constructor's or a `TAll`-quantified binding's
    /// bound variables with fresh existentials/rigids). The renamer
    /// guarantees bound names are globally unique, so no shadowing check is
    /// needed here.
    pub fn subst_var(&self, var: Name, replacement: &Type) -> Type {
        match self {
            Type::TLit(n) => Type::TLit(*n),
            Type::TVar(v) => {
                if *v == var {
                    replacement.clone()
                } else {
                    Type::TVar(*v)
                }
            }
            Type::TEVar(e) => Type::TEVar(*e),
            Type::TFun(a, b) => Type::fun(a.subst_var(var, replacement), b.subst_var(var, replacement)),
            Type::TAll(v, body) => {
                if *v == var {
                    Type::TAll(*v, body.clone())
                } else {
                    Type::all(*v, body.subst_var(var, replacement))
                }
            }
            Type::TData(n, args) => {
                Type::TData(*n, args.iter().map(|a| a.subst_var(var, replacement)).collect())
            }
        }
    }

    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> TypeDisplay<'a> {
        TypeDisplay { ty: self, interner }
    }
}

/// Renders a [`Type`] using a [`StringInterner`] to resolve [`Name`]s.
pub struct TypeDisplay<'a> {
    ty: &'a Type,
    interner: &'a StringInterner,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_type(self.ty, self.interner, f, 0)
    }
}

fn fmt_type(ty: &Type, interner: &StringInterner, f: &mut fmt::Formatter<'_>, depth: u32) -> fmt::Result {
    match ty {
        Type::TLit(n) => write!(f, "{}", interner.resolve(*n)),
        Type::TVar(n) => write!(f, "{}", interner.resolve(*n)),
        Type::TEVar(e) => write!(f, "{{{e}}}"),
        Type::TFun(a, b) => {
            if depth > 0 {
                write!(f, "(")?;
            }
            fmt_type(a, interner, f, depth + 1)?;
            write!(f, " -> ")?;
            fmt_type(b, interner, f, 0)?;
            if depth > 0 {
                write!(f, ")")?;
            }
            Ok(())
        }
        Type::TAll(v, body) => {
            write!(f, "forall {}. ", interner.resolve(*v))?;
            fmt_type(body, interner, f, 0)
        }
        Type::TData(n, args) => {
            write!(f, "{}", interner.resolve(*n))?;
            for arg in args {
                write!(f, " ")?;
                fmt_type(arg, interner, f, 1)?;
            }
            Ok(())
        }
    }
}
