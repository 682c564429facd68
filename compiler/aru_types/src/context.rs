//! Ordered context (spec §3/§4.A/§4.B).
//!
//! Structured as an append-mostly `Vec`, per spec §9 ("avoid linked lists for
//! cache behavior"). Grounded on `Context`/`ContextElem` in
//! `examples/other_examples/.../siml__src-bi_types.rs`: elements are
//! searched and split on by structural equality (`split_at`/`break_marker`
//! there, `split_on`/`drop_trailing` here), since an element, once pushed,
//! is never mutated in place — only solved via replacement in `solve`.

use std::fmt;

use aru_ir::{Name, StringInterner};

use crate::ty::{EVar, Type};

/// One element of the ordered context.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Elem {
    /// `EnvVar(x, A)` — term variable `x` of type `A`.
    Var(Name, Type),
    /// `EnvTVar(α)` — universal type variable in scope.
    TVar(Name),
    /// `EnvTEVar(ά)` — unsolved existential.
    TEVar(EVar),
    /// `EnvSolved(ά, τ)` — existential solved to monotype `τ`.
    Solved(EVar, Type),
    /// `EnvMark(ά)` — scope marker.
    Mark(EVar),
}

/// The ordered context `Γ`.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Context {
    elems: Vec<Elem>,
}

impl Context {
    pub fn new() -> Self {
        Context { elems: Vec::new() }
    }

    pub fn push(&mut self, elem: Elem) {
        self.elems.push(elem);
    }

    pub fn push_all(&mut self, elems: impl IntoIterator<Item = Elem>) {
        self.elems.extend(elems);
    }

    pub fn elems(&self) -> &[Elem] {
        &self.elems
    }

    fn position(&self, elem: &Elem) -> Option<usize> {
        self.elems.iter().position(|e| e == elem)
    }

    fn position_tevar(&self, ev: EVar) -> Option<usize> {
        self.elems.iter().position(|e| matches!(e, Elem::TEVar(e2) if *e2 == ev))
    }

    /// `splitOn(elem, Γ) → (Γ_L, Γ_R)`. Splits at the first occurrence of
    /// `elem`, dropping the element itself. `None` if absent (precondition
    /// failure).
    pub fn split_on(&self, elem: &Elem) -> Option<(Context, Context)> {
        let pos = self.position(elem)?;
        let left = Context { elems: self.elems[..pos].to_vec() };
        let right = Context { elems: self.elems[pos + 1..].to_vec() };
        Some((left, right))
    }

    fn split_on_tevar(&self, ev: EVar) -> Option<(Context, Context)> {
        let pos = self.position_tevar(ev)?;
        let left = Context { elems: self.elems[..pos].to_vec() };
        let right = Context { elems: self.elems[pos + 1..].to_vec() };
        Some((left, right))
    }

    /// Truncate the context to the prefix strictly before `elem`.
    ///
    /// # Panics
    /// Panics if `elem` is not present — per spec §4.A this is a checker
    /// precondition failure, not a user-facing error.
    #[allow(clippy::expect_used, reason = "precondition failure is an internal bug, not a user error")]
    pub fn drop_trailing(&mut self, elem: &Elem) {
        let pos = self.position(elem).expect("drop_trailing: element not in context");
        self.elems.truncate(pos);
    }

    /// Rightmost-to-leftmost search for `EnvSolved(ά, τ)`.
    pub fn find_solved(&self, ev: EVar) -> Option<&Type> {
        self.elems.iter().rev().find_map(|e| match e {
            Elem::Solved(e2, ty) if *e2 == ev => Some(ty),
            _ => None,
        })
    }

    /// Rightmost-to-leftmost search for `EnvVar(x, A)`.
    pub fn find_var(&self, x: Name) -> Option<&Type> {
        self.elems.iter().rev().find_map(|e| match e {
            Elem::Var(v, ty) if *v == x => Some(ty),
            _ => None,
        })
    }

    /// `isComplete(Γ)`: no `EnvTEVar` element remains.
    pub fn is_complete(&self) -> bool {
        !self.elems.iter().any(|e| matches!(e, Elem::TEVar(_)))
    }

    /// True iff `ά` occurs strictly to the left of `έ` (`Γ[ά^][έ^]`).
    pub fn existentials_ordered(&self, a: EVar, b: EVar) -> bool {
        match self.position_tevar(b) {
            Some(pos_b) => self.elems[..pos_b].iter().any(|e| matches!(e, Elem::TEVar(e2) if *e2 == a)),
            None => false,
        }
    }

    /// Replace `EnvTEVar(ά)` with `elems`, in place. Used by the `Arr`
    /// instantiation rule and `applyInfer`'s existential-application case.
    #[allow(clippy::expect_used, reason = "precondition failure is an internal bug, not a user error")]
    pub fn insert_at_tevar(&self, ev: EVar, elems: Vec<Elem>) -> Context {
        let (left, right) = self.split_on_tevar(ev).expect("insert_at_tevar: existential not in context");
        let mut out = left.elems;
        out.extend(elems);
        out.extend(right.elems);
        Context { elems: out }
    }

    /// `solve (ΓL,α^,ΓR) α τ = (ΓL,α = τ,ΓR)`, failing the well-formedness
    /// precondition `wellFormed(Γ_L, τ)`.
    pub fn solve(&self, ev: EVar, ty: Type) -> Option<Context> {
        let (left, right) = self.split_on_tevar(ev)?;
        if crate::wf::well_formed(&left, &ty).is_err() {
            return None;
        }
        let mut out = left.elems;
        out.push(Elem::Solved(ev, ty));
        out.extend(right.elems);
        Some(Context { elems: out })
    }

    /// `apply(Γ, A) = [Γ]A`: rewrite every `TEVar` to its solution, recursing
    /// structurally, iterated to a fixed point since a solution may itself
    /// reference another solved existential (testable property 1, §8).
    pub fn apply(&self, ty: &Type) -> Type {
        let once = self.apply_once(ty);
        if once == *ty {
            once
        } else {
            self.apply(&once)
        }
    }

    /// Renders the context for debug logging, mirroring `siml`'s
    /// `Context::print`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ContextDisplay<'a> {
        ContextDisplay { ctx: self, interner }
    }

    fn apply_once(&self, ty: &Type) -> Type {
        match ty {
            Type::TLit(n) => Type::TLit(*n),
            Type::TVar(n) => Type::TVar(*n),
            Type::TEVar(ev) => match self.find_solved(*ev) {
                Some(solved) => solved.clone(),
                None => Type::TEVar(*ev),
            },
            Type::TFun(a, b) => Type::fun(self.apply_once(a), self.apply_once(b)),
            Type::TAll(v, body) => Type::all(*v, self.apply_once(body)),
            Type::TData(n, args) => Type::TData(*n, args.iter().map(|a| self.apply_once(a)).collect()),
        }
    }
}

/// Renders a [`Context`] using a [`StringInterner`] to resolve [`Name`]s.
pub struct ContextDisplay<'a> {
    ctx: &'a Context,
    interner: &'a StringInterner,
}

impl fmt::Display for ContextDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.ctx.elems.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match elem {
                Elem::Var(n, ty) => write!(f, "{}: {}", self.interner.resolve(*n), ty.display(self.interner))?,
                Elem::TVar(n) => write!(f, "{}", self.interner.resolve(*n))?,
                Elem::TEVar(e) => write!(f, "{e}")?,
                Elem::Solved(e, ty) => write!(f, "{e} = {}", ty.display(self.interner))?,
                Elem::Mark(e) => write!(f, ">{e}")?,
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aru_ir::StringInterner;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_on_drops_the_element() {
        let mut ctx = Context::new();
        let ev = EVar::from_raw(0);
        ctx.push(Elem::TVar(name_for_test()));
        ctx.push(Elem::TEVar(ev));
        let (left, right) = ctx.split_on(&Elem::TEVar(ev)).unwrap();
        assert_eq!(left.elems.len(), 1);
        assert_eq!(right.elems.len(), 0);
    }

    #[test]
    fn display_renders_var_and_solved_elems() {
        let mut interner = StringInterner::new();
        let int = interner.intern("Int");
        let x = interner.intern("x");
        let mut ctx = Context::new();
        let ev = EVar::from_raw(0);
        ctx.push(Elem::Var(x, Type::TLit(int)));
        ctx.push(Elem::Solved(ev, Type::TLit(int)));
        assert_eq!(ctx.display(&interner).to_string(), "[x: Int, '0 = Int]");
    }

    #[test]
    fn apply_solves_through_chain() {
        let mut interner = StringInterner::new();
        let int = interner.intern("Int");
        let mut ctx = Context::new();
        let a = EVar::from_raw(0);
        let b = EVar::from_raw(1);
        ctx.push(Elem::TEVar(a));
        ctx.push(Elem::TEVar(b));
        // a := b, b := Int
        ctx = ctx.solve(a, Type::TEVar(b)).unwrap();
        ctx = ctx.solve(b, Type::TLit(int)).unwrap();
        assert_eq!(ctx.apply(&Type::TEVar(a)), Type::TLit(int));
    }

    #[test]
    fn existentials_ordered_checks_left_to_right() {
        let mut ctx = Context::new();
        let a = EVar::from_raw(0);
        let b = EVar::from_raw(1);
        ctx.push(Elem::TEVar(a));
        ctx.push(Elem::TEVar(b));
        assert_eq!(ctx.existentials_ordered(a, b), true);
        assert_eq!(ctx.existentials_ordered(b, a), false);
    }

    #[test]
    fn is_complete_false_with_unsolved_evar() {
        let mut ctx = Context::new();
        ctx.push(Elem::TEVar(EVar::from_raw(0)));
        assert_eq!(ctx.is_complete(), false);
    }

    fn name_for_test() -> Name {
        let mut interner = StringInterner::new();
        interner.intern("a")
    }
}
