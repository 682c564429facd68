//! The top-level checker state `Cxt` (spec §3).

use aru_ir::{Name, StringInterner};
use aru_types::ast::Exp;
use aru_types::context::{Context, Elem};
use aru_types::ty::{EVar, Type};
use rustc_hash::FxHashMap;

/// Top-level context: the ordered local context plus the tables that live
/// for the whole type-check pass.
pub struct Cxt {
    /// The ordered local context `Γ`. Transient within a single binding:
    /// grows as rules enter, truncated back to empty before the next
    /// top-level binding (spec §4.E, `typecheckBind` step 3).
    pub local: Context,
    /// User-provided and inferred signatures, monotonically growing as each
    /// binding completes.
    pub sig: FxHashMap<Name, Type>,
    /// Untyped RHS of every top-level binding, for the auto-extend lookup
    /// in `infer`'s `EVar` case (see `DESIGN.md` for why this — rather than
    /// blind auto-extension — is what distinguishes a forward reference to
    /// a real binding from a genuinely unresolved name).
    pub binds: FxHashMap<Name, Exp>,
    /// Constructor types, closed over their free type variables by
    /// universal quantification.
    pub data_injs: FxHashMap<Name, Type>,
    next_tevar: u32,
    int_name: Name,
    char_name: Name,
    pub options: CheckerOptions,
}

/// Stack-growth thresholds for the mutually recursive checker (spec §9,
/// `crate::stack::ensure_sufficient_stack`). Follows the teacher's
/// `TypeCheckerBuilder` convention, trimmed to the one knob this core
/// actually exposes.
#[derive(Clone, Copy, Debug)]
pub struct CheckerOptions {
    /// Grow the stack once remaining space falls below this many bytes.
    pub stack_red_zone: usize,
    /// Size of each newly allocated stack segment, in bytes.
    pub stack_size: usize,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        CheckerOptions { stack_red_zone: 256 * 1024, stack_size: 2 * 1024 * 1024 }
    }
}

impl Cxt {
    /// Interns the two built-in literal type names (`Int`, `Char`) once up
    /// front so `infer`'s `ELit` case never has to touch the interner.
    pub fn new(interner: &mut StringInterner) -> Self {
        Self::with_options(interner, CheckerOptions::default())
    }

    /// As [`Cxt::new`], but with configurable stack-growth thresholds.
    pub fn with_options(interner: &mut StringInterner, options: CheckerOptions) -> Self {
        Cxt {
            local: Context::new(),
            sig: FxHashMap::default(),
            binds: FxHashMap::default(),
            data_injs: FxHashMap::default(),
            next_tevar: 0,
            int_name: interner.intern("Int"),
            char_name: interner.intern("Char"),
            options,
        }
    }

    /// Monotonic fresh existential counter — collisions are impossible by
    /// construction (spec §9).
    pub fn fresh_evar(&mut self) -> EVar {
        let id = self.next_tevar;
        self.next_tevar += 1;
        EVar::from_raw(id)
    }

    pub fn push(&mut self, elem: Elem) {
        self.local.push(elem);
    }

    pub fn push_all(&mut self, elems: impl IntoIterator<Item = Elem>) {
        self.local.push_all(elems);
    }

    pub fn drop_trailing(&mut self, elem: &Elem) {
        self.local.drop_trailing(elem);
    }

    pub fn apply(&self, ty: &Type) -> Type {
        self.local.apply(ty)
    }

    pub fn int_name(&self) -> Name {
        self.int_name
    }

    pub fn char_name(&self) -> Name {
        self.char_name
    }
}
