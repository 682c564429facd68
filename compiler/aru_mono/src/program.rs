//! Whole-program entry point (spec §4.G "Entry point").

use aru_ir::{Name, StringInterner};
use aru_types::ty::Type;
use aru_types::typed::TypedProgram;
use rustc_hash::FxHashMap;

use crate::error::MonoError;
use crate::ir::MonoProgram;
use crate::morph::morph_bind;
use crate::state::{MonoState, Monomorphizer};

/// Knobs for [`monomorphize_program_with_options`], trimmed to the one thing
/// this core actually lets a caller vary: which binding is the entry point.
/// Follows the teacher's `TypeCheckerBuilder` convention (builder methods,
/// `#[must_use]`), scaled down to the single field this crate needs.
#[derive(Clone, Debug)]
pub struct MonoOptions {
    entry_point: String,
}

impl MonoOptions {
    /// Set the entry-point binding name. Defaults to `"main"`.
    #[must_use]
    pub fn with_entry_point(mut self, name: impl Into<String>) -> Self {
        self.entry_point = name.into();
        self
    }
}

impl Default for MonoOptions {
    fn default() -> Self {
        MonoOptions { entry_point: "main".to_string() }
    }
}

/// Looks up `main`, specializes it against `Int` (the core's sole observed
/// entry-point type — see `DESIGN.md`), and returns every binding reached
/// during specialization.
///
/// # Panics
/// Never panics on well-formed input. An `Incomplete` entry left in
/// `output` after the traversal finishes is an internal bug (every
/// recursive cycle is expected to be closed by `morph_bind`'s memoization)
/// and is reported as such rather than silently dropped.
pub fn monomorphize_program(interner: &mut StringInterner, typed: &TypedProgram) -> Result<MonoProgram, MonoError> {
    monomorphize_program_with_options(interner, typed, &MonoOptions::default())
}

/// As [`monomorphize_program`], but with a configurable entry-point name.
pub fn monomorphize_program_with_options(
    interner: &mut StringInterner,
    typed: &TypedProgram,
    options: &MonoOptions,
) -> Result<MonoProgram, MonoError> {
    let main_name = interner.intern(&options.entry_point);
    let input: FxHashMap<Name, aru_types::typed::TypedBind> =
        typed.binds.iter().map(|b| (b.name, b.clone())).collect();

    let main_bind = input.get(&main_name).cloned().ok_or(MonoError::MissingMain)?;

    let mut mono_state = Monomorphizer::new(input);
    let int_ty = Type::TLit(interner.intern("Int"));
    morph_bind(&mut mono_state, interner, &int_ty, &main_bind)?;

    let mut binds = Vec::with_capacity(mono_state.output.len());
    for (name, state) in mono_state.output {
        match state {
            MonoState::Complete(bind) => binds.push(bind),
            MonoState::Incomplete => {
                unreachable!("monomorphizer left `{}` incomplete at pass exit", interner.resolve(name))
            }
        }
    }
    // `output`'s hash-map iteration order is nondeterministic; sort by
    // rendered name so the result is reproducible for callers and tests.
    binds.sort_by(|a, b| interner.resolve(a.name).cmp(interner.resolve(b.name)));

    Ok(MonoProgram { binds })
}
