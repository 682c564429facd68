//! Monomorphizer state (spec §4.G): the read-only input table and the
//! mutated output table with its Incomplete/Complete cycle-breaker.

use aru_ir::Name;
use aru_types::typed::TypedBind;
use rustc_hash::FxHashMap;

use crate::ir::MonoBind;

/// An `output` entry. *Incomplete* marks a binding whose body is still
/// being specialized, breaking cycles for recursive (and mutually
/// recursive) polymorphic bindings: a recursive call to `morphBind` with the
/// same mangled name sees `Incomplete` and returns the name immediately
/// instead of looping forever.
#[derive(Clone, Debug)]
pub enum MonoState {
    Incomplete,
    Complete(MonoBind),
}

pub struct Monomorphizer {
    pub input: FxHashMap<Name, TypedBind>,
    pub output: FxHashMap<Name, MonoState>,
}

impl Monomorphizer {
    pub fn new(input: FxHashMap<Name, TypedBind>) -> Self {
        Monomorphizer { input, output: FxHashMap::default() }
    }
}
