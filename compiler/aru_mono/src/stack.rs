//! Stack safety for the mutually recursive monomorphizer, mirroring
//! `aru_typeck::stack`: `morph_bind`/`morph_exp` recurse following the
//! shape of the typed program, which can nest arbitrarily deeply.

pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(256 * 1024, 2 * 1024 * 1024, f)
}
