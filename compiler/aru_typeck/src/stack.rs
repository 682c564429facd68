//! Stack safety for the mutually recursive checker.
//!
//! `check`/`infer`/`subtype`/`instantiate_l`/`instantiate_r` recurse into
//! each other following the shape of the user's program (spec §5/§9); a
//! deeply nested expression or a long right-leaning chain of applications
//! can otherwise blow the native stack before the checker gets a chance to
//! report a proper `CheckError`. Grounded on `ori_typeck/src/stack.rs`.

/// Ensure sufficient stack space for a recursive checker call.
///
/// Grows the stack once remaining space falls below `red_zone` bytes,
/// allocating a new segment of `stack_size` bytes. Thresholds come from
/// `Cxt::options` (see `crate::cxt::CheckerOptions`).
pub fn ensure_sufficient_stack<R>(red_zone: usize, stack_size: usize, f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(red_zone, stack_size, f)
}
