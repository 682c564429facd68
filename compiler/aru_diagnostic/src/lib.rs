//! Diagnostic rendering for the aru semantic-analysis core.
//!
//! Per the ambient-stack expansion (`SPEC_FULL.md` §11): error codes for
//! searchability, a clear headline message, and optional notes for context —
//! trimmed from the teacher's richer `Diagnostic` (no spans, no suggestions,
//! no fix registry; this core's errors have no source positions to attach to).

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
