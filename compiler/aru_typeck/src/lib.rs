//! Bidirectional type inference and checking for the aru compiler core
//! (spec §4.A–§4.F): predicative higher-rank polymorphism via the
//! "complete and easy" algorithm, over an ordered context of type, term, and
//! existential-variable bindings.

pub mod cxt;
pub mod data;
pub mod error;
pub mod infer;
pub mod instantiate;
pub mod pattern;
pub mod program;
pub mod stack;
pub mod subtype;

pub use cxt::{CheckerOptions, Cxt};
pub use error::CheckError;
pub use program::{typecheck_program, typecheck_program_with_options};
