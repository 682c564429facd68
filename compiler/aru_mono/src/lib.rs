//! Monomorphization of the typed, lambda-lifted IR into a closed set of
//! monomorphic bindings (spec §4.G).

pub mod error;
pub mod ir;
pub mod mangle;
pub mod morph;
pub mod program;
pub mod stack;
pub mod state;

pub use error::MonoError;
pub use ir::{MonoBind, MonoExp, MonoExpKind, MonoProgram};
pub use program::{monomorphize_program, monomorphize_program_with_options, MonoOptions};
