//! Aru types — the type-system data model shared by the checker and the
//! monomorphizer (spec §4.A/§4.B).
//!
//! - [`ty`]: `Type`, existential variable ids, free-evar computation, display.
//! - [`context`]: the ordered context `Γ` and its primitive operations.
//! - [`wf`]: well-formedness (`Γ ⊢ A`).
//! - [`ast`]: the checker's untyped, inbound source IR.
//! - [`typed`]: the checker's typed, outbound IR.
//! - [`error`]: `TypeError`, shared between the checker and the monomorphizer.

pub mod ast;
pub mod context;
pub mod error;
pub mod typed;
pub mod ty;
pub mod wf;

pub use context::{Context, ContextDisplay, Elem};
pub use error::TypeError;
pub use ty::{EVar, Type, TypeDisplay};
