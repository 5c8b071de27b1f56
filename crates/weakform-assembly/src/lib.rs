//! # weakform-assembly
//!
//! The assembly-side representation of weak forms.
//!
//! This crate provides:
//! - The [`Evaluator`] collaborator trait and a buffer-backed reference
//!   implementation
//! - Assembly-side expression and test leaves with evaluation semantics
//! - [`Form`] and the heterogeneous [`Forms`] list with its build-time
//!   consistency check
//! - The [`Transform`] layer mapping the base representation in
//! - Cell/face/boundary pass drivers built on `weakform-unroll`
//!
//! ## Consistency
//!
//! Constructing a [`Forms`] list asserts, in `const` context, that no two
//! forms with the same classification and field slot request intersecting
//! integration capabilities. A conflicting list is inexpressible: the
//! offending instantiation fails to build.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod check;
pub mod driver;
pub mod evaluator;
pub mod expression;
pub mod form;
pub mod forms;
pub mod functions;
pub mod transform;

#[cfg(test)]
mod tests;

pub use check::{validate_signatures, ConflictError, FormSignature, MAX_FORMS};
pub use driver::{boundary_pass, cell_pass, face_pass};
pub use evaluator::{BufferedEvaluator, Evaluator};
pub use expression::{Expression, Submit};
pub use form::Form;
pub use forms::{Assemble, EmptyForms, FormList, Forms};
pub use transform::{transform, Transform};
