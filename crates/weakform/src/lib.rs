//! # weakform
//!
//! A compile-time symbolic system for weak-form expressions.
//!
//! Weak forms are built in a base representation (test object applied to
//! an expression, collected into an ordered heterogeneous list), then
//! transformed into assembly types that know how to drive an evaluator
//! kernel. The transformed list is checked once, at build time, for the
//! global consistency invariant: no two forms may submit the same
//! information to the same field slot.
//!
//! ## Quick start
//!
//! ```
//! use weakform::base::functions::{FEFunction, TestFunction, TestGradient};
//! use weakform::base::{form, sum};
//! use weakform::prelude::*;
//!
//! let forms = transform(
//!     form(TestFunction::<0>, sum(FEFunction::<0>, FEFunction::<1>))
//!         + form(TestGradient::<1>, FEFunction::<0>),
//! );
//!
//! let mut phi = BufferedEvaluator::<f64>::new(2, 4);
//! cell_pass::<4, _, _>(&forms, &mut phi);
//! assert!(phi.was_integrated(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use weakform_assembly as assembly;
pub use weakform_core as base;
pub use weakform_unroll as unroll;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use weakform_assembly::{
        boundary_pass, cell_pass, face_pass, transform, Assemble, BufferedEvaluator, EmptyForms,
        Evaluator, Expression, Form, FormList, Forms, Submit, Transform,
    };
    pub use weakform_core::{form, FormKind, IntegrationFlags, TestSpace};
    pub use weakform_unroll::{static_for, StaticFor};
}
