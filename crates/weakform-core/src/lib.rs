//! # weakform-core
//!
//! Base representation of weak-form expressions.
//!
//! This crate provides:
//! - The closed set of form classifications ([`FormKind`])
//! - Integration capability flags ([`IntegrationFlags`])
//! - The [`TestSpace`] trait describing test objects at the type level
//! - Shape-only expression leaves and nodes for building weak forms
//! - The base [`Form`]/[`Forms`] list, built with [`form`] and `+`
//!
//! Everything here is inert data: nothing in this crate knows how to
//! evaluate an expression. The assembly crate transforms these types into
//! its own representation and attaches evaluation semantics there.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebra;
pub mod form;
pub mod functions;
pub mod kinds;
pub mod traits;

pub use algebra::{constant, product, sum, Constant, Product, Sum};
pub use form::{form, EmptyForms, Form, Forms};
pub use kinds::{FormKind, IntegrationFlags};
pub use traits::TestSpace;
