//! The type-level description of test objects.

use crate::kinds::{FormKind, IntegrationFlags};

/// A test object described at the type level.
///
/// Every test object carries three compile-time facts: which field slot it
/// submits into, which traversal path its form participates in, and which
/// capabilities (values, gradients, exterior-side variants) it needs the
/// evaluator to integrate. Forms read all three from here, and the
/// assembly crate's consistency check compares them across a whole list
/// before any numerical code runs.
pub trait TestSpace {
    /// The field slot this test object submits contributions into.
    const FE_NUMBER: u32;

    /// The traversal path of forms tested by this object.
    const KIND: FormKind;

    /// The capabilities this test object requests from the evaluator.
    const FLAGS: IntegrationFlags;
}
