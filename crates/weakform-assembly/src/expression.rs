//! Evaluation seams between expressions, test objects and the evaluator.
//!
//! Structural nodes (`Sum`, `Product`, `Constant`) are shared with the
//! base representation; their evaluation semantics live here, so a node is
//! evaluable exactly when its children are assembly-side leaves.

use std::ops::{Add, Mul};

use weakform_core::{Constant, Product, Sum, TestSpace};

use crate::evaluator::Evaluator;

/// An expression evaluable against an evaluator `E`.
pub trait Expression<E: Evaluator> {
    /// Declares to `phi` what this expression needs evaluated.
    fn set_evaluation_flags(&self, phi: &mut E);

    /// The value of this expression at quadrature point `q`.
    fn value(&self, phi: &E, q: usize) -> E::Value;
}

/// A test object able to submit contributions to an evaluator `E`.
pub trait Submit<E: Evaluator>: TestSpace {
    /// Submits `value` through this test object's protocol.
    fn submit(phi: &mut E, q: usize, value: E::Value);
}

impl<E, A, B> Expression<E> for Sum<A, B>
where
    E: Evaluator,
    E::Value: Add<Output = E::Value>,
    A: Expression<E>,
    B: Expression<E>,
{
    fn set_evaluation_flags(&self, phi: &mut E) {
        self.left.set_evaluation_flags(phi);
        self.right.set_evaluation_flags(phi);
    }

    fn value(&self, phi: &E, q: usize) -> E::Value {
        self.left.value(phi, q) + self.right.value(phi, q)
    }
}

impl<E, A, B> Expression<E> for Product<A, B>
where
    E: Evaluator,
    E::Value: Mul<Output = E::Value>,
    A: Expression<E>,
    B: Expression<E>,
{
    fn set_evaluation_flags(&self, phi: &mut E) {
        self.left.set_evaluation_flags(phi);
        self.right.set_evaluation_flags(phi);
    }

    fn value(&self, phi: &E, q: usize) -> E::Value {
        self.left.value(phi, q) * self.right.value(phi, q)
    }
}

impl<E, V> Expression<E> for Constant<V>
where
    E: Evaluator<Value = V>,
    V: Copy,
{
    fn set_evaluation_flags(&self, _phi: &mut E) {}

    fn value(&self, _phi: &E, _q: usize) -> V {
        self.0
    }
}
