//! One assembly-side weak-form term.

use weakform_core::{FormKind, IntegrationFlags, TestSpace};

use crate::check::FormSignature;
use crate::evaluator::Evaluator;
use crate::expression::{Expression, Submit};

/// One weak-form contribution in assembly representation.
///
/// Immutable after construction. Every operation is gated on the form's
/// classification: a cell form is a no-op under the face and boundary
/// entry points and vice versa, so a heterogeneous list can drive all its
/// members through whichever traversal the mesh loop is in. The gate is an
/// associated-const comparison, which the optimizer folds away per
/// monomorphization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Form<Test, Expr> {
    test: Test,
    expr: Expr,
}

impl<Test: TestSpace, Expr> Form<Test, Expr> {
    /// The traversal path of this form.
    pub const KIND: FormKind = Test::KIND;

    /// The field slot this form submits into.
    pub const FE_NUMBER: u32 = Test::FE_NUMBER;

    /// The integration capabilities this form requests, restricted to
    /// what its classification supports.
    pub const FLAGS: IntegrationFlags = Test::FLAGS.masked_for(Test::KIND);

    /// This form's entry in the consistency check.
    pub const SIGNATURE: FormSignature =
        FormSignature::new(Self::KIND, Self::FE_NUMBER, Self::FLAGS);

    /// Builds a form from an assembly-side test object and expression.
    pub const fn new(test: Test, expr: Expr) -> Self {
        Self { test, expr }
    }

    /// Returns the test object.
    #[must_use]
    pub fn test(&self) -> &Test {
        &self.test
    }

    /// Returns the expression tree.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Declares this form's integration capabilities; cell forms only.
    pub fn set_integration_flags<E: Evaluator>(&self, phi: &mut E) {
        if matches!(Self::KIND, FormKind::Cell) {
            phi.set_integration_flags(Self::FE_NUMBER, Self::FLAGS.value, Self::FLAGS.gradient);
        }
    }

    /// Declares this form's integration capabilities; face forms only.
    pub fn set_integration_flags_face<E: Evaluator>(&self, phi: &mut E) {
        if matches!(Self::KIND, FormKind::Face) {
            phi.set_integration_flags_face_and_boundary(
                Self::FE_NUMBER,
                Self::FLAGS.value,
                Self::FLAGS.value_exterior,
                Self::FLAGS.gradient,
                Self::FLAGS.gradient_exterior,
            );
        }
    }

    /// Declares this form's integration capabilities; boundary forms only.
    pub fn set_integration_flags_boundary<E: Evaluator>(&self, phi: &mut E) {
        if matches!(Self::KIND, FormKind::Boundary) {
            phi.set_integration_flags_face_and_boundary(
                Self::FE_NUMBER,
                Self::FLAGS.value,
                Self::FLAGS.value_exterior,
                Self::FLAGS.gradient,
                Self::FLAGS.gradient_exterior,
            );
        }
    }

    /// Declares the expression's evaluation needs; cell forms only.
    pub fn set_evaluation_flags<E: Evaluator>(&self, phi: &mut E)
    where
        Expr: Expression<E>,
    {
        if matches!(Self::KIND, FormKind::Cell) {
            self.expr.set_evaluation_flags(phi);
        }
    }

    /// Declares the expression's evaluation needs; face and boundary forms.
    pub fn set_evaluation_flags_face<E: Evaluator>(&self, phi: &mut E)
    where
        Expr: Expression<E>,
    {
        if matches!(Self::KIND, FormKind::Face | FormKind::Boundary) {
            self.expr.set_evaluation_flags(phi);
        }
    }

    /// Evaluates and submits this form at quadrature point `q`; cell forms
    /// only.
    pub fn evaluate<E: Evaluator>(&self, phi: &mut E, q: usize)
    where
        Test: Submit<E>,
        Expr: Expression<E>,
    {
        if matches!(Self::KIND, FormKind::Cell) {
            let value = self.expr.value(phi, q);
            Test::submit(phi, q, value);
        }
    }

    /// Evaluates and submits at a face quadrature point; face forms only.
    pub fn evaluate_face<E: Evaluator>(&self, phi: &mut E, q: usize)
    where
        Test: Submit<E>,
        Expr: Expression<E>,
    {
        if matches!(Self::KIND, FormKind::Face) {
            let value = self.expr.value(phi, q);
            Test::submit(phi, q, value);
        }
    }

    /// Evaluates and submits at a boundary quadrature point; boundary
    /// forms only.
    pub fn evaluate_boundary<E: Evaluator>(&self, phi: &mut E, q: usize)
    where
        Test: Submit<E>,
        Expr: Expression<E>,
    {
        if matches!(Self::KIND, FormKind::Boundary) {
            let value = self.expr.value(phi, q);
            Test::submit(phi, q, value);
        }
    }

    /// The expression's value at quadrature point `q`.
    pub fn value<E: Evaluator>(&self, phi: &E, q: usize) -> E::Value
    where
        Expr: Expression<E>,
    {
        self.expr.value(phi, q)
    }

    /// Submits a previously computed value through the test object.
    pub fn submit<E: Evaluator>(&self, phi: &mut E, q: usize, value: E::Value)
    where
        Test: Submit<E>,
    {
        Test::submit(phi, q, value);
    }

    /// Triggers the evaluator's finalize pass for this form's slot.
    pub fn integrate<E: Evaluator>(&self, phi: &mut E) {
        phi.integrate(Self::FE_NUMBER, Self::FLAGS.value, Self::FLAGS.gradient);
    }
}
