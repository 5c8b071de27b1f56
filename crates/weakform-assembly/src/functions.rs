//! Assembly-side expression and test leaves.
//!
//! Mirrors of the base leaves with evaluation semantics attached: an
//! `FEFunction<3>` here knows to ask the evaluator for the value of field
//! 3, a `TestGradient<1>` knows to submit through the gradient channel of
//! slot 1. The transform layer maps each base leaf to its counterpart.

use weakform_core::{FormKind, IntegrationFlags, TestSpace};

use crate::evaluator::Evaluator;
use crate::expression::{Expression, Submit};

/// The value of field `I` on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FEFunction<const I: u32>;

/// The gradient of field `I` on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FEGradient<const I: u32>;

/// The value of field `I` on the interior side of a face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FEFunctionInteriorFace<const I: u32>;

/// The value of field `I` on the exterior side of a face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FEFunctionExteriorFace<const I: u32>;

/// A cell test function submitting values into slot `I`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestFunction<const I: u32>;

/// A cell test-function gradient submitting into slot `I`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestGradient<const I: u32>;

/// An interior-side face test function for slot `I`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestFunctionInteriorFace<const I: u32>;

/// An exterior-side face test function for slot `I`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestFunctionExteriorFace<const I: u32>;

/// A boundary-face test function for slot `I`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestFunctionBoundary<const I: u32>;

impl<E: Evaluator, const I: u32> Expression<E> for FEFunction<I> {
    fn set_evaluation_flags(&self, phi: &mut E) {
        phi.set_evaluation_flags(I, true, false);
    }

    fn value(&self, phi: &E, q: usize) -> E::Value {
        phi.value(I, q)
    }
}

impl<E: Evaluator, const I: u32> Expression<E> for FEGradient<I> {
    fn set_evaluation_flags(&self, phi: &mut E) {
        phi.set_evaluation_flags(I, false, true);
    }

    fn value(&self, phi: &E, q: usize) -> E::Value {
        phi.gradient(I, q)
    }
}

impl<E: Evaluator, const I: u32> Expression<E> for FEFunctionInteriorFace<I> {
    fn set_evaluation_flags(&self, phi: &mut E) {
        phi.set_evaluation_flags_face(I, true, false, false, false);
    }

    fn value(&self, phi: &E, q: usize) -> E::Value {
        phi.value(I, q)
    }
}

impl<E: Evaluator, const I: u32> Expression<E> for FEFunctionExteriorFace<I> {
    fn set_evaluation_flags(&self, phi: &mut E) {
        phi.set_evaluation_flags_face(I, false, true, false, false);
    }

    fn value(&self, phi: &E, q: usize) -> E::Value {
        phi.value_exterior(I, q)
    }
}

impl<const I: u32> TestSpace for TestFunction<I> {
    const FE_NUMBER: u32 = I;
    const KIND: FormKind = FormKind::Cell;
    const FLAGS: IntegrationFlags = IntegrationFlags::VALUE;
}

impl<E: Evaluator, const I: u32> Submit<E> for TestFunction<I> {
    fn submit(phi: &mut E, q: usize, value: E::Value) {
        phi.submit_value(I, q, value);
    }
}

impl<const I: u32> TestSpace for TestGradient<I> {
    const FE_NUMBER: u32 = I;
    const KIND: FormKind = FormKind::Cell;
    const FLAGS: IntegrationFlags = IntegrationFlags::GRADIENT;
}

impl<E: Evaluator, const I: u32> Submit<E> for TestGradient<I> {
    fn submit(phi: &mut E, q: usize, value: E::Value) {
        phi.submit_gradient(I, q, value);
    }
}

impl<const I: u32> TestSpace for TestFunctionInteriorFace<I> {
    const FE_NUMBER: u32 = I;
    const KIND: FormKind = FormKind::Face;
    const FLAGS: IntegrationFlags = IntegrationFlags::VALUE;
}

impl<E: Evaluator, const I: u32> Submit<E> for TestFunctionInteriorFace<I> {
    fn submit(phi: &mut E, q: usize, value: E::Value) {
        phi.submit_value(I, q, value);
    }
}

impl<const I: u32> TestSpace for TestFunctionExteriorFace<I> {
    const FE_NUMBER: u32 = I;
    const KIND: FormKind = FormKind::Face;
    const FLAGS: IntegrationFlags = IntegrationFlags::VALUE_EXTERIOR;
}

impl<E: Evaluator, const I: u32> Submit<E> for TestFunctionExteriorFace<I> {
    fn submit(phi: &mut E, q: usize, value: E::Value) {
        phi.submit_value_exterior(I, q, value);
    }
}

impl<const I: u32> TestSpace for TestFunctionBoundary<I> {
    const FE_NUMBER: u32 = I;
    const KIND: FormKind = FormKind::Boundary;
    const FLAGS: IntegrationFlags = IntegrationFlags::VALUE;
}

impl<E: Evaluator, const I: u32> Submit<E> for TestFunctionBoundary<I> {
    fn submit(phi: &mut E, q: usize, value: E::Value) {
        phi.submit_value(I, q, value);
    }
}
