//! Shape-only expression and test leaves.
//!
//! These are zero-sized markers: an `FEFunction<3>` says "the value of
//! field 3 at the current quadrature point" and nothing more. Evaluation
//! semantics are attached by the assembly crate after transformation.

use crate::kinds::{FormKind, IntegrationFlags};
use crate::traits::TestSpace;

/// The value of finite-element field `I` on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FEFunction<const I: u32>;

/// The gradient of finite-element field `I` on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FEGradient<const I: u32>;

/// The value of field `I` on the interior side of a face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FEFunctionInteriorFace<const I: u32>;

/// The value of field `I` on the exterior side of a face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FEFunctionExteriorFace<const I: u32>;

/// A test function for field slot `I`, integrated over cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestFunction<const I: u32>;

/// A test-function gradient for field slot `I`, integrated over cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestGradient<const I: u32>;

/// A test function for slot `I` on the interior side of interface faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestFunctionInteriorFace<const I: u32>;

/// A test function for slot `I` on the exterior side of interface faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestFunctionExteriorFace<const I: u32>;

/// A test function for slot `I` on boundary faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestFunctionBoundary<const I: u32>;

impl<const I: u32> TestSpace for TestFunction<I> {
    const FE_NUMBER: u32 = I;
    const KIND: FormKind = FormKind::Cell;
    const FLAGS: IntegrationFlags = IntegrationFlags::VALUE;
}

impl<const I: u32> TestSpace for TestGradient<I> {
    const FE_NUMBER: u32 = I;
    const KIND: FormKind = FormKind::Cell;
    const FLAGS: IntegrationFlags = IntegrationFlags::GRADIENT;
}

impl<const I: u32> TestSpace for TestFunctionInteriorFace<I> {
    const FE_NUMBER: u32 = I;
    const KIND: FormKind = FormKind::Face;
    const FLAGS: IntegrationFlags = IntegrationFlags::VALUE;
}

impl<const I: u32> TestSpace for TestFunctionExteriorFace<I> {
    const FE_NUMBER: u32 = I;
    const KIND: FormKind = FormKind::Face;
    const FLAGS: IntegrationFlags = IntegrationFlags::VALUE_EXTERIOR;
}

impl<const I: u32> TestSpace for TestFunctionBoundary<I> {
    const FE_NUMBER: u32 = I;
    const KIND: FormKind = FormKind::Boundary;
    const FLAGS: IntegrationFlags = IntegrationFlags::VALUE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_spaces_carry_their_slot() {
        assert_eq!(<TestFunction<0> as TestSpace>::FE_NUMBER, 0);
        assert_eq!(<TestGradient<7> as TestSpace>::FE_NUMBER, 7);
    }

    #[test]
    fn test_test_spaces_carry_their_kind() {
        assert!(<TestFunction<0> as TestSpace>::KIND.same(FormKind::Cell));
        assert!(<TestFunctionInteriorFace<0> as TestSpace>::KIND.same(FormKind::Face));
        assert!(<TestFunctionExteriorFace<0> as TestSpace>::KIND.same(FormKind::Face));
        assert!(<TestFunctionBoundary<0> as TestSpace>::KIND.same(FormKind::Boundary));
    }

    #[test]
    fn test_exterior_test_requests_exterior_flag() {
        let flags = <TestFunctionExteriorFace<0> as TestSpace>::FLAGS;
        assert!(flags.value_exterior);
        assert!(!flags.value);
    }
}
