//! Structural expression nodes.
//!
//! Weak-form expressions are produced elsewhere by an arithmetic algebra;
//! this crate only consumes their shape. The nodes here describe that
//! shape: binary sums and products over arbitrary sub-expressions, plus a
//! constant coefficient leaf. Constructors are plain functions rather
//! than operator overloads.

/// The sum of two sub-expressions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sum<A, B> {
    /// Left summand.
    pub left: A,
    /// Right summand.
    pub right: B,
}

/// The product of two sub-expressions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Product<A, B> {
    /// Left factor.
    pub left: A,
    /// Right factor.
    pub right: B,
}

/// A constant coefficient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Constant<V>(pub V);

/// Builds the sum `a + b`.
pub const fn sum<A, B>(left: A, right: B) -> Sum<A, B> {
    Sum { left, right }
}

/// Builds the product `a * b`.
pub const fn product<A, B>(left: A, right: B) -> Product<A, B> {
    Product { left, right }
}

/// Builds a constant coefficient leaf.
pub const fn constant<V>(value: V) -> Constant<V> {
    Constant(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{FEFunction, FEGradient};

    #[test]
    fn test_nodes_nest() {
        // (u0 + u1) * 2
        let expr = product(sum(FEFunction::<0>, FEFunction::<1>), constant(2.0));
        assert_eq!(expr.left.left, FEFunction::<0>);
        assert_eq!(expr.right, Constant(2.0));
    }

    #[test]
    fn test_mixed_leaves() {
        let expr = sum(FEGradient::<0>, FEGradient::<1>);
        assert_eq!(expr.right, FEGradient::<1>);
    }
}
