//! Mapping the base representation into assembly types.
//!
//! [`Transform`] is a pure, total, structural mapping: every base leaf
//! becomes its assembly counterpart with the same field index and role,
//! nodes map child-wise, forms keep their classification and lists keep
//! their order. There is no failure path here; an inconsistent list fails
//! inside the assembly `Forms` constructor.

use weakform_core as base;
use weakform_core::{Constant, Product, Sum, TestSpace};

use crate::form::Form;
use crate::forms::{EmptyForms, FormList, Forms};
use crate::functions;

/// A base-representation value with an assembly-side counterpart.
pub trait Transform {
    /// The assembly-side type this maps to.
    type Output;

    /// Performs the mapping.
    fn transform(self) -> Self::Output;
}

/// Transforms a base-representation value into assembly representation.
pub fn transform<B: Transform>(base: B) -> B::Output {
    base.transform()
}

macro_rules! transform_leaf {
    ($($name:ident),* $(,)?) => {
        $(
            impl<const I: u32> Transform for base::functions::$name<I> {
                type Output = functions::$name<I>;

                fn transform(self) -> Self::Output {
                    functions::$name::<I>
                }
            }
        )*
    };
}

transform_leaf!(
    FEFunction,
    FEGradient,
    FEFunctionInteriorFace,
    FEFunctionExteriorFace,
    TestFunction,
    TestGradient,
    TestFunctionInteriorFace,
    TestFunctionExteriorFace,
    TestFunctionBoundary,
);

impl<A: Transform, B: Transform> Transform for Sum<A, B> {
    type Output = Sum<A::Output, B::Output>;

    fn transform(self) -> Self::Output {
        Sum {
            left: self.left.transform(),
            right: self.right.transform(),
        }
    }
}

impl<A: Transform, B: Transform> Transform for Product<A, B> {
    type Output = Product<A::Output, B::Output>;

    fn transform(self) -> Self::Output {
        Product {
            left: self.left.transform(),
            right: self.right.transform(),
        }
    }
}

impl<V> Transform for Constant<V> {
    type Output = Self;

    fn transform(self) -> Self {
        self
    }
}

impl<Test, Expr> Transform for base::Form<Test, Expr>
where
    Test: TestSpace + Transform,
    Expr: Transform,
    Test::Output: TestSpace,
{
    type Output = Form<Test::Output, Expr::Output>;

    fn transform(self) -> Self::Output {
        let (test, expr) = self.into_parts();
        Form::new(test.transform(), expr.transform())
    }
}

impl Transform for base::EmptyForms {
    type Output = EmptyForms;

    fn transform(self) -> EmptyForms {
        EmptyForms
    }
}

impl<Test, Expr, Rest> Transform for base::Forms<base::Form<Test, Expr>, Rest>
where
    Test: TestSpace + Transform,
    Expr: Transform,
    Test::Output: TestSpace,
    Rest: Transform,
    Rest::Output: FormList,
{
    type Output = Forms<Form<Test::Output, Expr::Output>, Rest::Output>;

    fn transform(self) -> Self::Output {
        let (form, rest) = self.into_parts();
        Forms::new(form.transform(), rest.transform())
    }
}
