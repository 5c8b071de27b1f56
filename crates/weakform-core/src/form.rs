//! The base form and form list.
//!
//! A [`Form`] pairs a test object with an expression; its classification,
//! target slot and integration flags all come from the test object's
//! [`TestSpace`] implementation. Forms are collected into an ordered,
//! heterogeneous [`Forms`] list with `+`, head first:
//!
//! ```
//! use weakform_core::functions::{FEFunction, TestFunction, TestGradient};
//! use weakform_core::{form, sum};
//!
//! let a = form(TestFunction::<0>, sum(FEFunction::<0>, FEFunction::<1>));
//! let b = form(TestGradient::<1>, FEFunction::<0>);
//! let list = a + b;
//! let _ = list.get_form();
//! ```
//!
//! The list records insertion order in its type; downstream transformation
//! preserves it.

use std::ops::Add;

use crate::kinds::{FormKind, IntegrationFlags};
use crate::traits::TestSpace;

/// One weak-form contribution: a test object applied to an expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Form<Test, Expr> {
    test: Test,
    expr: Expr,
}

/// Builds a form from a test object and an expression.
pub const fn form<Test: TestSpace, Expr>(test: Test, expr: Expr) -> Form<Test, Expr> {
    Form { test, expr }
}

impl<Test: TestSpace, Expr> Form<Test, Expr> {
    /// The traversal path of this form.
    pub const KIND: FormKind = Test::KIND;

    /// The field slot this form submits into.
    pub const FE_NUMBER: u32 = Test::FE_NUMBER;

    /// The integration capabilities this form requests.
    pub const FLAGS: IntegrationFlags = Test::FLAGS;

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

    /// Splits the form into its test object and expression.
    #[must_use]
    pub fn into_parts(self) -> (Test, Expr) {
        (self.test, self.expr)
    }
}

/// The empty form list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyForms;

/// A non-empty form list: one form followed by the rest.
///
/// Each list length and composition is a distinct type, so per-form code
/// specializes fully at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Forms<F, Rest> {
    form: F,
    rest: Rest,
}

impl<F, Rest> Forms<F, Rest> {
    /// Builds a list node from a head form and a tail list.
    pub const fn new(form: F, rest: Rest) -> Self {
        Self { form, rest }
    }

    /// Returns the head form.
    #[must_use]
    pub fn get_form(&self) -> &F {
        &self.form
    }

    /// Returns the tail list.
    #[must_use]
    pub fn rest(&self) -> &Rest {
        &self.rest
    }

    /// Splits the node into head form and tail list.
    #[must_use]
    pub fn into_parts(self) -> (F, Rest) {
        (self.form, self.rest)
    }
}

// `form_a + form_b` opens a two-element list.
impl<T1, X1, T2, X2> Add<Form<T2, X2>> for Form<T1, X1>
where
    T1: TestSpace,
    T2: TestSpace,
{
    type Output = Forms<Form<T1, X1>, Forms<Form<T2, X2>, EmptyForms>>;

    fn add(self, rhs: Form<T2, X2>) -> Self::Output {
        Forms::new(self, Forms::new(rhs, EmptyForms))
    }
}

// `list + form` appends at the tail, keeping insertion order.
impl<T, X> Add<Form<T, X>> for EmptyForms
where
    T: TestSpace,
{
    type Output = Forms<Form<T, X>, EmptyForms>;

    fn add(self, rhs: Form<T, X>) -> Self::Output {
        Forms::new(rhs, EmptyForms)
    }
}

impl<F, Rest, T, X> Add<Form<T, X>> for Forms<F, Rest>
where
    T: TestSpace,
    Rest: Add<Form<T, X>>,
{
    type Output = Forms<F, <Rest as Add<Form<T, X>>>::Output>;

    fn add(self, rhs: Form<T, X>) -> Self::Output {
        Forms::new(self.form, self.rest + rhs)
    }
}
