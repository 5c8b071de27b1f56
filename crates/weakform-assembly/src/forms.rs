//! The heterogeneous form list.
//!
//! A list is a cons chain: [`Forms`] holds one [`Form`] and the rest of
//! the list, terminated by [`EmptyForms`]. Each composition is a distinct
//! type, so traversals specialize per form and the consistency check runs
//! over compile-time constants.

use smallvec::SmallVec;

use weakform_core::{FormKind, TestSpace};

use crate::check::{
    signatures_consistent, validate_signatures, ConflictError, FormSignature, MAX_FORMS,
};
use crate::evaluator::Evaluator;
use crate::expression::{Expression, Submit};
use crate::form::Form;

/// The empty form list. Every traversal is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyForms;

/// A non-empty form list: one form followed by the rest.
///
/// Only constructible through [`Forms::new`], which holds the
/// consistency assertion. No `Default` for the same reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Forms<F, Rest> {
    form: F,
    rest: Rest,
}

/// Compile-time facts about a form list.
pub trait FormList {
    /// Number of forms in the list.
    const LEN: usize;

    /// Signatures of all forms, in list order, padded with `None`.
    const SIGNATURES: [Option<FormSignature>; MAX_FORMS];

    /// Presence set over classifications, indexed by
    /// [`FormKind::index`](weakform_core::FormKind::index):
    /// `[cell-used, face-used, boundary-used]`.
    const FORM_KINDS: [bool; 3];

    /// The presence set as a value.
    #[must_use]
    fn form_kinds(&self) -> [bool; 3] {
        Self::FORM_KINDS
    }

    /// The occupied signatures, in list order.
    #[must_use]
    fn signatures(&self) -> SmallVec<[FormSignature; 8]> {
        Self::SIGNATURES.iter().copied().flatten().collect()
    }

    /// Runtime mirror of the construction-time consistency check.
    ///
    /// Construction already guarantees consistency; this exists for
    /// diagnostics and for tooling that assembles signature sets
    /// dynamically.
    ///
    /// # Errors
    ///
    /// Returns the first conflicting pair, if any.
    fn check_consistency(&self) -> Result<(), ConflictError> {
        validate_signatures(&self.signatures())
    }
}

impl FormList for EmptyForms {
    const LEN: usize = 0;
    const SIGNATURES: [Option<FormSignature>; MAX_FORMS] = [None; MAX_FORMS];
    const FORM_KINDS: [bool; 3] = [false; 3];
}

impl<Test, Expr, Rest> FormList for Forms<Form<Test, Expr>, Rest>
where
    Test: TestSpace,
    Rest: FormList,
{
    const LEN: usize = Rest::LEN + 1;

    const SIGNATURES: [Option<FormSignature>; MAX_FORMS] = {
        assert!(Rest::LEN < MAX_FORMS, "form list exceeds MAX_FORMS");
        let tail = Rest::SIGNATURES;
        let mut out = [None; MAX_FORMS];
        out[0] = Some(Form::<Test, Expr>::SIGNATURE);
        let mut i = 0;
        while i < Rest::LEN {
            out[i + 1] = tail[i];
            i += 1;
        }
        out
    };

    const FORM_KINDS: [bool; 3] = {
        let mut kinds = Rest::FORM_KINDS;
        kinds[Test::KIND.index()] = true;
        kinds
    };
}

impl<Test, Expr, Rest> Forms<Form<Test, Expr>, Rest>
where
    Test: TestSpace,
    Rest: FormList,
{
    /// Builds a list node from a head form and a tail list.
    ///
    /// Consistency is asserted here, in `const` context: a list in which
    /// two forms share a classification and field slot with intersecting
    /// integration flags does not build.
    pub fn new(form: Form<Test, Expr>, rest: Rest) -> Self {
        const {
            assert!(
                signatures_consistent(&<Self as FormList>::SIGNATURES),
                "two forms submit the same information for the same fe number"
            );
        }
        Self { form, rest }
    }

    /// Returns the head form.
    #[must_use]
    pub fn get_form(&self) -> &Form<Test, Expr> {
        &self.form
    }

    /// Returns the tail list.
    #[must_use]
    pub fn rest(&self) -> &Rest {
        &self.rest
    }
}

/// Traversal of a form list against an evaluator `E`.
///
/// Every operation visits the list in order. The `evaluate*` traversals
/// compute the head's value, descend into the tail, and submit the head's
/// value on the way back out: values are computed front to back,
/// submissions happen back to front. Evaluators may reuse internal
/// buffers between reads and writes, so this ordering is a contract, not
/// an implementation detail.
pub trait Assemble<E: Evaluator> {
    /// Declares integration capabilities of all cell forms.
    fn set_integration_flags(&self, phi: &mut E);

    /// Declares integration capabilities of all face forms.
    fn set_integration_flags_face(&self, phi: &mut E);

    /// Declares integration capabilities of all boundary forms.
    fn set_integration_flags_boundary(&self, phi: &mut E);

    /// Declares evaluation needs of all cell forms.
    fn set_evaluation_flags(&self, phi: &mut E);

    /// Declares evaluation needs of all face and boundary forms.
    fn set_evaluation_flags_face(&self, phi: &mut E);

    /// Evaluates and submits all cell forms at quadrature point `q`.
    fn evaluate(&self, phi: &mut E, q: usize);

    /// Evaluates and submits all face forms at quadrature point `q`.
    fn evaluate_face(&self, phi: &mut E, q: usize);

    /// Evaluates and submits all boundary forms at quadrature point `q`.
    fn evaluate_boundary(&self, phi: &mut E, q: usize);

    /// Triggers the per-slot finalize pass for every form, in list order.
    fn integrate(&self, phi: &mut E);
}

impl<E: Evaluator> Assemble<E> for EmptyForms {
    fn set_integration_flags(&self, _phi: &mut E) {}
    fn set_integration_flags_face(&self, _phi: &mut E) {}
    fn set_integration_flags_boundary(&self, _phi: &mut E) {}
    fn set_evaluation_flags(&self, _phi: &mut E) {}
    fn set_evaluation_flags_face(&self, _phi: &mut E) {}
    fn evaluate(&self, _phi: &mut E, _q: usize) {}
    fn evaluate_face(&self, _phi: &mut E, _q: usize) {}
    fn evaluate_boundary(&self, _phi: &mut E, _q: usize) {}
    fn integrate(&self, _phi: &mut E) {}
}

impl<E, Test, Expr, Rest> Assemble<E> for Forms<Form<Test, Expr>, Rest>
where
    E: Evaluator,
    Test: Submit<E>,
    Expr: Expression<E>,
    Rest: Assemble<E>,
{
    fn set_integration_flags(&self, phi: &mut E) {
        self.form.set_integration_flags(phi);
        self.rest.set_integration_flags(phi);
    }

    fn set_integration_flags_face(&self, phi: &mut E) {
        self.form.set_integration_flags_face(phi);
        self.rest.set_integration_flags_face(phi);
    }

    fn set_integration_flags_boundary(&self, phi: &mut E) {
        self.form.set_integration_flags_boundary(phi);
        self.rest.set_integration_flags_boundary(phi);
    }

    fn set_evaluation_flags(&self, phi: &mut E) {
        self.form.set_evaluation_flags(phi);
        self.rest.set_evaluation_flags(phi);
    }

    fn set_evaluation_flags_face(&self, phi: &mut E) {
        self.form.set_evaluation_flags_face(phi);
        self.rest.set_evaluation_flags_face(phi);
    }

    fn evaluate(&self, phi: &mut E, q: usize) {
        if matches!(Form::<Test, Expr>::KIND, FormKind::Cell) {
            let value = self.form.value(phi, q);
            self.rest.evaluate(phi, q);
            self.form.submit(phi, q, value);
        } else {
            self.rest.evaluate(phi, q);
        }
    }

    fn evaluate_face(&self, phi: &mut E, q: usize) {
        if matches!(Form::<Test, Expr>::KIND, FormKind::Face) {
            let value = self.form.value(phi, q);
            self.rest.evaluate_face(phi, q);
            self.form.submit(phi, q, value);
        } else {
            self.rest.evaluate_face(phi, q);
        }
    }

    fn evaluate_boundary(&self, phi: &mut E, q: usize) {
        if matches!(Form::<Test, Expr>::KIND, FormKind::Boundary) {
            let value = self.form.value(phi, q);
            self.rest.evaluate_boundary(phi, q);
            self.form.submit(phi, q, value);
        } else {
            self.rest.evaluate_boundary(phi, q);
        }
    }

    fn integrate(&self, phi: &mut E) {
        self.form.integrate(phi);
        self.rest.integrate(phi);
    }
}
