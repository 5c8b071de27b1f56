//! Integration tests for weakform-assembly.

use std::cell::RefCell;

use weakform_core as base;
use weakform_core::{form, sum, FormKind, IntegrationFlags};

use crate::driver::{boundary_pass, cell_pass, face_pass};
use crate::evaluator::{BufferedEvaluator, Evaluator};
use crate::forms::{Assemble, EmptyForms, FormList};
use crate::transform::transform;

/// What a recording evaluator saw, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Value(u32, usize),
    ValueExterior(u32, usize),
    Gradient(u32, usize),
    GradientExterior(u32, usize),
    SubmitValue(u32, usize),
    SubmitValueExterior(u32, usize),
    SubmitGradient(u32, usize),
    SubmitGradientExterior(u32, usize),
    Integrate(u32),
}

/// A test double that records the traversal order of reads and writes.
#[derive(Default)]
struct RecordingEvaluator {
    calls: RefCell<Vec<Call>>,
}

impl RecordingEvaluator {
    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Evaluator for RecordingEvaluator {
    type Value = f64;

    fn set_evaluation_flags(&mut self, _fe_number: u32, _value: bool, _gradient: bool) {}

    fn set_evaluation_flags_face(
        &mut self,
        _fe_number: u32,
        _value: bool,
        _value_exterior: bool,
        _gradient: bool,
        _gradient_exterior: bool,
    ) {
    }

    fn set_integration_flags(&mut self, _fe_number: u32, _value: bool, _gradient: bool) {}

    fn set_integration_flags_face_and_boundary(
        &mut self,
        _fe_number: u32,
        _value: bool,
        _value_exterior: bool,
        _gradient: bool,
        _gradient_exterior: bool,
    ) {
    }

    fn integrate(&mut self, fe_number: u32, _value: bool, _gradient: bool) {
        self.calls.borrow_mut().push(Call::Integrate(fe_number));
    }

    fn value(&self, fe_number: u32, q: usize) -> f64 {
        self.calls.borrow_mut().push(Call::Value(fe_number, q));
        f64::from(fe_number) + 1.0
    }

    fn value_exterior(&self, fe_number: u32, q: usize) -> f64 {
        self.calls
            .borrow_mut()
            .push(Call::ValueExterior(fe_number, q));
        -(f64::from(fe_number) + 1.0)
    }

    fn gradient(&self, fe_number: u32, q: usize) -> f64 {
        self.calls.borrow_mut().push(Call::Gradient(fe_number, q));
        10.0 * (f64::from(fe_number) + 1.0)
    }

    fn gradient_exterior(&self, fe_number: u32, q: usize) -> f64 {
        self.calls
            .borrow_mut()
            .push(Call::GradientExterior(fe_number, q));
        -10.0 * (f64::from(fe_number) + 1.0)
    }

    fn submit_value(&mut self, fe_number: u32, q: usize, _value: f64) {
        self.calls.borrow_mut().push(Call::SubmitValue(fe_number, q));
    }

    fn submit_value_exterior(&mut self, fe_number: u32, q: usize, _value: f64) {
        self.calls
            .borrow_mut()
            .push(Call::SubmitValueExterior(fe_number, q));
    }

    fn submit_gradient(&mut self, fe_number: u32, q: usize, _value: f64) {
        self.calls
            .borrow_mut()
            .push(Call::SubmitGradient(fe_number, q));
    }

    fn submit_gradient_exterior(&mut self, fe_number: u32, q: usize, _value: f64) {
        self.calls
            .borrow_mut()
            .push(Call::SubmitGradientExterior(fe_number, q));
    }
}

#[test]
fn test_empty_list_is_identity() {
    let forms = EmptyForms;
    let mut phi = BufferedEvaluator::<f64>::new(1, 2);

    forms.set_integration_flags(&mut phi);
    forms.set_integration_flags_face(&mut phi);
    forms.set_integration_flags_boundary(&mut phi);
    forms.set_evaluation_flags(&mut phi);
    forms.evaluate(&mut phi, 0);
    forms.evaluate_face(&mut phi, 1);
    forms.evaluate_boundary(&mut phi, 1);
    forms.integrate(&mut phi);

    assert!(!phi.integration_flags(0).any());
    assert!(!phi.evaluation_flags(0).any());
    assert!(!phi.was_integrated(0));
    assert_eq!(forms.form_kinds(), [false, false, false]);
    assert!(forms.signatures().is_empty());
    assert!(forms.check_consistency().is_ok());
}

#[test]
fn test_form_kinds_aggregates_presence() {
    let cell_only = transform(form(
        base::functions::TestFunction::<0>,
        base::functions::FEFunction::<0>,
    ) + form(
        base::functions::TestGradient::<1>,
        base::functions::FEFunction::<1>,
    ));
    assert_eq!(cell_only.form_kinds(), [true, false, false]);

    let mixed = transform(
        form(
            base::functions::TestFunction::<0>,
            base::functions::FEFunction::<0>,
        ) + form(
            base::functions::TestFunctionInteriorFace::<1>,
            base::functions::FEFunctionInteriorFace::<1>,
        ) + form(
            base::functions::TestFunctionBoundary::<2>,
            base::functions::FEFunction::<2>,
        ),
    );
    assert_eq!(mixed.form_kinds(), [true, true, true]);
}

#[test]
fn test_consistent_list_constructs_and_validates() {
    // Slot 0 wants values, slot 1 wants gradients: no overlap.
    let forms = transform(form(
        base::functions::TestFunction::<0>,
        base::functions::FEFunction::<0>,
    ) + form(
        base::functions::TestGradient::<1>,
        base::functions::FEFunction::<0>,
    ));
    assert!(forms.check_consistency().is_ok());

    // Same slot, disjoint capabilities is also fine.
    let split = transform(form(
        base::functions::TestFunction::<0>,
        base::functions::FEFunction::<0>,
    ) + form(
        base::functions::TestGradient::<0>,
        base::functions::FEFunction::<0>,
    ));
    assert!(split.check_consistency().is_ok());
}

#[test]
fn test_evaluate_computes_forward_and_submits_backward() {
    let forms = transform(form(
        base::functions::TestFunction::<0>,
        base::functions::FEFunction::<0>,
    ) + form(
        base::functions::TestFunction::<1>,
        base::functions::FEFunction::<1>,
    ));

    let mut phi = RecordingEvaluator::default();
    forms.evaluate(&mut phi, 7);

    assert_eq!(
        phi.calls(),
        vec![
            Call::Value(0, 7),
            Call::Value(1, 7),
            Call::SubmitValue(1, 7),
            Call::SubmitValue(0, 7),
        ]
    );
}

#[test]
fn test_reads_and_submissions_use_their_own_channels() {
    let cell = transform(base::EmptyForms + form(
        base::functions::TestGradient::<0>,
        base::functions::FEGradient::<0>,
    ));

    let mut phi = RecordingEvaluator::default();
    cell.evaluate(&mut phi, 2);
    assert_eq!(
        phi.calls(),
        vec![Call::Gradient(0, 2), Call::SubmitGradient(0, 2)]
    );

    let face = transform(base::EmptyForms + form(
        base::functions::TestFunctionExteriorFace::<1>,
        base::functions::FEFunctionExteriorFace::<1>,
    ));

    let mut phi = RecordingEvaluator::default();
    face.evaluate_face(&mut phi, 4);
    assert_eq!(
        phi.calls(),
        vec![
            Call::ValueExterior(1, 4),
            Call::SubmitValueExterior(1, 4),
        ]
    );
}

#[test]
fn test_mismatched_kinds_are_skipped_in_traversals() {
    let forms = transform(
        form(
            base::functions::TestFunction::<0>,
            base::functions::FEFunction::<0>,
        ) + form(
            base::functions::TestFunctionInteriorFace::<1>,
            base::functions::FEFunctionInteriorFace::<1>,
        ) + form(
            base::functions::TestFunctionBoundary::<2>,
            base::functions::FEFunction::<2>,
        ),
    );

    let mut phi = RecordingEvaluator::default();
    forms.evaluate_face(&mut phi, 0);
    assert_eq!(
        phi.calls(),
        vec![Call::Value(1, 0), Call::SubmitValue(1, 0)]
    );

    let mut phi = RecordingEvaluator::default();
    forms.evaluate_boundary(&mut phi, 3);
    assert_eq!(
        phi.calls(),
        vec![Call::Value(2, 3), Call::SubmitValue(2, 3)]
    );
}

#[test]
fn test_integrate_visits_in_list_order() {
    let forms = transform(form(
        base::functions::TestFunction::<2>,
        base::functions::FEFunction::<0>,
    ) + form(
        base::functions::TestGradient::<0>,
        base::functions::FEFunction::<0>,
    ));

    let mut phi = RecordingEvaluator::default();
    forms.integrate(&mut phi);
    assert_eq!(phi.calls(), vec![Call::Integrate(2), Call::Integrate(0)]);
}

#[test]
fn test_transform_round_trips_order_kinds_and_flags() {
    let forms = transform(
        form(
            base::functions::TestFunction::<0>,
            base::functions::FEFunction::<0>,
        ) + form(
            base::functions::TestFunctionExteriorFace::<1>,
            base::functions::FEFunctionExteriorFace::<1>,
        ) + form(
            base::functions::TestFunctionBoundary::<2>,
            base::functions::FEFunction::<2>,
        ),
    );

    let sigs = forms.signatures();
    assert_eq!(sigs.len(), 3);

    assert_eq!(sigs[0].kind(), FormKind::Cell);
    assert_eq!(sigs[0].fe_number(), 0);
    assert_eq!(sigs[0].flags(), IntegrationFlags::VALUE);

    assert_eq!(sigs[1].kind(), FormKind::Face);
    assert_eq!(sigs[1].fe_number(), 1);
    assert_eq!(sigs[1].flags(), IntegrationFlags::VALUE_EXTERIOR);

    assert_eq!(sigs[2].kind(), FormKind::Boundary);
    assert_eq!(sigs[2].fe_number(), 2);
    assert_eq!(sigs[2].flags(), IntegrationFlags::VALUE);
}

#[test]
fn test_cell_pass_end_to_end() {
    // phi0 * (u0 + u1) into slot 0, grad(phi1) * u0 into slot 1.
    let forms = transform(form(
        base::functions::TestFunction::<0>,
        sum(
            base::functions::FEFunction::<0>,
            base::functions::FEFunction::<1>,
        ),
    ) + form(
        base::functions::TestGradient::<1>,
        base::functions::FEFunction::<0>,
    ));

    let mut phi = BufferedEvaluator::<f64>::new(2, 2);
    phi.set_value(0, 0, 1.0);
    phi.set_value(1, 0, 2.0);
    phi.set_value(0, 1, 3.0);
    phi.set_value(1, 1, 4.0);

    cell_pass::<2, _, _>(&forms, &mut phi);

    assert_eq!(phi.submitted_value(0, 0), 3.0);
    assert_eq!(phi.submitted_value(0, 1), 7.0);
    assert_eq!(phi.submitted_gradient(1, 0), 1.0);
    assert_eq!(phi.submitted_gradient(1, 1), 3.0);

    assert!(phi.integration_flags(0).value);
    assert!(phi.integration_flags(1).gradient);
    assert!(phi.evaluation_flags(0).value);
    assert!(phi.evaluation_flags(1).value);
    assert!(phi.was_integrated(0));
    assert!(phi.was_integrated(1));
}

#[test]
fn test_face_and_boundary_passes_touch_only_their_forms() {
    let forms = transform(
        form(
            base::functions::TestFunction::<0>,
            base::functions::FEFunction::<0>,
        ) + form(
            base::functions::TestFunctionInteriorFace::<1>,
            base::functions::FEFunctionInteriorFace::<1>,
        ) + form(
            base::functions::TestFunctionBoundary::<2>,
            base::functions::FEFunction::<2>,
        ),
    );

    let mut phi = BufferedEvaluator::<f64>::new(3, 1);
    phi.set_value(1, 0, 5.0);
    phi.set_value(2, 0, 7.0);

    face_pass::<1, _, _>(&forms, &mut phi);
    assert_eq!(phi.submitted_value(1, 0), 5.0);
    assert_eq!(phi.submitted_value(0, 0), 0.0);
    assert_eq!(phi.submitted_value(2, 0), 0.0);
    assert!(phi.integration_flags(1).value);
    assert!(!phi.integration_flags(0).any());

    boundary_pass::<1, _, _>(&forms, &mut phi);
    assert_eq!(phi.submitted_value(2, 0), 7.0);
    assert_eq!(phi.submitted_value(0, 0), 0.0);
}

#[test]
fn test_exterior_face_form_submits_to_the_exterior_side() {
    let forms = transform(form(
        base::functions::TestFunctionExteriorFace::<0>,
        base::functions::FEFunctionExteriorFace::<0>,
    ) + form(
        base::functions::TestFunctionInteriorFace::<0>,
        base::functions::FEFunctionInteriorFace::<0>,
    ));

    let mut phi = BufferedEvaluator::<f64>::new(1, 1);
    phi.set_value(0, 0, 2.0);
    phi.set_value_exterior(0, 0, -2.0);

    face_pass::<1, _, _>(&forms, &mut phi);

    assert_eq!(phi.submitted_value(0, 0), 2.0);
    assert_eq!(phi.submitted_value_exterior(0, 0), -2.0);

    let flags = phi.integration_flags(0);
    assert!(flags.value && flags.value_exterior);
}

#[test]
fn test_single_form_list_routes_integrate_through_the_list() {
    let forms = transform(base::EmptyForms + form(
        base::functions::TestFunction::<0>,
        base::functions::FEFunction::<0>,
    ));

    let mut phi = RecordingEvaluator::default();
    forms.integrate(&mut phi);
    assert_eq!(phi.calls(), vec![Call::Integrate(0)]);
}
