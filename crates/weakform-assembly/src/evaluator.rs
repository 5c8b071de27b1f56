//! The evaluator collaborator.
//!
//! An [`Evaluator`] is the external kernel that interpolates field values
//! at quadrature points, receives submitted contributions and performs the
//! per-slot finalize pass. This crate only drives it; the numerical work
//! is entirely the implementor's. All methods take `&mut self` (or `&self`
//! for reads), so the borrow checker enforces the one-traversal-at-a-time
//! contract: concurrent assembly must use one evaluator per worker.

use num_traits::Zero;
use std::ops::AddAssign;

use weakform_core::IntegrationFlags;

/// The evaluation kernel a form list is assembled against.
///
/// `fe_number` always identifies the field slot a call refers to; `q` is a
/// quadrature point index whose range is owned by the evaluator.
pub trait Evaluator {
    /// The scalar-like quantity exchanged at quadrature points.
    type Value: Copy;

    /// Declares what a cell expression needs evaluated for `fe_number`.
    fn set_evaluation_flags(&mut self, fe_number: u32, value: bool, gradient: bool);

    /// Declares what a face or boundary expression needs evaluated.
    fn set_evaluation_flags_face(
        &mut self,
        fe_number: u32,
        value: bool,
        value_exterior: bool,
        gradient: bool,
        gradient_exterior: bool,
    );

    /// Declares what a cell form will submit for `fe_number`.
    fn set_integration_flags(&mut self, fe_number: u32, value: bool, gradient: bool);

    /// Declares what a face or boundary form will submit for `fe_number`.
    fn set_integration_flags_face_and_boundary(
        &mut self,
        fe_number: u32,
        value: bool,
        value_exterior: bool,
        gradient: bool,
        gradient_exterior: bool,
    );

    /// Finalizes the accumulated contributions for `fe_number`.
    fn integrate(&mut self, fe_number: u32, value: bool, gradient: bool);

    /// Interior value of field `fe_number` at quadrature point `q`.
    fn value(&self, fe_number: u32, q: usize) -> Self::Value;

    /// Exterior-side value at an interface quadrature point.
    fn value_exterior(&self, fe_number: u32, q: usize) -> Self::Value;

    /// Interior gradient of field `fe_number` at quadrature point `q`.
    fn gradient(&self, fe_number: u32, q: usize) -> Self::Value;

    /// Exterior-side gradient at an interface quadrature point.
    fn gradient_exterior(&self, fe_number: u32, q: usize) -> Self::Value;

    /// Submits a value contribution for slot `fe_number`.
    fn submit_value(&mut self, fe_number: u32, q: usize, value: Self::Value);

    /// Submits an exterior-side value contribution.
    fn submit_value_exterior(&mut self, fe_number: u32, q: usize, value: Self::Value);

    /// Submits a gradient contribution for slot `fe_number`.
    fn submit_gradient(&mut self, fe_number: u32, q: usize, value: Self::Value);

    /// Submits an exterior-side gradient contribution.
    fn submit_gradient_exterior(&mut self, fe_number: u32, q: usize, value: Self::Value);
}

/// Per-slot quadrature buffers of a [`BufferedEvaluator`].
#[derive(Clone, Debug)]
struct SlotBuffers<V> {
    values: Vec<V>,
    values_exterior: Vec<V>,
    gradients: Vec<V>,
    gradients_exterior: Vec<V>,
    submitted_values: Vec<V>,
    submitted_values_exterior: Vec<V>,
    submitted_gradients: Vec<V>,
    submitted_gradients_exterior: Vec<V>,
}

impl<V: Zero + Copy> SlotBuffers<V> {
    fn new(n_q: usize) -> Self {
        Self {
            values: vec![V::zero(); n_q],
            values_exterior: vec![V::zero(); n_q],
            gradients: vec![V::zero(); n_q],
            gradients_exterior: vec![V::zero(); n_q],
            submitted_values: vec![V::zero(); n_q],
            submitted_values_exterior: vec![V::zero(); n_q],
            submitted_gradients: vec![V::zero(); n_q],
            submitted_gradients_exterior: vec![V::zero(); n_q],
        }
    }
}

/// A buffer-backed [`Evaluator`].
///
/// Field values per quadrature point are preset with the `set_*` methods;
/// submissions accumulate additively per slot and point. Flag declarations
/// and finalize calls are recorded and can be read back. This is the
/// reference kernel used by the tests in this workspace; real matrix-free
/// kernels implement [`Evaluator`] directly.
#[derive(Clone, Debug)]
pub struct BufferedEvaluator<V> {
    slots: Vec<SlotBuffers<V>>,
    evaluation_flags: Vec<IntegrationFlags>,
    integration_flags: Vec<IntegrationFlags>,
    integrated: Vec<bool>,
}

impl<V: Zero + Copy + AddAssign> BufferedEvaluator<V> {
    /// Creates an evaluator for `n_slots` field slots and `n_q` quadrature
    /// points, all buffers zeroed.
    #[must_use]
    pub fn new(n_slots: usize, n_q: usize) -> Self {
        Self {
            slots: (0..n_slots).map(|_| SlotBuffers::new(n_q)).collect(),
            evaluation_flags: vec![IntegrationFlags::NONE; n_slots],
            integration_flags: vec![IntegrationFlags::NONE; n_slots],
            integrated: vec![false; n_slots],
        }
    }

    /// Presets the interior value of `fe_number` at point `q`.
    ///
    /// # Panics
    ///
    /// Panics if the slot or quadrature index is out of range.
    pub fn set_value(&mut self, fe_number: u32, q: usize, value: V) {
        self.slots[fe_number as usize].values[q] = value;
    }

    /// Presets the exterior value of `fe_number` at point `q`.
    ///
    /// # Panics
    ///
    /// Panics if the slot or quadrature index is out of range.
    pub fn set_value_exterior(&mut self, fe_number: u32, q: usize, value: V) {
        self.slots[fe_number as usize].values_exterior[q] = value;
    }

    /// Presets the interior gradient of `fe_number` at point `q`.
    ///
    /// # Panics
    ///
    /// Panics if the slot or quadrature index is out of range.
    pub fn set_gradient(&mut self, fe_number: u32, q: usize, value: V) {
        self.slots[fe_number as usize].gradients[q] = value;
    }

    /// Presets the exterior gradient of `fe_number` at point `q`.
    ///
    /// # Panics
    ///
    /// Panics if the slot or quadrature index is out of range.
    pub fn set_gradient_exterior(&mut self, fe_number: u32, q: usize, value: V) {
        self.slots[fe_number as usize].gradients_exterior[q] = value;
    }

    /// The value submissions accumulated for `fe_number` at point `q`.
    #[must_use]
    pub fn submitted_value(&self, fe_number: u32, q: usize) -> V {
        self.slots[fe_number as usize].submitted_values[q]
    }

    /// The exterior value submissions accumulated at point `q`.
    #[must_use]
    pub fn submitted_value_exterior(&self, fe_number: u32, q: usize) -> V {
        self.slots[fe_number as usize].submitted_values_exterior[q]
    }

    /// The gradient submissions accumulated for `fe_number` at point `q`.
    #[must_use]
    pub fn submitted_gradient(&self, fe_number: u32, q: usize) -> V {
        self.slots[fe_number as usize].submitted_gradients[q]
    }

    /// The exterior gradient submissions accumulated at point `q`.
    #[must_use]
    pub fn submitted_gradient_exterior(&self, fe_number: u32, q: usize) -> V {
        self.slots[fe_number as usize].submitted_gradients_exterior[q]
    }

    /// The evaluation flags declared for `fe_number` so far.
    #[must_use]
    pub fn evaluation_flags(&self, fe_number: u32) -> IntegrationFlags {
        self.evaluation_flags[fe_number as usize]
    }

    /// The integration flags declared for `fe_number` so far.
    #[must_use]
    pub fn integration_flags(&self, fe_number: u32) -> IntegrationFlags {
        self.integration_flags[fe_number as usize]
    }

    /// Whether [`Evaluator::integrate`] ran for `fe_number`.
    #[must_use]
    pub fn was_integrated(&self, fe_number: u32) -> bool {
        self.integrated[fe_number as usize]
    }
}

impl<V: Zero + Copy + AddAssign> Evaluator for BufferedEvaluator<V> {
    type Value = V;

    fn set_evaluation_flags(&mut self, fe_number: u32, value: bool, gradient: bool) {
        let flags = &mut self.evaluation_flags[fe_number as usize];
        flags.value |= value;
        flags.gradient |= gradient;
    }

    fn set_evaluation_flags_face(
        &mut self,
        fe_number: u32,
        value: bool,
        value_exterior: bool,
        gradient: bool,
        gradient_exterior: bool,
    ) {
        let flags = &mut self.evaluation_flags[fe_number as usize];
        flags.value |= value;
        flags.value_exterior |= value_exterior;
        flags.gradient |= gradient;
        flags.gradient_exterior |= gradient_exterior;
    }

    fn set_integration_flags(&mut self, fe_number: u32, value: bool, gradient: bool) {
        let flags = &mut self.integration_flags[fe_number as usize];
        flags.value |= value;
        flags.gradient |= gradient;
    }

    fn set_integration_flags_face_and_boundary(
        &mut self,
        fe_number: u32,
        value: bool,
        value_exterior: bool,
        gradient: bool,
        gradient_exterior: bool,
    ) {
        let flags = &mut self.integration_flags[fe_number as usize];
        flags.value |= value;
        flags.value_exterior |= value_exterior;
        flags.gradient |= gradient;
        flags.gradient_exterior |= gradient_exterior;
    }

    fn integrate(&mut self, fe_number: u32, _value: bool, _gradient: bool) {
        self.integrated[fe_number as usize] = true;
    }

    fn value(&self, fe_number: u32, q: usize) -> V {
        self.slots[fe_number as usize].values[q]
    }

    fn value_exterior(&self, fe_number: u32, q: usize) -> V {
        self.slots[fe_number as usize].values_exterior[q]
    }

    fn gradient(&self, fe_number: u32, q: usize) -> V {
        self.slots[fe_number as usize].gradients[q]
    }

    fn gradient_exterior(&self, fe_number: u32, q: usize) -> V {
        self.slots[fe_number as usize].gradients_exterior[q]
    }

    fn submit_value(&mut self, fe_number: u32, q: usize, value: V) {
        self.slots[fe_number as usize].submitted_values[q] += value;
    }

    fn submit_value_exterior(&mut self, fe_number: u32, q: usize, value: V) {
        self.slots[fe_number as usize].submitted_values_exterior[q] += value;
    }

    fn submit_gradient(&mut self, fe_number: u32, q: usize, value: V) {
        self.slots[fe_number as usize].submitted_gradients[q] += value;
    }

    fn submit_gradient_exterior(&mut self, fe_number: u32, q: usize, value: V) {
        self.slots[fe_number as usize].submitted_gradients_exterior[q] += value;
    }
}
