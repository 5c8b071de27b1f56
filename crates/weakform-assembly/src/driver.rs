//! Per-cell and per-face assembly passes.
//!
//! The glue a hosting mesh loop runs for each cell, interface face or
//! boundary face: declare flags once, evaluate every quadrature point,
//! finalize. The quadrature loop is unrolled through `weakform-unroll`;
//! in matrix-free kernels the point count is a compile-time property of
//! the quadrature rule, so it is a const generic here.

use tracing::trace;

use weakform_unroll::StaticFor;

use crate::evaluator::Evaluator;
use crate::forms::Assemble;

/// Runs one interior-cell pass: flags, `N_Q` quadrature points, finalize.
pub fn cell_pass<const N_Q: usize, L, E>(forms: &L, phi: &mut E)
where
    L: Assemble<E>,
    E: Evaluator,
{
    trace!(n_q = N_Q, "cell pass");
    forms.set_integration_flags(phi);
    forms.set_evaluation_flags(phi);
    StaticFor::<0, N_Q>::run(|q| forms.evaluate(phi, q));
    forms.integrate(phi);
}

/// Runs one interface-face pass.
///
/// Face and boundary passes do not drive [`Assemble::integrate`]; the
/// evaluator finalizes face contributions under its own contract when the
/// face configuration is torn down.
pub fn face_pass<const N_Q: usize, L, E>(forms: &L, phi: &mut E)
where
    L: Assemble<E>,
    E: Evaluator,
{
    trace!(n_q = N_Q, "face pass");
    forms.set_integration_flags_face(phi);
    forms.set_evaluation_flags_face(phi);
    StaticFor::<0, N_Q>::run(|q| forms.evaluate_face(phi, q));
}

/// Runs one boundary-face pass.
pub fn boundary_pass<const N_Q: usize, L, E>(forms: &L, phi: &mut E)
where
    L: Assemble<E>,
    E: Evaluator,
{
    trace!(n_q = N_Q, "boundary pass");
    forms.set_integration_flags_boundary(phi);
    forms.set_evaluation_flags_face(phi);
    StaticFor::<0, N_Q>::run(|q| forms.evaluate_boundary(phi, q));
}
