//! One implicit time step via the double-sweep (Thomas) algorithm.

use crate::config::Discretization;
use crate::error::{SolverError, SolverResult};
use hr_core::Real;

/// Sweep pivots smaller than this are treated as a degenerate system.
/// For λ ≥ 0 the diagonal dominates and the pivot magnitude stays ≥ 1 + λ,
/// so tripping this guard means the inputs were not physically valid.
const PIVOT_FLOOR: Real = 1e-12;

/// Advances the temperature field one implicit time level.
///
/// For interior nodes i = 1..N-1 the backward-Euler discretization
///
/// ```text
/// -λ·T[i-1] + (1 + 2λ)·T[i] - λ·T[i+1] = T_old[i]
/// ```
///
/// with T[0] = Tl and T[N] = Tr forms a tridiagonal system with
/// sub-diagonal a = λ, diagonal b = -(1 + 2λ), super-diagonal c = λ, and
/// right-hand side d_i = -T_old[i]. The double sweep solves it exactly:
/// a forward pass builds the coefficients P, Q from the left boundary, then
/// back-substitution from the right boundary fills the interior.
///
/// The field is one slot longer than the node count: the right physical
/// boundary lives at index N while index N-1 is the last node the interior
/// recurrence writes. Callers (and the driver's accessors) rely on that
/// layout; shifting it would move the mesh.
pub struct TridiagonalStepper {
    node_count: usize,
    lambda: Real,
    left_k: Real,
    right_k: Real,
    // Per-step working storage, overwritten by every forward sweep.
    p: Vec<Real>,
    q: Vec<Real>,
}

impl TridiagonalStepper {
    pub fn new(disc: &Discretization) -> Self {
        Self {
            node_count: disc.node_count,
            lambda: disc.lambda,
            left_k: disc.left_temperature_k,
            right_k: disc.right_temperature_k,
            p: vec![0.0; disc.node_count],
            q: vec![0.0; disc.node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Mutate `field` in place from the current time level to the next.
    ///
    /// `field` must have length `node_count + 1`. On a pivot failure the
    /// field is left in an indeterminate, partially updated state.
    pub fn advance(&mut self, field: &mut [Real]) -> SolverResult<()> {
        let n = self.node_count;
        if field.len() != n + 1 {
            return Err(SolverError::Configuration {
                what: format!(
                    "field length {} (expected N + 1 = {} slots for {} nodes)",
                    field.len(),
                    n + 1,
                    n
                ),
            });
        }

        let lambda = self.lambda;
        let b = -(1.0 + 2.0 * lambda);

        // Forward sweep, seeded by the left Dirichlet value.
        self.p[0] = 0.0;
        self.q[0] = self.left_k;
        for i in 1..n {
            let den = lambda * self.p[i - 1] + b;
            if den.abs() < PIVOT_FLOOR {
                return Err(SolverError::NumericalInstability { node: i, pivot: den });
            }
            self.p[i] = lambda / -den;
            self.q[i] = (-field[i] - lambda * self.q[i - 1]) / den;
        }

        // Back-substitution from the right Dirichlet value.
        field[n] = self.right_k;
        for i in (1..n).rev() {
            field[i] = self.p[i] * field[i + 1] + self.q[i];
        }
        field[0] = self.left_k;

        Ok(())
    }
}
