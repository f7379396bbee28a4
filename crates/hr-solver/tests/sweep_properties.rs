//! Property tests for the double-sweep step.

use hr_core::{k, m};
use hr_solver::{BoundaryConditions, MeshConfig, RodConfig, TridiagonalStepper};
use proptest::prelude::*;

fn config(node_count: usize, length_m: f64, t0: f64, tl: f64, tr: f64) -> RodConfig {
    RodConfig {
        mesh: MeshConfig {
            length: m(length_m),
            node_count,
        },
        boundary: BoundaryConditions {
            left_temperature: k(tl),
            right_temperature: k(tr),
        },
        initial_temperature: k(t0),
        ..RodConfig::default()
    }
}

proptest! {
    /// Discrete maximum principle: with fixed end temperatures and a uniform
    /// start between them, no node ever leaves the envelope spanned by the
    /// boundary and initial values.
    #[test]
    fn interior_stays_within_envelope(
        node_count in 3usize..48,
        length_cm in 1.0f64..100.0,
        t0 in 250.0f64..700.0,
        tl in 250.0f64..700.0,
        tr in 250.0f64..700.0,
    ) {
        let cfg = config(node_count, length_cm / 100.0, t0, tl, tr);
        let disc = cfg.discretize().unwrap();
        let mut stepper = TridiagonalStepper::new(&disc);
        let mut field = vec![t0; node_count + 1];

        let lo = tl.min(tr).min(t0) - 1e-6;
        let hi = tl.max(tr).max(t0) + 1e-6;
        for step in 0..disc.step_count() {
            stepper.advance(&mut field).unwrap();
            for (i, &v) in field.iter().enumerate() {
                prop_assert!(
                    (lo..=hi).contains(&v),
                    "node {i} = {v} outside [{lo}, {hi}] at step {step}"
                );
            }
        }
    }

    /// The sweep is an exact solve: the advanced field satisfies every
    /// interior equation of the implicit discretization.
    #[test]
    fn sweep_solves_the_tridiagonal_system(
        node_count in 3usize..40,
        length_cm in 1.0f64..50.0,
        t0 in 250.0f64..700.0,
        tl in 250.0f64..700.0,
        tr in 250.0f64..700.0,
    ) {
        let cfg = config(node_count, length_cm / 100.0, t0, tl, tr);
        let disc = cfg.discretize().unwrap();
        let mut stepper = TridiagonalStepper::new(&disc);

        let old = vec![t0; node_count + 1];
        let mut field = old.clone();
        stepper.advance(&mut field).unwrap();

        let lam = disc.lambda;
        // Round-off in the recurrences scales with the diagonal magnitude.
        let tol = (1.0 + 2.0 * lam) * 700.0 * 1e-12 + 1e-9;
        for i in 1..node_count {
            let lhs = -lam * field[i - 1] + (1.0 + 2.0 * lam) * field[i] - lam * field[i + 1];
            prop_assert!(
                (lhs - old[i]).abs() < tol,
                "residual {} at node {i} (lambda = {lam})",
                lhs - old[i]
            );
        }
    }

    /// Same inputs, same bits: the step has no hidden state across runs.
    #[test]
    fn step_is_deterministic(
        node_count in 3usize..40,
        t0 in 250.0f64..700.0,
        tl in 250.0f64..700.0,
        tr in 250.0f64..700.0,
    ) {
        let cfg = config(node_count, 0.1, t0, tl, tr);
        let disc = cfg.discretize().unwrap();

        let mut a = vec![t0; node_count + 1];
        let mut b = a.clone();
        TridiagonalStepper::new(&disc).advance(&mut a).unwrap();
        TridiagonalStepper::new(&disc).advance(&mut b).unwrap();
        prop_assert_eq!(a, b);
    }
}
