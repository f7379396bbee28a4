//! Simulation driver: parameter lifecycle and the outer time loop.

use crate::error::SimResult;
use crate::progress::StepEvent;
use hr_solver::{Discretization, RodConfig, TridiagonalStepper};

/// One rod simulation run.
///
/// Construction validates the configuration, derives the discretization, and
/// allocates the temperature field and sweep storage. [`RodSimulation::solve`]
/// may be called repeatedly; each call resets the field to the initial
/// temperature and replays the full time range. The loop is strictly
/// sequential: every step's linear system depends on the previous step's
/// full solution, and the observer is invoked synchronously before the next
/// step begins.
pub struct RodSimulation {
    disc: Discretization,
    stepper: TridiagonalStepper,
    /// `node_count + 1` slots; the right physical boundary is stored at the
    /// extra final slot, one past the last interior-recurrence node.
    field: Vec<f64>,
    current_time_s: f64,
}

impl RodSimulation {
    pub fn new(config: &RodConfig) -> SimResult<Self> {
        let disc = config.discretize()?;
        let stepper = TridiagonalStepper::new(&disc);
        let field = vec![disc.initial_temperature_k; disc.node_count + 1];
        Ok(Self {
            disc,
            stepper,
            field,
            current_time_s: disc.start_time_s,
        })
    }

    /// Number of mesh nodes N.
    pub fn node_count(&self) -> usize {
        self.disc.node_count
    }

    /// Current temperature field, `node_count + 1` kelvin values.
    pub fn temperature_field(&self) -> &[f64] {
        &self.field
    }

    /// Time step τ in seconds.
    pub fn time_step_s(&self) -> f64 {
        self.disc.time_step_s
    }

    /// Normalized elapsed simulation time, clamped to [0, 1].
    pub fn percent_done(&self) -> f64 {
        (self.current_time_s / self.disc.end_time_s).clamp(0.0, 1.0)
    }

    /// Run the full time range with no observer.
    pub fn solve(&mut self, verbose: bool) -> SimResult<()> {
        self.solve_with_observer(verbose, None)
    }

    /// Run the full time range, notifying `observer` after each completed
    /// step.
    ///
    /// On failure the run aborts immediately and the field is left in an
    /// indeterminate, partially updated state.
    pub fn solve_with_observer(
        &mut self,
        verbose: bool,
        mut observer: Option<&mut dyn FnMut(&StepEvent<'_>)>,
    ) -> SimResult<()> {
        let steps = self.disc.step_count();
        let start = self.disc.start_time_s;
        let end = self.disc.end_time_s;
        let tau = self.disc.time_step_s;

        self.field.fill(self.disc.initial_temperature_k);
        self.current_time_s = start;

        tracing::debug!(steps, tau, "starting rod run");

        for step in 1..=steps {
            // Clock derived multiplicatively so repeated addition cannot
            // drift the step count past the intended N - 1.
            self.current_time_s = start + step as f64 * tau;
            self.stepper.advance(&mut self.field)?;

            tracing::trace!(step, t = self.current_time_s, "step complete");

            if let Some(cb) = observer.as_mut() {
                cb(&StepEvent {
                    step,
                    sim_time_s: self.current_time_s,
                    fraction_complete: (self.current_time_s / end).clamp(0.0, 1.0),
                    temperatures_k: &self.field,
                });
            }
        }

        if verbose {
            let last_interior = self.disc.node_count - 1;
            tracing::info!(
                "run complete: t={:.1} s, T[0]={:.4} K, T[{}]={:.4} K",
                self.current_time_s,
                self.field[0],
                last_interior,
                self.field[last_interior],
            );
        }

        Ok(())
    }
}
