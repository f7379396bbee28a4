//! Step-completion events handed to external observers.

/// Snapshot passed to the observer after each completed time step.
///
/// The temperature slice is borrowed from the driver for the duration of the
/// callback; observers that need to keep it copy it out. Nothing flows back
/// into the solver.
#[derive(Debug)]
pub struct StepEvent<'a> {
    /// 1-based index of the step that just completed.
    pub step: usize,
    /// Simulation clock after this step, in seconds.
    pub sim_time_s: f64,
    /// Normalized progress, `sim_time / end_time`, clamped to [0, 1].
    pub fraction_complete: f64,
    /// Current temperature field, `node_count + 1` values in kelvin.
    /// Index 0 is the left boundary; the last slot holds the right boundary.
    pub temperatures_k: &'a [f64],
}
