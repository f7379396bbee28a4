//! hr-sim: time-marching driver for the rod conduction solver.
//!
//! Owns the outer time loop and the temperature field, invokes the
//! tridiagonal stepper once per time increment, and notifies a registered
//! step-completion observer with the current field and progress fraction.

pub mod driver;
pub mod error;
pub mod progress;

pub use driver::RodSimulation;
pub use error::{SimError, SimResult};
pub use progress::StepEvent;
