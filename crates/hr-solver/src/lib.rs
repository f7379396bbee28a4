//! hr-solver: implicit finite-difference core for 1D rod conduction.
//!
//! Discretizes the transient heat equation on a uniform mesh with fixed
//! (Dirichlet) end temperatures and advances the temperature field one
//! implicit time level per call, solving the resulting tridiagonal system
//! exactly with the double-sweep (Thomas) algorithm.

pub mod config;
pub mod error;
pub mod stepper;

pub use config::{
    BoundaryConditions, Discretization, MaterialProperties, MeshConfig, RodConfig, TimeConfig,
};
pub use error::{SolverError, SolverResult};
pub use stepper::TridiagonalStepper;
