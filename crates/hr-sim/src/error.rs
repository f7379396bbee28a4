//! Error types for simulation runs.

use hr_solver::SolverError;
use thiserror::Error;

/// Errors encountered while setting up or running a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

pub type SimResult<T> = Result<T, SimError>;
