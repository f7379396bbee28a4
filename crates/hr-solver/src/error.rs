//! Error types for solver operations.

use hr_core::error::HrError;
use thiserror::Error;

/// Errors that can occur while setting up or advancing the rod solver.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    #[error("Numerical instability: sweep pivot {pivot:.3e} at node {node}")]
    NumericalInstability { node: usize, pivot: f64 },

    #[error("Numeric error: {0}")]
    Numeric(#[from] HrError),
}

pub type SolverResult<T> = Result<T, SolverError>;
