//! Error types for solver operations.

use af_thermo::ThermoError;
use thiserror::Error;

/// Errors that prevent a solve from starting.
///
/// Running out of iterations is not an error: it is reported per point as
/// [`crate::PointOutcome::Unresolved`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Thermodynamic model error: {0}")]
    Thermo(#[from] ThermoError),
}

pub type SolverResult<T> = Result<T, SolverError>;
