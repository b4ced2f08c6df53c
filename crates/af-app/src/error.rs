//! Error types for the af-app service layer.

use af_core::UnitError;
use af_solver::SolverError;
use af_thermo::ThermoError;
use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("Thermodynamic model error: {0}")]
    Thermo(#[from] ThermoError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),

    #[error("Failed to read problem file: {path}")]
    ProblemFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{count} grid point(s) did not converge")]
    Unresolved { count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for af-app operations.
pub type AppResult<T> = Result<T, AppError>;
