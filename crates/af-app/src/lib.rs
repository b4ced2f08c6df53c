//! Shared application service layer for azeoflow.
//!
//! This crate turns validated inputs into a complete T-x-y equilibrium curve
//! and packages everything a frontend needs to draw it: the ordered points,
//! boiling points, display bounds and annotation placement. It also owns the
//! problem-file format and the CSV/JSON exports, so the CLI stays a thin shell.

pub mod curve;
pub mod error;
pub mod export;
pub mod grid;
pub mod problem;
pub mod system;

// Re-export key types for convenience
pub use curve::{
    Annotation, CurveBuilder, CurveConfig, CurveView, DisplayBounds, EquilibriumCurve,
    Perspective,
};
pub use error::{AppError, AppResult};
pub use export::{CurveReport, to_csv, to_json};
pub use grid::CompositionGrid;
pub use problem::{
    AzeotropeDef, ComponentDef, ProblemDef, QuantityDef, SolverDef, load_problem, save_problem,
    solve_problem,
};
pub use system::BinarySystem;
