//! Isobaric vapor-liquid equilibrium solver for binary mixtures.
//!
//! For a fixed liquid composition the unknown is the boiling temperature `T`
//! at which the modified-Raoult pressure balance
//!
//! ```text
//! f(T) = P - (γ1·x1·P0_1(T) + γ2·x2·P0_2(T)) = 0
//! ```
//!
//! holds. The root is bracketed on `[0, T_upper]` and found by bisection; the
//! vapor composition follows from the partial pressures at the root.

pub mod bisection;
pub mod bounds;
pub mod equilibrium;
pub mod error;

pub use bisection::{BisectionConfig, BisectionResult, bisect};
pub use bounds::compute_upper_bound;
pub use equilibrium::{EquilibriumPoint, EquilibriumSolver, PointOutcome};
pub use error::{SolverError, SolverResult};
