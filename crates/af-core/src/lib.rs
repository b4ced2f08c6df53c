//! af-core: stable foundation for azeoflow.
//!
//! Contains:
//! - units (uom types + °C / mmHg constructors)
//! - numeric (Real + tolerances + float helpers)
//! - quantity (unit-aware text input for temperatures, pressures, fractions)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod quantity;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use quantity::{Quantity, UnitError, UnitValue, parse_quantity};
pub use units::*;
