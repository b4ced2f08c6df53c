//! af-thermo: pure-component and binary-mixture thermodynamics for azeoflow.
//!
//! Provides:
//! - Antoine vapor-pressure model (saturation pressure and its inverse)
//! - Components and a catalog of tabulated Antoine constants
//! - Binary liquid compositions with exactly complementary fractions
//! - Azeotrope observations and their classification
//! - Van Laar activity-coefficient model fitted from an azeotrope
//!
//! All temperatures are °C and all pressures mmHg, matching the tabulated
//! Antoine constants.
//!
//! # Example
//!
//! ```
//! use af_thermo::{AzeotropePoint, Component, VanLaarParameters};
//!
//! let ethyl_acetate = Component::from_catalog("ethyl acetate").unwrap();
//! let cyclohexane = Component::from_catalog("cyclohexane").unwrap();
//! let az = AzeotropePoint::new(72.8, 0.531, 0.469).unwrap();
//!
//! let params = VanLaarParameters::from_azeotrope(
//!     &az,
//!     &ethyl_acetate.antoine,
//!     &cyclohexane.antoine,
//!     760.0,
//! )
//! .unwrap();
//! assert!(params.a > 0.0 && params.b > 0.0);
//! ```

pub mod antoine;
pub mod azeotrope;
pub mod catalog;
pub mod component;
pub mod composition;
pub mod error;
pub mod van_laar;

// Re-exports for ergonomics
pub use antoine::{AntoineConstants, boiling_temperature, saturation_pressure};
pub use azeotrope::{AzeotropeKind, AzeotropePoint};
pub use catalog::{ComponentCatalogEntry, antoine_catalog, filter_antoine_catalog, lookup};
pub use component::Component;
pub use composition::BinaryComposition;
pub use error::{ThermoError, ThermoResult};
pub use van_laar::VanLaarParameters;
