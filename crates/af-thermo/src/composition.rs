//! Binary liquid composition.

use crate::error::{ThermoError, ThermoResult};
use serde::Serialize;

/// Mole fractions of a two-component liquid.
///
/// Only `x1` is ever supplied; `x2` is always computed as `1 - x1` so the pair
/// stays exactly complementary no matter how `x1` was produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinaryComposition {
    x1: f64,
    x2: f64,
}

impl BinaryComposition {
    /// Create a composition from the mole fraction of component 1.
    pub fn from_x1(x1: f64) -> ThermoResult<Self> {
        if !x1.is_finite() {
            return Err(ThermoError::NonFinite {
                what: "mole fraction x1",
                value: x1,
            });
        }
        if !(0.0..=1.0).contains(&x1) {
            return Err(ThermoError::invalid(format!(
                "mole fraction x1 must lie in [0, 1] (got {x1})"
            )));
        }
        Ok(Self { x1, x2: 1.0 - x1 })
    }

    /// Pure component 1 (`x1 = 1`).
    pub fn pure_first() -> Self {
        Self { x1: 1.0, x2: 0.0 }
    }

    /// Pure component 2 (`x1 = 0`).
    pub fn pure_second() -> Self {
        Self { x1: 0.0, x2: 1.0 }
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn is_pure_first(&self) -> bool {
        self.x1 == 1.0
    }

    pub fn is_pure_second(&self) -> bool {
        self.x1 == 0.0
    }

    /// Strictly between the two pure-component limits.
    pub fn is_interior(&self) -> bool {
        !self.is_pure_first() && !self.is_pure_second()
    }
}
