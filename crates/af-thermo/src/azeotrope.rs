//! Azeotrope observations.

use crate::antoine::AntoineConstants;
use crate::composition::BinaryComposition;
use crate::error::{ThermoError, ThermoResult};
use af_core::numeric::{Tolerances, nearly_equal};
use serde::Serialize;
use std::fmt;

/// Allowed deviation of `x1 + x2` from one in user input.
pub const FRACTION_SUM_TOLERANCE: f64 = 1e-6;

/// One measured azeotrope: boiling temperature and the shared liquid/vapor
/// composition at that temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AzeotropePoint {
    /// Azeotrope temperature [°C]
    pub temperature_c: f64,
    /// Composition (identical in liquid and vapor)
    pub composition: BinaryComposition,
}

impl AzeotropePoint {
    /// Validate an observation.
    ///
    /// Both fractions must lie strictly inside `(0, 1)` and sum to one within
    /// [`FRACTION_SUM_TOLERANCE`]; the stored `x2` is recomputed from `x1`. The
    /// temperature must be finite and above 0 °C.
    pub fn new(temperature_c: f64, x1: f64, x2: f64) -> ThermoResult<Self> {
        if !(temperature_c.is_finite() && temperature_c > 0.0) {
            return Err(ThermoError::invalid(format!(
                "azeotrope temperature must be above 0 °C (got {temperature_c})"
            )));
        }
        for (name, x) in [("x1", x1), ("x2", x2)] {
            if !(x.is_finite() && x > 0.0 && x < 1.0) {
                return Err(ThermoError::invalid(format!(
                    "azeotrope {name} must lie strictly inside (0, 1) (got {x})"
                )));
            }
        }
        let tol = Tolerances {
            abs: FRACTION_SUM_TOLERANCE,
            rel: 0.0,
        };
        if !nearly_equal(x1 + x2, 1.0, tol) {
            return Err(ThermoError::invalid(format!(
                "azeotrope fractions must sum to 1 (got {x1} + {x2} = {})",
                x1 + x2
            )));
        }
        Ok(Self {
            temperature_c,
            composition: BinaryComposition::from_x1(x1)?,
        })
    }

    pub fn x1(&self) -> f64 {
        self.composition.x1()
    }

    pub fn x2(&self) -> f64 {
        self.composition.x2()
    }

    /// Activity coefficients of both components at the azeotrope.
    ///
    /// At an azeotrope `y_i = x_i`, so Dalton's law `y_i P = γ_i x_i P0_i(T_az)`
    /// reduces to `γ_i = P / P0_i(T_az)`.
    pub fn activity_coefficients(
        &self,
        first: &AntoineConstants,
        second: &AntoineConstants,
        p_mmhg: f64,
    ) -> (f64, f64) {
        (
            p_mmhg / first.saturation_pressure(self.temperature_c),
            p_mmhg / second.saturation_pressure(self.temperature_c),
        )
    }

    /// Classify against the two pure-component boiling points.
    pub fn kind(&self, t1_c: f64, t2_c: f64) -> AzeotropeKind {
        AzeotropeKind::classify(self.temperature_c, t1_c, t2_c)
    }
}

/// Position of the azeotrope temperature relative to both pure boiling points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AzeotropeKind {
    /// Boils below both pure components (positive deviation).
    MinimumBoiling,
    /// Boils above both pure components (negative deviation).
    MaximumBoiling,
    /// Lies between the two pure boiling points.
    Intermediate,
}

impl AzeotropeKind {
    pub fn classify(t_az_c: f64, t1_c: f64, t2_c: f64) -> Self {
        if t_az_c < t1_c && t_az_c < t2_c {
            Self::MinimumBoiling
        } else if t_az_c > t1_c && t_az_c > t2_c {
            Self::MaximumBoiling
        } else {
            Self::Intermediate
        }
    }

    pub fn is_minimum_boiling(&self) -> bool {
        matches!(self, Self::MinimumBoiling)
    }

    /// Vertical offset [°C] of the azeotrope label from the point itself.
    ///
    /// Above the point for a minimum-boiling azeotrope, below it otherwise, so
    /// the label never sits inside the two-phase loop.
    pub fn annotation_offset_c(&self) -> f64 {
        if self.is_minimum_boiling() { 2.0 } else { -2.0 }
    }
}

impl fmt::Display for AzeotropeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinimumBoiling => write!(f, "minimum-boiling"),
            Self::MaximumBoiling => write!(f, "maximum-boiling"),
            Self::Intermediate => write!(f, "intermediate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_azeotrope() {
        let az = AzeotropePoint::new(72.8, 0.531, 0.469).unwrap();
        assert_eq!(az.x1(), 0.531);
        assert_eq!(az.x2(), 1.0 - 0.531);
    }

    #[test]
    fn reject_pure_limit() {
        assert!(AzeotropePoint::new(72.8, 0.0, 1.0).is_err());
        assert!(AzeotropePoint::new(72.8, 1.0, 0.0).is_err());
    }

    #[test]
    fn reject_fractions_not_summing_to_one() {
        let err = AzeotropePoint::new(72.8, 0.5, 0.4).unwrap_err();
        assert!(err.to_string().contains("sum to 1"));
    }

    #[test]
    fn reject_non_positive_temperature() {
        assert!(AzeotropePoint::new(0.0, 0.5, 0.5).is_err());
        assert!(AzeotropePoint::new(f64::NAN, 0.5, 0.5).is_err());
    }

    #[test]
    fn activity_coefficients_from_dalton() {
        let first = AntoineConstants::new(7.10179, 1244.951, 217.881).unwrap();
        let second = AntoineConstants::new(6.84941, 1206.001, 223.148).unwrap();
        let az = AzeotropePoint::new(72.8, 0.531, 0.469).unwrap();
        let (g1, g2) = az.activity_coefficients(&first, &second, 760.0);
        assert!((g1 - 1.1532).abs() < 1e-3, "g1 = {g1}");
        assert!((g2 - 1.2778).abs() < 1e-3, "g2 = {g2}");
    }

    #[test]
    fn classification() {
        assert_eq!(
            AzeotropeKind::classify(72.8, 77.1, 80.7),
            AzeotropeKind::MinimumBoiling
        );
        assert_eq!(
            AzeotropeKind::classify(110.0, 100.0, 64.7),
            AzeotropeKind::MaximumBoiling
        );
        assert_eq!(
            AzeotropeKind::classify(79.0, 77.1, 80.7),
            AzeotropeKind::Intermediate
        );
        assert_eq!(AzeotropeKind::MinimumBoiling.annotation_offset_c(), 2.0);
        assert_eq!(AzeotropeKind::MaximumBoiling.annotation_offset_c(), -2.0);
    }
}
