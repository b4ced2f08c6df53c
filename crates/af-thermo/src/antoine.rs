//! Antoine vapor-pressure model.
//!
//! `log10(P) = A - B / (T + C)` with `P` in mmHg and `T` in °C.

use crate::error::{ThermoError, ThermoResult};
use af_core::numeric::{ensure_finite, ensure_positive};
use serde::Serialize;
use std::fmt;

/// Antoine constants of one pure component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AntoineConstants {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl AntoineConstants {
    /// Validated constructor.
    ///
    /// All constants must be finite with `B > 0` and `C > 0`. A positive `C`
    /// keeps `T + C` away from zero for every temperature the solver brackets
    /// (`T >= 0 °C`).
    pub fn new(a: f64, b: f64, c: f64) -> ThermoResult<Self> {
        Ok(Self {
            a: ensure_finite(a, "Antoine A")?,
            b: ensure_positive(b, "Antoine B")?,
            c: ensure_positive(c, "Antoine C")?,
        })
    }

    /// Saturation pressure [mmHg] at `t_c` [°C].
    #[inline]
    pub fn saturation_pressure(&self, t_c: f64) -> f64 {
        saturation_pressure(self, t_c)
    }

    /// Normal boiling temperature [°C] at `p_mmhg`, checked.
    ///
    /// Fails when the pressure is not positive or lies at or above `10^A`, where
    /// the inverse has no physical solution.
    pub fn boiling_temperature(&self, p_mmhg: f64) -> ThermoResult<f64> {
        if !(p_mmhg.is_finite() && p_mmhg > 0.0) {
            return Err(ThermoError::invalid(format!(
                "pressure must be positive and finite (got {p_mmhg})"
            )));
        }
        if self.a - p_mmhg.log10() <= 0.0 {
            return Err(ThermoError::invalid(format!(
                "no boiling temperature at {p_mmhg} mmHg for Antoine A = {}",
                self.a
            )));
        }
        Ok(ensure_finite(
            boiling_temperature(p_mmhg, self),
            "boiling temperature",
        )?)
    }
}

impl fmt::Display for AntoineConstants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A={} B={} C={}", self.a, self.b, self.c)
    }
}

/// `P = 10^(A - B / (T + C))`.
#[inline]
pub fn saturation_pressure(constants: &AntoineConstants, t_c: f64) -> f64 {
    10f64.powf(constants.a - constants.b / (t_c + constants.c))
}

/// Closed-form inverse of [`saturation_pressure`]: `T = B / (A - log10(P)) - C`.
#[inline]
pub fn boiling_temperature(p_mmhg: f64, constants: &AntoineConstants) -> f64 {
    constants.b / (constants.a - p_mmhg.log10()) - constants.c
}
