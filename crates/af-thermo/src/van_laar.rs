//! Van Laar activity-coefficient model.
//!
//! Two parameters `(A, B)` are fitted once from an azeotrope observation and
//! then evaluated for arbitrary interior compositions:
//!
//! ```text
//! A = ln γ1 · (1 + x2·ln γ2 / (x1·ln γ1))²
//! B = ln γ2 · (1 + x1·ln γ1 / (x2·ln γ2))²
//! γ1 = exp(A / (1 + (x1/x2)·A/B)²)
//! γ2 = exp(B / (1 + (x2/x1)·B/A)²)
//! ```
//!
//! The fit and the evaluation are exact inverses of each other at the azeotrope
//! composition, which is what lets the solved curve pass through the observed
//! azeotrope.

use crate::antoine::AntoineConstants;
use crate::azeotrope::AzeotropePoint;
use crate::composition::BinaryComposition;
use crate::error::{ThermoError, ThermoResult};
use serde::Serialize;
use std::fmt;

/// Fitted Van Laar parameters. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VanLaarParameters {
    pub a: f64,
    pub b: f64,
}

impl VanLaarParameters {
    /// Fit from the azeotrope composition and the activity coefficients there.
    ///
    /// Requires `ln γ1 ≠ 0` and `ln γ2 ≠ 0`: an ideal azeotrope carries no
    /// information about the non-ideality and yields [`ThermoError::ModelSingularity`].
    pub fn fit(x1_az: f64, x2_az: f64, gamma1_az: f64, gamma2_az: f64) -> ThermoResult<Self> {
        for (name, x) in [("x1", x1_az), ("x2", x2_az)] {
            if !(x.is_finite() && x > 0.0 && x < 1.0) {
                return Err(ThermoError::invalid(format!(
                    "Van Laar fit needs {name} strictly inside (0, 1) (got {x})"
                )));
            }
        }
        for (name, gamma) in [("gamma1", gamma1_az), ("gamma2", gamma2_az)] {
            if !(gamma.is_finite() && gamma > 0.0) {
                return Err(ThermoError::invalid(format!(
                    "Van Laar fit needs positive finite {name} (got {gamma})"
                )));
            }
        }

        let ln_g1 = gamma1_az.ln();
        let ln_g2 = gamma2_az.ln();
        if ln_g1 == 0.0 || ln_g2 == 0.0 {
            return Err(ThermoError::singular(format!(
                "ln(gamma) is zero at the azeotrope (ln gamma1 = {ln_g1}, ln gamma2 = {ln_g2})"
            )));
        }

        let a = ln_g1 * (1.0 + x2_az * ln_g2 / (x1_az * ln_g1)).powi(2);
        let b = ln_g2 * (1.0 + x1_az * ln_g1 / (x2_az * ln_g2)).powi(2);

        // Opposite-sign ln(gamma) can zero a bracket, which makes A/B undefined
        if !(a.is_finite() && b.is_finite()) || a == 0.0 || b == 0.0 {
            return Err(ThermoError::singular(format!(
                "fitted Van Laar parameters are degenerate (A = {a}, B = {b})"
            )));
        }

        Ok(Self { a, b })
    }

    /// Fit from an azeotrope observation at operating pressure `p_mmhg`.
    pub fn from_azeotrope(
        azeotrope: &AzeotropePoint,
        first: &AntoineConstants,
        second: &AntoineConstants,
        p_mmhg: f64,
    ) -> ThermoResult<Self> {
        let (gamma1, gamma2) = azeotrope.activity_coefficients(first, second, p_mmhg);
        Self::fit(azeotrope.x1(), azeotrope.x2(), gamma1, gamma2)
    }

    /// Activity coefficients `(γ1, γ2)` at an interior composition.
    ///
    /// The formulas divide by `x1` and `x2`; pure-component compositions are
    /// rejected and must be handled by the caller without this model.
    pub fn coefficients(&self, composition: &BinaryComposition) -> ThermoResult<(f64, f64)> {
        if !composition.is_interior() {
            return Err(ThermoError::invalid(format!(
                "activity coefficients are undefined at the pure limit x1 = {}",
                composition.x1()
            )));
        }
        let (x1, x2) = (composition.x1(), composition.x2());
        let gamma1 = (self.a / (1.0 + x1 / x2 * self.a / self.b).powi(2)).exp();
        let gamma2 = (self.b / (1.0 + x2 / x1 * self.b / self.a).powi(2)).exp();
        Ok((gamma1, gamma2))
    }

    /// Parameters for the same mixture with components 1 and 2 exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

impl fmt::Display for VanLaarParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A={:.6} B={:.6}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ethyl_acetate_cyclohexane() -> (VanLaarParameters, f64, f64) {
        let first = AntoineConstants::new(7.10179, 1244.951, 217.881).unwrap();
        let second = AntoineConstants::new(6.84941, 1206.001, 223.148).unwrap();
        let az = AzeotropePoint::new(72.8, 0.531, 0.469).unwrap();
        let (g1, g2) = az.activity_coefficients(&first, &second, 760.0);
        let params = VanLaarParameters::from_azeotrope(&az, &first, &second, 760.0).unwrap();
        (params, g1, g2)
    }

    #[test]
    fn fitted_parameters() {
        let (params, _, _) = ethyl_acetate_cyclohexane();
        assert!((params.a - 0.9043).abs() < 1e-3, "A = {}", params.a);
        assert!((params.b - 0.6741).abs() < 1e-3, "B = {}", params.b);
    }

    #[test]
    fn coefficients_reproduce_azeotrope() {
        let (params, g1, g2) = ethyl_acetate_cyclohexane();
        let comp = BinaryComposition::from_x1(0.531).unwrap();
        let (gamma1, gamma2) = params.coefficients(&comp).unwrap();
        assert!((gamma1 - g1).abs() < 1e-9);
        assert!((gamma2 - g2).abs() < 1e-9);
    }

    #[test]
    fn dilute_limits_approach_exp_parameters() {
        let (params, _, _) = ethyl_acetate_cyclohexane();
        let comp = BinaryComposition::from_x1(1e-9).unwrap();
        let (gamma1, gamma2) = params.coefficients(&comp).unwrap();
        assert!((gamma1 - params.a.exp()).abs() < 1e-6);
        assert!((gamma2 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ideal_azeotrope_is_singular() {
        let err = VanLaarParameters::fit(0.5, 0.5, 1.0, 1.2).unwrap_err();
        assert!(matches!(err, ThermoError::ModelSingularity { .. }));
        let err = VanLaarParameters::fit(0.5, 0.5, 1.2, 1.0).unwrap_err();
        assert!(matches!(err, ThermoError::ModelSingularity { .. }));
    }

    #[test]
    fn pure_compositions_are_rejected() {
        let (params, _, _) = ethyl_acetate_cyclohexane();
        assert!(params.coefficients(&BinaryComposition::pure_first()).is_err());
        assert!(params.coefficients(&BinaryComposition::pure_second()).is_err());
    }

    #[test]
    fn reject_invalid_fit_inputs() {
        assert!(matches!(
            VanLaarParameters::fit(0.0, 1.0, 1.1, 1.2),
            Err(ThermoError::InvalidInput { .. })
        ));
        assert!(matches!(
            VanLaarParameters::fit(0.5, 0.5, -1.0, 1.2),
            Err(ThermoError::InvalidInput { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use af_core::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fit_is_symmetric_under_component_swap(
            x1 in 0.05_f64..0.95,
            gamma1 in 1.05_f64..5.0,
            gamma2 in 1.05_f64..5.0,
        ) {
            let x2 = 1.0 - x1;
            let forward = VanLaarParameters::fit(x1, x2, gamma1, gamma2).unwrap();
            let reverse = VanLaarParameters::fit(x2, x1, gamma2, gamma1).unwrap();
            let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
            prop_assert!(nearly_equal(forward.a, reverse.b, tol));
            prop_assert!(nearly_equal(forward.b, reverse.a, tol));
            prop_assert_eq!(forward.swapped(), reverse);
        }

        #[test]
        fn evaluation_inverts_fit(
            x1 in 0.05_f64..0.95,
            gamma1 in 1.05_f64..5.0,
            gamma2 in 1.05_f64..5.0,
        ) {
            let params = VanLaarParameters::fit(x1, 1.0 - x1, gamma1, gamma2).unwrap();
            let comp = BinaryComposition::from_x1(x1).unwrap();
            let (g1, g2) = params.coefficients(&comp).unwrap();
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(nearly_equal(g1, gamma1, tol));
            prop_assert!(nearly_equal(g2, gamma2, tol));
        }
    }
}
