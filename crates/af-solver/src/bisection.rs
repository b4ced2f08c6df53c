//! Bracket-halving root finder.

use crate::error::{SolverError, SolverResult};
use serde::{Deserialize, Serialize};

/// Bisection configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BisectionConfig {
    /// Convergence threshold on `|f(t)|`
    pub tolerance: f64,
    /// Maximum iterations
    pub max_iterations: usize,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 1000,
        }
    }
}

impl BisectionConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SolverError::InvalidConfig {
                what: format!("tolerance must be positive (got {})", self.tolerance),
            });
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig {
                what: "max_iterations must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Bisection iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionResult {
    /// Last midpoint evaluated (the root when converged)
    pub x: f64,
    /// Residual at `x`
    pub residual: f64,
    /// Number of midpoints evaluated
    pub iterations: usize,
    /// Bracket still active after the last update
    pub bracket: (f64, f64),
    /// Converged flag
    pub converged: bool,
}

impl BisectionResult {
    pub fn bracket_width(&self) -> f64 {
        self.bracket.1 - self.bracket.0
    }
}

/// Bisection on `[lower, upper]` for a residual that decreases with `x`.
///
/// Each iteration evaluates the midpoint `x`. If `|f(x)| < tolerance` the
/// search stops. Otherwise a negative residual means `x` overshoots the root
/// and the upper bound moves down to `x`; a non-negative residual moves the
/// lower bound up. After `k` unconverged iterations the bracket width is
/// exactly `(upper - lower) / 2^k`.
pub fn bisect<F>(residual_fn: F, lower: f64, upper: f64, config: &BisectionConfig) -> BisectionResult
where
    F: Fn(f64) -> f64,
{
    let (mut lo, mut hi) = (lower, upper);
    let mut x = 0.5 * (lo + hi);
    let mut residual = f64::NAN;

    for iter in 0..config.max_iterations {
        x = 0.5 * (lo + hi);
        residual = residual_fn(x);

        if residual.abs() < config.tolerance {
            return BisectionResult {
                x,
                residual,
                iterations: iter + 1,
                bracket: (lo, hi),
                converged: true,
            };
        }

        if residual < 0.0 {
            hi = x;
        } else {
            lo = x;
        }
    }

    BisectionResult {
        x,
        residual,
        iterations: config.max_iterations,
        bracket: (lo, hi),
        converged: false,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bracket_halves_every_iteration(
            upper in 1.0_f64..500.0,
            root_frac in 0.01_f64..0.99,
            k in 1usize..20,
        ) {
            let root = upper * root_frac;
            let config = BisectionConfig { tolerance: 1e-300, max_iterations: k };
            let result = bisect(|x| root - x, 0.0, upper, &config);
            prop_assume!(!result.converged);
            let expected = upper / 2f64.powi(k as i32);
            prop_assert!(((result.bracket_width() - expected) / expected).abs() < 1e-6);
        }
    }
}
