//! Bubble-point solve for one liquid composition.

use crate::bisection::{BisectionConfig, bisect};
use crate::error::{SolverError, SolverResult};
use af_thermo::{AntoineConstants, BinaryComposition, VanLaarParameters};
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of solving one composition.
///
/// A point either converged within tolerance or is explicitly unresolved;
/// there is no sentinel temperature for a failed solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PointOutcome {
    Converged {
        /// Boiling temperature [°C]
        temperature_c: f64,
        /// Vapor mole fraction of component 1
        y1: f64,
        /// Bisection iterations used (0 at the pure-component limits)
        iterations: usize,
        /// Pressure balance residual at the solution [mmHg]
        residual_mmhg: f64,
    },
    Unresolved {
        iterations: usize,
        /// Midpoint of the final iteration [°C]
        last_temperature_c: f64,
        /// Residual at `last_temperature_c` [mmHg]
        last_residual_mmhg: f64,
    },
}

impl PointOutcome {
    pub fn temperature_c(&self) -> Option<f64> {
        match self {
            Self::Converged { temperature_c, .. } => Some(*temperature_c),
            Self::Unresolved { .. } => None,
        }
    }

    pub fn y1(&self) -> Option<f64> {
        match self {
            Self::Converged { y1, .. } => Some(*y1),
            Self::Unresolved { .. } => None,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

/// Solved state of one grid point. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquilibriumPoint {
    pub composition: BinaryComposition,
    pub outcome: PointOutcome,
}

impl EquilibriumPoint {
    pub fn x1(&self) -> f64 {
        self.composition.x1()
    }

    pub fn x2(&self) -> f64 {
        self.composition.x2()
    }

    pub fn temperature_c(&self) -> Option<f64> {
        self.outcome.temperature_c()
    }

    pub fn y1(&self) -> Option<f64> {
        self.outcome.y1()
    }

    pub fn y2(&self) -> Option<f64> {
        self.outcome.y1().map(|y1| 1.0 - y1)
    }

    pub fn is_converged(&self) -> bool {
        self.outcome.is_converged()
    }
}

/// Isobaric equilibrium solver for one binary mixture.
///
/// Holds only immutable, `Copy` data so a single instance can be shared by
/// every solve of a sweep, across threads included.
#[derive(Debug, Clone)]
pub struct EquilibriumSolver {
    first: AntoineConstants,
    second: AntoineConstants,
    params: VanLaarParameters,
    pressure_mmhg: f64,
    boiling_points_c: (f64, f64),
    upper_bound_c: f64,
    config: BisectionConfig,
}

impl EquilibriumSolver {
    /// # Arguments
    ///
    /// * `first`, `second` - Antoine constants of components 1 and 2
    /// * `params` - Fitted Van Laar parameters
    /// * `pressure_mmhg` - Operating pressure
    /// * `boiling_points_c` - Pure-component boiling points at `pressure_mmhg`
    /// * `upper_bound_c` - Upper end of the bisection bracket `[0, upper_bound_c]`
    /// * `config` - Tolerance and iteration cap
    pub fn new(
        first: AntoineConstants,
        second: AntoineConstants,
        params: VanLaarParameters,
        pressure_mmhg: f64,
        boiling_points_c: (f64, f64),
        upper_bound_c: f64,
        config: BisectionConfig,
    ) -> SolverResult<Self> {
        config.validate()?;
        if !(pressure_mmhg.is_finite() && pressure_mmhg > 0.0) {
            return Err(SolverError::InvalidConfig {
                what: format!("pressure must be positive (got {pressure_mmhg})"),
            });
        }
        if !(upper_bound_c.is_finite() && upper_bound_c > 0.0) {
            return Err(SolverError::InvalidConfig {
                what: format!("upper temperature bound must be positive (got {upper_bound_c})"),
            });
        }
        let (t1, t2) = boiling_points_c;
        if !(t1.is_finite() && t2.is_finite()) {
            return Err(SolverError::InvalidConfig {
                what: format!("pure boiling points must be finite (got {t1}, {t2})"),
            });
        }
        Ok(Self {
            first,
            second,
            params,
            pressure_mmhg,
            boiling_points_c,
            upper_bound_c,
            config,
        })
    }

    pub fn params(&self) -> &VanLaarParameters {
        &self.params
    }

    pub fn pressure_mmhg(&self) -> f64 {
        self.pressure_mmhg
    }

    pub fn boiling_points_c(&self) -> (f64, f64) {
        self.boiling_points_c
    }

    pub fn upper_bound_c(&self) -> f64 {
        self.upper_bound_c
    }

    pub fn config(&self) -> &BisectionConfig {
        &self.config
    }

    /// Pressure balance `P - (γ1·x1·P0_1(T) + γ2·x2·P0_2(T))` [mmHg] at an
    /// interior composition.
    pub fn residual(&self, t_c: f64, composition: &BinaryComposition) -> SolverResult<f64> {
        let gammas = self.params.coefficients(composition)?;
        let (p1, p2) = self.partial_pressures(t_c, composition, gammas);
        Ok(self.pressure_mmhg - (p1 + p2))
    }

    /// Solve for the boiling temperature and vapor composition.
    ///
    /// The pure-component limits are answered directly from the boiling points,
    /// because the activity model is singular there.
    pub fn solve(&self, composition: BinaryComposition) -> SolverResult<EquilibriumPoint> {
        if composition.is_pure_second() {
            let (_, t2) = self.boiling_points_c;
            return Ok(self.pure_point(composition, t2, 0.0, &self.second));
        }
        if composition.is_pure_first() {
            let (t1, _) = self.boiling_points_c;
            return Ok(self.pure_point(composition, t1, 1.0, &self.first));
        }

        let gammas = self.params.coefficients(&composition)?;
        let result = bisect(
            |t| {
                let (p1, p2) = self.partial_pressures(t, &composition, gammas);
                self.pressure_mmhg - (p1 + p2)
            },
            0.0,
            self.upper_bound_c,
            &self.config,
        );

        let outcome = if result.converged {
            let (p1, p2) = self.partial_pressures(result.x, &composition, gammas);
            let y1 = p1 / (p1 + p2);
            debug!(
                x1 = composition.x1(),
                t_c = result.x,
                y1,
                iterations = result.iterations,
                residual = result.residual,
                "equilibrium point converged"
            );
            PointOutcome::Converged {
                temperature_c: result.x,
                y1,
                iterations: result.iterations,
                residual_mmhg: result.residual,
            }
        } else {
            warn!(
                x1 = composition.x1(),
                last_t_c = result.x,
                residual = result.residual,
                iterations = result.iterations,
                "equilibrium point unresolved"
            );
            PointOutcome::Unresolved {
                iterations: result.iterations,
                last_temperature_c: result.x,
                last_residual_mmhg: result.residual,
            }
        };

        Ok(EquilibriumPoint {
            composition,
            outcome,
        })
    }

    /// `(γ1·x1·P0_1(T), γ2·x2·P0_2(T))` [mmHg].
    fn partial_pressures(
        &self,
        t_c: f64,
        composition: &BinaryComposition,
        (gamma1, gamma2): (f64, f64),
    ) -> (f64, f64) {
        (
            gamma1 * composition.x1() * self.first.saturation_pressure(t_c),
            gamma2 * composition.x2() * self.second.saturation_pressure(t_c),
        )
    }

    fn pure_point(
        &self,
        composition: BinaryComposition,
        t_c: f64,
        y1: f64,
        antoine: &AntoineConstants,
    ) -> EquilibriumPoint {
        EquilibriumPoint {
            composition,
            outcome: PointOutcome::Converged {
                temperature_c: t_c,
                y1,
                iterations: 0,
                residual_mmhg: self.pressure_mmhg - antoine.saturation_pressure(t_c),
            },
        }
    }
}
