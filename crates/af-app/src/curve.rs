//! Equilibrium curve construction.
//!
//! This module connects the composition grid with the equilibrium solver to
//! produce the ordered T-x-y data and all derived scalars a renderer needs.

use crate::error::{AppError, AppResult};
use crate::grid::CompositionGrid;
use crate::system::BinarySystem;
use af_core::units::constants::STANDARD_PRESSURE_MMHG;
use af_solver::{
    BisectionConfig, EquilibriumPoint, EquilibriumSolver, SolverResult, compute_upper_bound,
};
use af_thermo::{AzeotropeKind, AzeotropePoint, VanLaarParameters};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// Margin [°C] above the hottest relevant temperature on the display axis.
const DISPLAY_MARGIN_ABOVE_C: f64 = 2.5;
/// Margin [°C] below the coldest relevant temperature on the display axis.
const DISPLAY_MARGIN_BELOW_C: f64 = 1.0;

/// Settings for one curve computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig {
    /// Operating pressure [mmHg]
    pub pressure_mmhg: f64,
    /// Number of grid points over `x1 = 0..=1`
    pub grid_points: usize,
    /// Per-point root-finding settings
    pub bisection: BisectionConfig,
    /// Solve grid points on the rayon thread pool
    pub parallel: bool,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            pressure_mmhg: STANDARD_PRESSURE_MMHG,
            grid_points: CompositionGrid::DEFAULT_POINTS,
            bisection: BisectionConfig::default(),
            parallel: false,
        }
    }
}

/// Temperature axis limits [°C] that keep the whole two-phase loop visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayBounds {
    pub lower_c: f64,
    pub upper_c: f64,
}

impl DisplayBounds {
    pub fn for_azeotrope(t_az_c: f64, t1_c: f64, t2_c: f64, kind: AzeotropeKind) -> Self {
        let (lower_c, upper_c) = match kind {
            AzeotropeKind::MinimumBoiling => (t_az_c, t1_c.max(t2_c)),
            AzeotropeKind::MaximumBoiling => (t1_c.min(t2_c), t_az_c),
            // Upper limit reaches past T_az + 2.5 so the hotter pure boiling point stays visible
            AzeotropeKind::Intermediate => (t1_c.min(t2_c), t_az_c.max(t1_c).max(t2_c)),
        };
        Self {
            lower_c: lower_c - DISPLAY_MARGIN_BELOW_C,
            upper_c: upper_c + DISPLAY_MARGIN_ABOVE_C,
        }
    }

    pub fn contains(&self, t_c: f64) -> bool {
        (self.lower_c..=self.upper_c).contains(&t_c)
    }
}

/// Placement of the "azeotropic point" label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Annotation {
    /// Composition axis position (mole fraction of the plotted component)
    pub x: f64,
    /// The azeotrope temperature the arrow points at [°C]
    pub temperature_c: f64,
    /// Where the label text sits [°C]
    pub label_temperature_c: f64,
}

/// Which component's mole fraction runs along the composition axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Perspective {
    #[default]
    First,
    Second,
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Paired arrays for one diagram, ready to plot.
///
/// Arrays keep grid order. In the [`Perspective::Second`] view the liquid
/// fractions therefore run from 1 down to 0; they are still monotonic.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveView {
    pub component: String,
    pub liquid: Vec<f64>,
    pub vapor: Vec<Option<f64>>,
    pub temperatures_c: Vec<Option<f64>>,
    pub annotation: Annotation,
    pub display_bounds: DisplayBounds,
}

/// Ordered equilibrium points plus the metadata derived while building them.
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibriumCurve {
    pub first_name: String,
    pub second_name: String,
    pub pressure_mmhg: f64,
    /// Pure-component boiling points `(T1, T2)` [°C]
    pub boiling_points_c: (f64, f64),
    pub azeotrope: AzeotropePoint,
    pub kind: AzeotropeKind,
    pub params: VanLaarParameters,
    pub display_bounds: DisplayBounds,
    /// One point per grid composition, ascending `x1`
    pub points: Vec<EquilibriumPoint>,
}

impl EquilibriumCurve {
    pub fn liquid_x1(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x1()).collect()
    }

    /// Boiling temperatures; `None` for unresolved points.
    pub fn temperatures_c(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.temperature_c()).collect()
    }

    /// Vapor fractions of component 1; `None` for unresolved points.
    pub fn vapor_y1(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.y1()).collect()
    }

    pub fn num_converged(&self) -> usize {
        self.points.iter().filter(|p| p.is_converged()).count()
    }

    pub fn unresolved_indices(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_converged())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_fully_resolved(&self) -> bool {
        self.points.iter().all(|p| p.is_converged())
    }

    /// Fail with [`AppError::Unresolved`] if any grid point did not converge.
    pub fn ensure_resolved(&self) -> AppResult<()> {
        match self.unresolved_indices().len() {
            0 => Ok(()),
            count => Err(AppError::Unresolved { count }),
        }
    }

    /// Grid point whose `x1` is closest to `x1`.
    pub fn point_nearest(&self, x1: f64) -> Option<&EquilibriumPoint> {
        self.points
            .iter()
            .min_by(|a, b| (a.x1() - x1).abs().total_cmp(&(b.x1() - x1).abs()))
    }

    /// Label placement for the given diagram.
    pub fn annotation(&self, perspective: Perspective) -> Annotation {
        let x = match perspective {
            Perspective::First => self.azeotrope.x1(),
            Perspective::Second => self.azeotrope.x2(),
        };
        Annotation {
            x,
            temperature_c: self.azeotrope.temperature_c,
            label_temperature_c: self.azeotrope.temperature_c + self.kind.annotation_offset_c(),
        }
    }

    /// The curve seen from one component's mole fraction.
    pub fn view(&self, perspective: Perspective) -> CurveView {
        let (component, liquid, vapor) = match perspective {
            Perspective::First => (self.first_name.clone(), self.liquid_x1(), self.vapor_y1()),
            Perspective::Second => (
                self.second_name.clone(),
                self.points.iter().map(|p| p.x2()).collect(),
                self.points.iter().map(|p| p.y2()).collect(),
            ),
        };
        CurveView {
            component,
            liquid,
            vapor,
            temperatures_c: self.temperatures_c(),
            annotation: self.annotation(perspective),
            display_bounds: self.display_bounds,
        }
    }

    /// Shorthand for `view(Perspective::Second)`: `x2`, `y2 = 1 - y1` and the
    /// label at the azeotrope's `x2`.
    pub fn second_component_view(&self) -> CurveView {
        self.view(Perspective::Second)
    }
}

/// Builds the equilibrium curve of one binary system.
///
/// Construction does all the one-off work (boiling points, Van Laar fit,
/// bracket and display bounds) and fails on invalid input or a singular
/// activity model. [`CurveBuilder::build`] then only runs the sweep.
#[derive(Debug, Clone)]
pub struct CurveBuilder {
    system: BinarySystem,
    config: CurveConfig,
    grid: CompositionGrid,
    kind: AzeotropeKind,
    display_bounds: DisplayBounds,
    solver: EquilibriumSolver,
}

impl CurveBuilder {
    pub fn new(system: BinarySystem, config: CurveConfig) -> AppResult<Self> {
        let p = config.pressure_mmhg;
        if !(p.is_finite() && p > 0.0) {
            return Err(AppError::InvalidInput(format!(
                "operating pressure must be positive (got {p})"
            )));
        }
        config.bisection.validate()?;
        let grid = CompositionGrid::new(config.grid_points)?;

        let t1 = system.first.boiling_point(p)?;
        let t2 = system.second.boiling_point(p)?;
        for (component, t) in [(&system.first, t1), (&system.second, t2)] {
            if t <= 0.0 {
                return Err(AppError::InvalidInput(format!(
                    "{} boils at {t:.2} °C; boiling points must be above 0 °C",
                    component.name
                )));
            }
        }

        let az = system.azeotrope;
        let kind = az.kind(t1, t2);
        let params = VanLaarParameters::from_azeotrope(
            &az,
            &system.first.antoine,
            &system.second.antoine,
            p,
        )?;
        let upper_bound_c = compute_upper_bound(az.temperature_c, t1, t2, kind.is_minimum_boiling());
        let solver = EquilibriumSolver::new(
            system.first.antoine,
            system.second.antoine,
            params,
            p,
            (t1, t2),
            upper_bound_c,
            config.bisection,
        )?;
        let display_bounds = DisplayBounds::for_azeotrope(az.temperature_c, t1, t2, kind);

        info!(
            system = %system.label(),
            t1_c = t1,
            t2_c = t2,
            %kind,
            van_laar = %params,
            upper_bound_c,
            "curve model prepared"
        );

        Ok(Self {
            system,
            config,
            grid,
            kind,
            display_bounds,
            solver,
        })
    }

    pub fn system(&self) -> &BinarySystem {
        &self.system
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    pub fn grid(&self) -> CompositionGrid {
        self.grid
    }

    pub fn kind(&self) -> AzeotropeKind {
        self.kind
    }

    pub fn params(&self) -> &VanLaarParameters {
        self.solver.params()
    }

    pub fn boiling_points_c(&self) -> (f64, f64) {
        self.solver.boiling_points_c()
    }

    pub fn upper_bound_c(&self) -> f64 {
        self.solver.upper_bound_c()
    }

    pub fn display_bounds(&self) -> DisplayBounds {
        self.display_bounds
    }

    pub fn solver(&self) -> &EquilibriumSolver {
        &self.solver
    }

    /// Solve every grid point and assemble the curve in grid order.
    ///
    /// Points that exhaust the iteration cap are kept as unresolved; they do
    /// not abort the sweep.
    pub fn build(&self) -> AppResult<EquilibriumCurve> {
        let compositions = self.grid.compositions()?;

        let points: SolverResult<Vec<EquilibriumPoint>> = if self.config.parallel {
            compositions
                .par_iter()
                .map(|comp| self.solver.solve(*comp))
                .collect()
        } else {
            compositions
                .iter()
                .map(|comp| self.solver.solve(*comp))
                .collect()
        };
        let points = points?;

        let curve = EquilibriumCurve {
            first_name: self.system.first.name.clone(),
            second_name: self.system.second.name.clone(),
            pressure_mmhg: self.config.pressure_mmhg,
            boiling_points_c: self.solver.boiling_points_c(),
            azeotrope: self.system.azeotrope,
            kind: self.kind,
            params: *self.solver.params(),
            display_bounds: self.display_bounds,
            points,
        };

        let unresolved = curve.points.len() - curve.num_converged();
        if unresolved > 0 {
            warn!(
                unresolved,
                total = curve.points.len(),
                "equilibrium curve has unresolved points"
            );
        }
        info!(
            points = curve.points.len(),
            converged = curve.num_converged(),
            "equilibrium curve built"
        );

        Ok(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_bounds_minimum_boiling() {
        let b = DisplayBounds::for_azeotrope(72.8, 77.06, 80.74, AzeotropeKind::MinimumBoiling);
        assert!((b.lower_c - 71.8).abs() < 1e-9);
        assert!((b.upper_c - 83.24).abs() < 1e-9);
    }

    #[test]
    fn display_bounds_maximum_boiling() {
        let b = DisplayBounds::for_azeotrope(110.0, 100.0, 64.7, AzeotropeKind::MaximumBoiling);
        assert!((b.lower_c - 63.7).abs() < 1e-9);
        assert!((b.upper_c - 112.5).abs() < 1e-9);
    }

    #[test]
    fn display_bounds_intermediate_covers_both_pure_points() {
        let b = DisplayBounds::for_azeotrope(79.0, 77.06, 80.74, AzeotropeKind::Intermediate);
        assert!(b.contains(77.06) && b.contains(80.74) && b.contains(79.0));
    }

    #[test]
    fn default_config() {
        let config = CurveConfig::default();
        assert_eq!(config.pressure_mmhg, 760.0);
        assert_eq!(config.grid_points, 101);
        assert_eq!(config.bisection.tolerance, 1e-3);
        assert_eq!(config.bisection.max_iterations, 1000);
        assert!(!config.parallel);
    }
}
