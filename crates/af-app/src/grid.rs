//! Liquid composition grid for the equilibrium sweep.

use crate::error::{AppError, AppResult};
use af_core::numeric::linspace;
use af_thermo::BinaryComposition;
use std::fmt;

/// Evenly spaced `x1` samples over `[0, 1]`, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionGrid {
    num_points: usize,
}

impl CompositionGrid {
    /// 101 points, i.e. a 0.01 step in `x1`.
    pub const DEFAULT_POINTS: usize = 101;

    pub fn new(num_points: usize) -> AppResult<Self> {
        if num_points < 2 {
            return Err(AppError::InvalidInput(format!(
                "composition grid needs at least 2 points (got {num_points})"
            )));
        }
        Ok(Self { num_points })
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn step(&self) -> f64 {
        1.0 / (self.num_points - 1) as f64
    }

    /// Compositions in ascending `x1`; the first is pure component 2 and the
    /// last pure component 1.
    pub fn compositions(&self) -> AppResult<Vec<BinaryComposition>> {
        linspace(0.0, 1.0, self.num_points)
            .into_iter()
            .map(|x1| BinaryComposition::from_x1(x1).map_err(AppError::from))
            .collect()
    }
}

impl Default for CompositionGrid {
    fn default() -> Self {
        Self {
            num_points: Self::DEFAULT_POINTS,
        }
    }
}

impl fmt::Display for CompositionGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x1 from 0 to 1 ({} points, step {})",
            self.num_points,
            self.step()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_matches_hundredths() {
        let grid = CompositionGrid::default();
        let comps = grid.compositions().unwrap();
        assert_eq!(comps.len(), 101);
        assert!(comps[0].is_pure_second());
        assert!(comps[100].is_pure_first());
        assert!((comps[53].x1() - 0.53).abs() < 1e-15);
        assert!((grid.step() - 0.01).abs() < 1e-15);
    }

    #[test]
    fn fractions_complementary_across_grid() {
        for comp in CompositionGrid::default().compositions().unwrap() {
            assert_eq!(comp.x2(), 1.0 - comp.x1());
        }
    }

    #[test]
    fn reject_tiny_grid() {
        assert!(CompositionGrid::new(1).is_err());
        assert!(CompositionGrid::new(2).is_ok());
    }

    #[test]
    fn display_mentions_point_count() {
        let text = CompositionGrid::new(11).unwrap().to_string();
        assert!(text.contains("11 points"));
    }
}
