//! Problem file format.
//!
//! A problem names two components (catalog ids or explicit Antoine
//! constants), one azeotrope observation, the operating pressure and optional
//! solver settings. Files are YAML unless the extension is `.json`.
//!
//! ```yaml
//! first: ethyl acetate
//! second: cyclohexane
//! azeotrope:
//!   temperature: 72.8 C
//!   x1: 0.531
//!   x2: 0.469
//! pressure: 1 atm
//! solver:
//!   tolerance: 0.001
//! ```

use crate::curve::{CurveBuilder, CurveConfig, EquilibriumCurve};
use crate::error::{AppError, AppResult};
use crate::system::BinarySystem;
use af_core::{Quantity, UnitValue};
use af_solver::BisectionConfig;
use af_thermo::{AntoineConstants, AzeotropePoint, Component};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDef {
    pub first: ComponentDef,
    pub second: ComponentDef,
    pub azeotrope: AzeotropeDef,
    #[serde(default = "default_pressure")]
    pub pressure: QuantityDef,
    #[serde(default)]
    pub solver: SolverDef,
}

/// A catalog name, or a name with explicit `[A, B, C]` Antoine constants
/// (mmHg, °C).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentDef {
    Catalog(String),
    Explicit { name: String, antoine: [f64; 3] },
}

/// A bare number in canonical units (°C, mmHg, mole fraction) or text with a
/// unit such as `"1 atm"` or `"53.1%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityDef {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AzeotropeDef {
    pub temperature: QuantityDef,
    pub x1: QuantityDef,
    pub x2: QuantityDef,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverDef {
    pub tolerance: f64,
    pub max_iterations: usize,
    pub grid_points: usize,
    pub parallel: bool,
}

impl Default for SolverDef {
    fn default() -> Self {
        let curve = CurveConfig::default();
        Self {
            tolerance: curve.bisection.tolerance,
            max_iterations: curve.bisection.max_iterations,
            grid_points: curve.grid_points,
            parallel: curve.parallel,
        }
    }
}

fn default_pressure() -> QuantityDef {
    QuantityDef::Text("760 mmHg".to_string())
}

impl QuantityDef {
    pub fn resolve(&self, quantity: Quantity) -> AppResult<f64> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => {
                let value = UnitValue::from_text(text.as_str(), quantity)?;
                debug!(%quantity, input = %value, "resolved unit text");
                Ok(value.value())
            }
        }
    }
}

impl From<f64> for QuantityDef {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl ComponentDef {
    pub fn resolve(&self) -> AppResult<Component> {
        match self {
            Self::Catalog(query) => Component::from_catalog(query)
                .map_err(|_| AppError::UnknownComponent(query.trim().to_string())),
            Self::Explicit { name, antoine } => {
                let [a, b, c] = *antoine;
                Ok(Component::new(name.as_str(), AntoineConstants::new(a, b, c)?)?)
            }
        }
    }
}

impl ProblemDef {
    pub fn from_yaml_str(text: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolve components and quantities into a validated system and config.
    pub fn into_parts(&self) -> AppResult<(BinarySystem, CurveConfig)> {
        let first = self.first.resolve()?;
        let second = self.second.resolve()?;

        let azeotrope = AzeotropePoint::new(
            self.azeotrope.temperature.resolve(Quantity::Temperature)?,
            self.azeotrope.x1.resolve(Quantity::Fraction)?,
            self.azeotrope.x2.resolve(Quantity::Fraction)?,
        )?;

        let config = CurveConfig {
            pressure_mmhg: self.pressure.resolve(Quantity::Pressure)?,
            grid_points: self.solver.grid_points,
            bisection: BisectionConfig {
                tolerance: self.solver.tolerance,
                max_iterations: self.solver.max_iterations,
            },
            parallel: self.solver.parallel,
        };

        Ok((BinarySystem::new(first, second, azeotrope), config))
    }

    /// Full validation: everything [`CurveBuilder::new`] checks, without
    /// running the sweep.
    pub fn prepare(&self) -> AppResult<CurveBuilder> {
        let (system, config) = self.into_parts()?;
        CurveBuilder::new(system, config)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a problem file; `.json` is parsed as JSON, anything else as YAML.
pub fn load_problem(path: &Path) -> AppResult<ProblemDef> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ProblemFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loading problem file");
    if is_json(path) {
        ProblemDef::from_json_str(&content)
    } else {
        ProblemDef::from_yaml_str(&content)
    }
}

pub fn save_problem(path: &Path, problem: &ProblemDef) -> AppResult<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(problem)?
    } else {
        serde_yaml::to_string(problem)?
    };
    std::fs::write(path, content).map_err(|source| AppError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

pub fn solve_problem(problem: &ProblemDef) -> AppResult<EquilibriumCurve> {
    problem.prepare()?.build()
}
