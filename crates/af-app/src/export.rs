//! CSV and JSON renderings of a computed curve.

use crate::curve::{Annotation, DisplayBounds, EquilibriumCurve, Perspective};
use crate::error::AppResult;
use af_solver::PointOutcome;
use af_thermo::{AzeotropeKind, VanLaarParameters};
use serde::Serialize;

/// Column header of [`to_csv`].
pub const CSV_HEADER: &str = "x1,x2,temperature_c,y1,y2,status";

/// One row of the exported table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointRecord {
    pub x1: f64,
    pub x2: f64,
    pub temperature_c: Option<f64>,
    pub y1: Option<f64>,
    pub y2: Option<f64>,
    pub status: PointStatus,
    pub iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointStatus {
    Converged,
    Unresolved,
}

impl PointStatus {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Converged => "converged",
            Self::Unresolved => "unresolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AzeotropeRecord {
    pub temperature_c: f64,
    pub x1: f64,
    pub x2: f64,
    pub kind: AzeotropeKind,
}

/// Self-describing JSON document for one curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveReport {
    pub first_component: String,
    pub second_component: String,
    pub pressure_mmhg: f64,
    pub boiling_point_first_c: f64,
    pub boiling_point_second_c: f64,
    pub azeotrope: AzeotropeRecord,
    pub van_laar: VanLaarParameters,
    pub display_bounds: DisplayBounds,
    pub annotation_first: Annotation,
    pub annotation_second: Annotation,
    pub converged_points: usize,
    pub unresolved_points: usize,
    pub points: Vec<PointRecord>,
}

impl CurveReport {
    pub fn from_curve(curve: &EquilibriumCurve) -> Self {
        let points: Vec<PointRecord> = curve
            .points
            .iter()
            .map(|p| {
                let (status, iterations) = match p.outcome {
                    PointOutcome::Converged { iterations, .. } => {
                        (PointStatus::Converged, iterations)
                    }
                    PointOutcome::Unresolved { iterations, .. } => {
                        (PointStatus::Unresolved, iterations)
                    }
                };
                PointRecord {
                    x1: p.x1(),
                    x2: p.x2(),
                    temperature_c: p.temperature_c(),
                    y1: p.y1(),
                    y2: p.y2(),
                    status,
                    iterations,
                }
            })
            .collect();
        let converged_points = curve.num_converged();

        Self {
            first_component: curve.first_name.clone(),
            second_component: curve.second_name.clone(),
            pressure_mmhg: curve.pressure_mmhg,
            boiling_point_first_c: curve.boiling_points_c.0,
            boiling_point_second_c: curve.boiling_points_c.1,
            azeotrope: AzeotropeRecord {
                temperature_c: curve.azeotrope.temperature_c,
                x1: curve.azeotrope.x1(),
                x2: curve.azeotrope.x2(),
                kind: curve.kind,
            },
            van_laar: curve.params,
            display_bounds: curve.display_bounds,
            annotation_first: curve.annotation(Perspective::First),
            annotation_second: curve.annotation(Perspective::Second),
            converged_points,
            unresolved_points: points.len() - converged_points,
            points,
        }
    }
}

/// Render the curve as CSV; unresolved points leave their numeric cells empty.
pub fn to_csv(curve: &EquilibriumCurve) -> String {
    let mut out = String::with_capacity(64 * (curve.points.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in CurveReport::from_curve(curve).points {
        out.push_str(&format!(
            "{:.4},{:.4},{},{},{},{}\n",
            record.x1,
            record.x2,
            cell(record.temperature_c, 6),
            cell(record.y1, 6),
            cell(record.y2, 6),
            record.status.as_str()
        ));
    }
    out
}

/// Pretty-printed [`CurveReport`].
pub fn to_json(curve: &EquilibriumCurve) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&CurveReport::from_curve(curve))?)
}

fn cell(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{v:.decimals$}"))
        .unwrap_or_default()
}
