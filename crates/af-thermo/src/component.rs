//! Named pure components.

use crate::antoine::AntoineConstants;
use crate::catalog;
use crate::error::{ThermoError, ThermoResult};
use serde::Serialize;
use std::fmt;

/// A pure component: a display name and its Antoine constants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: String,
    pub antoine: AntoineConstants,
}

impl Component {
    pub fn new(name: impl Into<String>, antoine: AntoineConstants) -> ThermoResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ThermoError::invalid("component name must not be empty"));
        }
        Ok(Self { name, antoine })
    }

    /// Build from a catalog entry found by id, display name or alias.
    pub fn from_catalog(query: &str) -> ThermoResult<Self> {
        let entry = catalog::lookup(query).ok_or_else(|| {
            ThermoError::invalid(format!("unknown component '{}'", query.trim()))
        })?;
        Ok(Self {
            name: entry.display_name.to_string(),
            antoine: entry.antoine,
        })
    }

    /// Boiling temperature [°C] at `p_mmhg`.
    pub fn boiling_point(&self, p_mmhg: f64) -> ThermoResult<f64> {
        self.antoine.boiling_temperature(p_mmhg).map_err(|err| match err {
            ThermoError::InvalidInput { what } => ThermoError::InvalidInput {
                what: format!("{}: {what}", self.name),
            },
            other => other,
        })
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.antoine)
    }
}
