//! Thermodynamic model errors.

use af_core::CoreError;
use thiserror::Error;

/// Result type for thermodynamic operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors raised while validating inputs or building models.
///
/// Both variants are fatal to a whole curve: no point can be computed from an
/// invalid input or from an activity model that could not be fitted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Out-of-range or inconsistent input (constants, fractions, temperatures).
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    /// The activity model cannot be constructed from the given observation.
    #[error("Model singularity: {what}")]
    ModelSingularity { what: String },

    /// Non-finite value produced or received.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl ThermoError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        Self::InvalidInput { what: what.into() }
    }

    pub(crate) fn singular(what: impl Into<String>) -> Self {
        Self::ModelSingularity { what: what.into() }
    }
}

impl From<CoreError> for ThermoError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => ThermoError::NonFinite { what, value },
            CoreError::InvalidArg { what } => ThermoError::invalid(what),
            err @ CoreError::NotPositive { .. } => ThermoError::invalid(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ThermoError::invalid("x1 must lie in (0, 1)");
        assert!(err.to_string().contains("x1"));

        let err = ThermoError::singular("ln(gamma1) is zero");
        assert!(err.to_string().contains("singularity"));
    }

    #[test]
    fn core_error_conversion() {
        let err: ThermoError = CoreError::InvalidArg { what: "pressure" }.into();
        assert!(matches!(err, ThermoError::InvalidInput { .. }));

        let err: ThermoError = CoreError::NotPositive {
            what: "Antoine B",
            value: -1.0,
        }
        .into();
        assert_eq!(err, ThermoError::invalid("Antoine B must be positive (got -1)"));

        let err: ThermoError = CoreError::NonFinite {
            what: "t",
            value: f64::NAN,
        }
        .into();
        assert!(matches!(err, ThermoError::NonFinite { what: "t", .. }));
    }
}
