//! Unit-aware numeric input.
//!
//! Users type temperatures and pressures in whatever unit they have at hand
//! (`72.8 C`, `1 atm`, `101.325 kPa`). This module parses that text and converts
//! it to the canonical units of the numeric core:
//!
//! - **Temperature**: °C (bare numbers are taken as °C)
//! - **Pressure**: mmHg (bare numbers are taken as mmHg)
//! - **Fraction**: mole fraction in `[0, 1]`, percent notation accepted

use crate::units::{Pressure, Temperature, celsius, k, mmhg, to_celsius, to_mmhg};
use std::fmt;
use thiserror::Error;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: °C)
    Temperature,
    /// Absolute pressure (canonical: mmHg)
    Pressure,
    /// Mole fraction (canonical: 0-1)
    Fraction,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::Fraction => write!(f, "Mole Fraction"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    Parse(String),
    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },
    /// Unit not allowed for this quantity (plain "psi" could be gauge or absolute)
    #[error("Ambiguous unit '{unit}': {reason}")]
    AmbiguousUnit { unit: String, reason: String },
    /// Value out of physical range (e.g., below absolute zero)
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: String },
}

/// Stores a value with its original user input and canonical representation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitValue {
    /// Raw text as the user entered it (e.g., "1 atm", "72.8C")
    pub raw_text: String,
    /// Canonical value (°C, mmHg or fraction)
    pub canonical: f64,
    /// Associated quantity type
    pub quantity: Quantity,
}

impl UnitValue {
    /// Parse raw text and convert it to the canonical unit of `quantity`.
    pub fn from_text(raw_text: impl Into<String>, quantity: Quantity) -> Result<Self, UnitError> {
        let text = raw_text.into();
        let canonical = parse_quantity(&text, quantity)?;
        Ok(Self {
            raw_text: text,
            canonical,
            quantity,
        })
    }

    pub fn value(&self) -> f64 {
        self.canonical
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantity {
            Quantity::Temperature => write!(f, "{} ({:.2} °C)", self.raw_text, self.canonical),
            Quantity::Pressure => write!(f, "{} ({:.2} mmHg)", self.raw_text, self.canonical),
            Quantity::Fraction => write!(f, "{}", self.raw_text),
        }
    }
}

/// Parse a quantity value from user input text.
///
/// # Arguments
///
/// - `raw_text`: User input (e.g., "72.8 C", "1 atm", "53.1%")
/// - `quantity`: Dimension/quantity family for validation
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::Fraction => parse_fraction(trimmed),
    }
}

/// Parse temperature in various units, return °C.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    use uom::si::thermodynamic_temperature::{degree_fahrenheit, degree_rankine};

    let (value, unit) = split_value_and_unit(input)?;

    let t = match unit.to_lowercase().as_str() {
        "" | "c" | "°c" | "degc" | "celsius" => celsius(value),
        "k" | "kelvin" => k(value),
        "f" | "°f" | "degf" | "fahrenheit" => Temperature::new::<degree_fahrenheit>(value),
        "r" | "°r" | "degr" | "rankine" => Temperature::new::<degree_rankine>(value),
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Temperature,
            });
        }
    };

    // uom stores thermodynamic temperatures in kelvin
    if t.value <= 0.0 {
        return Err(UnitError::OutOfRange {
            value,
            reason: "Absolute temperature must be > 0 K".to_string(),
        });
    }

    Ok(to_celsius(t))
}

/// Parse absolute pressure in various units, return mmHg.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    use uom::si::pressure::{
        atmosphere, bar, kilopascal, megapascal, millibar, pascal,
        pound_force_per_square_inch, torr,
    };

    let (value, unit) = split_value_and_unit(input)?;

    let p = match unit.to_lowercase().as_str() {
        "" | "mmhg" => mmhg(value),
        "torr" => Pressure::new::<torr>(value),
        "pa" | "pascal" => Pressure::new::<pascal>(value),
        "kpa" => Pressure::new::<kilopascal>(value),
        "mpa" => Pressure::new::<megapascal>(value),
        "bar" => Pressure::new::<bar>(value),
        "mbar" | "millibar" => Pressure::new::<millibar>(value),
        "atm" => Pressure::new::<atmosphere>(value),
        "psia" => Pressure::new::<pound_force_per_square_inch>(value),
        // Explicitly reject ambiguous units
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit,
                reason: "Use 'psia'; gauge pressures are not accepted".to_string(),
            });
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Pressure,
            });
        }
    };

    if p.value <= 0.0 {
        return Err(UnitError::OutOfRange {
            value,
            reason: "Absolute pressure must be positive".to_string(),
        });
    }

    Ok(to_mmhg(p))
}

/// Parse a mole fraction (0-1), accepting percent notation.
fn parse_fraction(input: &str) -> Result<f64, UnitError> {
    let parse_err = || UnitError::Parse(format!("Could not parse fraction from '{}'", input));

    let fraction = match input.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().map_err(|_| parse_err())? / 100.0,
        None => input.parse::<f64>().map_err(|_| parse_err())?,
    };

    if !(0.0..=1.0).contains(&fraction) {
        return Err(UnitError::OutOfRange {
            value: fraction,
            reason: "Mole fraction must be between 0 and 1".to_string(),
        });
    }

    Ok(fraction)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "72.8C" -> (72.8, "C")
/// - "1 atm" -> (1.0, "atm")
/// - "760" -> (760.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Find where the numeric part ends
    let split_idx = trimmed
        .find(|c: char| {
            !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E'
        })
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);

    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::Parse(format!("Could not parse numeric value from '{}'", input))
    })?;

    if !value.is_finite() {
        return Err(UnitError::Parse(format!("Non-finite value in '{}'", input)));
    }

    Ok((value, unit_part.trim().to_string()))
}
