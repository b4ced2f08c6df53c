//! Validated description of a binary mixture.

use af_thermo::{AzeotropePoint, Component};

/// Two components and one azeotrope observation.
///
/// Component order matters: "component 1" is the one whose mole fraction `x1`
/// runs along the composition axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BinarySystem {
    pub first: Component,
    pub second: Component,
    pub azeotrope: AzeotropePoint,
}

impl BinarySystem {
    pub fn new(first: Component, second: Component, azeotrope: AzeotropePoint) -> Self {
        Self {
            first,
            second,
            azeotrope,
        }
    }

    /// Short label such as `Ethyl Acetate - Cyclohexane`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.first.name, self.second.name)
    }
}
