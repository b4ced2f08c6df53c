// af-core/src/units.rs
//
// Antoine constants in this workspace are tabulated for mmHg and °C, so those
// are the canonical units of every raw `f64` crossing a crate boundary. The uom
// types are used wherever a value enters or leaves in some other unit.

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn mmhg(v: f64) -> Pressure {
    use uom::si::pressure::millimeter_of_mercury;
    Pressure::new::<millimeter_of_mercury>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Pressure expressed in mmHg.
#[inline]
pub fn to_mmhg(p: Pressure) -> f64 {
    use uom::si::pressure::millimeter_of_mercury;
    p.get::<millimeter_of_mercury>()
}

/// Temperature expressed in °C.
#[inline]
pub fn to_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

pub mod constants {
    /// One standard atmosphere, the operating pressure when none is given.
    pub const STANDARD_PRESSURE_MMHG: f64 = 760.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn standard_pressure_is_one_atmosphere() {
        let p = mmhg(constants::STANDARD_PRESSURE_MMHG);
        let tol = Tolerances {
            abs: 0.0,
            rel: 1e-6,
        };
        assert!(nearly_equal(p.value, 101_325.0, tol));
    }

    #[test]
    fn celsius_roundtrip() {
        let t = celsius(72.8);
        assert!((t.value - 345.95).abs() < 1e-9);
        assert!((to_celsius(t) - 72.8).abs() < 1e-9);
        assert!((to_celsius(k(273.15))).abs() < 1e-9);
    }

    #[test]
    fn mmhg_roundtrip() {
        assert!((to_mmhg(mmhg(760.0)) - 760.0).abs() < 1e-9);
        use uom::si::pressure::pascal;
        assert!((to_mmhg(Pressure::new::<pascal>(101_325.0)) - 760.0).abs() < 1e-3);
    }
}
