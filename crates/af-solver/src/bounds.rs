//! Upper temperature limit of the bisection bracket.

/// Heuristic upper bound [°C] for the boiling-temperature search.
///
/// - minimum-boiling azeotrope, component 1 boils higher: `1.5 · T1`
/// - minimum-boiling azeotrope, otherwise: `1.5 · T2`
/// - any other azeotrope: `1.5 · T_az`
///
/// Every boiling temperature of the mixture lies below the returned value for
/// the mixtures the model is meant for; the lower end of the bracket is 0 °C.
pub fn compute_upper_bound(t_az_c: f64, t1_c: f64, t2_c: f64, is_min_boiling: bool) -> f64 {
    if is_min_boiling {
        if t1_c > t2_c { 1.5 * t1_c } else { 1.5 * t2_c }
    } else {
        1.5 * t_az_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_boiling_uses_higher_pure_point() {
        assert_eq!(compute_upper_bound(72.8, 77.0, 80.0, true), 120.0);
        assert_eq!(compute_upper_bound(72.8, 80.0, 77.0, true), 120.0);
    }

    #[test]
    fn other_azeotropes_use_azeotrope_temperature() {
        assert_eq!(compute_upper_bound(110.0, 100.0, 64.0, false), 165.0);
        assert_eq!(compute_upper_bound(78.0, 77.0, 80.0, false), 117.0);
    }

    #[test]
    fn bound_exceeds_every_input_for_minimum_boiling() {
        let ub = compute_upper_bound(65.2, 68.74, 77.06, true);
        assert!(ub > 77.06 && ub > 68.74 && ub > 65.2);
    }
}
