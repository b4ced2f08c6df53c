//! Bubble-point solves across the composition range of the reference mixtures.

use af_solver::{BisectionConfig, EquilibriumSolver, PointOutcome, compute_upper_bound};
use af_thermo::{AzeotropePoint, BinaryComposition, Component, VanLaarParameters};

fn build_solver(first: &str, second: &str, t_az: f64, x1_az: f64) -> (EquilibriumSolver, f64) {
    let first = Component::from_catalog(first).unwrap();
    let second = Component::from_catalog(second).unwrap();
    let az = AzeotropePoint::new(t_az, x1_az, 1.0 - x1_az).unwrap();
    let t1 = first.boiling_point(760.0).unwrap();
    let t2 = second.boiling_point(760.0).unwrap();
    let params =
        VanLaarParameters::from_azeotrope(&az, &first.antoine, &second.antoine, 760.0).unwrap();
    let ub = compute_upper_bound(t_az, t1, t2, az.kind(t1, t2).is_minimum_boiling());
    let solver = EquilibriumSolver::new(
        first.antoine,
        second.antoine,
        params,
        760.0,
        (t1, t2),
        ub,
        BisectionConfig::default(),
    )
    .unwrap();
    (solver, t_az)
}

#[test]
fn minimum_boiling_mixtures_never_boil_below_azeotrope() {
    let cases = [
        ("ethyl acetate", "cyclohexane", 72.8, 0.531),
        ("hexane", "ethyl acetate", 65.2, 0.606),
        ("1-propanol", "cyclohexane", 74.7, 0.241),
    ];

    for (first, second, t_az, x1_az) in cases {
        let (solver, t_az) = build_solver(first, second, t_az, x1_az);
        let (t1, t2) = solver.boiling_points_c();

        for i in 1..100 {
            let comp = BinaryComposition::from_x1(i as f64 / 100.0).unwrap();
            let point = solver.solve(comp).unwrap();
            let t = point
                .temperature_c()
                .unwrap_or_else(|| panic!("{first}/{second} unresolved at x1 = {}", comp.x1()));
            let y1 = point.y1().unwrap();

            assert!(t <= t1.max(t2) + 1e-6, "{first}: T = {t} above pure points");
            // The Van Laar fit need not put the minimum exactly at the measured azeotrope
            assert!(t > t_az - 1.0, "{first}: T = {t} far below azeotrope");
            assert!((0.0..=1.0).contains(&y1));
        }
    }
}

#[test]
fn residual_at_solution_respects_tolerance() {
    let (solver, _) = build_solver("ethyl acetate", "cyclohexane", 72.8, 0.531);
    let eps = solver.config().tolerance;

    for i in 1..100 {
        let comp = BinaryComposition::from_x1(i as f64 / 100.0).unwrap();
        let point = solver.solve(comp).unwrap();
        match point.outcome {
            PointOutcome::Converged {
                temperature_c,
                residual_mmhg,
                ..
            } => {
                assert!(residual_mmhg.abs() < eps);
                assert!(solver.residual(temperature_c, &comp).unwrap().abs() < eps);
            }
            PointOutcome::Unresolved { .. } => panic!("x1 = {} unresolved", comp.x1()),
        }
    }
}

#[test]
fn vapor_is_richer_in_lighter_component_left_of_azeotrope() {
    let (solver, _) = build_solver("ethyl acetate", "cyclohexane", 72.8, 0.531);
    // Below the azeotrope composition ethyl acetate is enriched in the vapor
    let point = solver.solve(BinaryComposition::from_x1(0.2).unwrap()).unwrap();
    assert!(point.y1().unwrap() > 0.2);
    // Above it, cyclohexane is
    let point = solver.solve(BinaryComposition::from_x1(0.8).unwrap()).unwrap();
    assert!(point.y1().unwrap() < 0.8);
}
