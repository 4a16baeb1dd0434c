use proptest::prelude::*;
use route_physics::{
    solver::{Equation, EquationSegment, LinearEquationSystem},
    Collider, Material, Outline, Tolerant, Transform, Vec2,
};

fn coordinate() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

fn vector() -> impl Strategy<Value = Vec2> {
    (coordinate(), coordinate()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn square_collider(side: f64) -> Collider {
    let half = side / 2.0;
    let outline = Outline::from_edges([
        Vec2::new(side, 0.0),
        Vec2::new(0.0, side),
        Vec2::new(-side, 0.0),
        Vec2::new(0.0, -side),
    ]);
    Collider::new(outline, Vec2::new(-half, -half), Vec2::ZERO, Material::default())
}

proptest! {
    #[test]
    fn tolerant_equality_is_reflexive(v in -1.0e9..1.0e9f64) {
        prop_assert!(Tolerant(v).approx_eq(v));
    }

    #[test]
    fn tolerant_values_within_half_epsilon_are_equal(v in coordinate(), offset in -0.49..0.49f64) {
        let other = v + offset * Tolerant::EPSILON;
        prop_assert!(Tolerant(v).approx_eq(other));
        prop_assert!(!Tolerant(v).approx_ne(other));
    }

    #[test]
    fn vector_plus_reverse_is_null(v in vector()) {
        prop_assert!((v + v.reverse()).is_null());
    }

    #[test]
    fn unit_vector_has_magnitude_one(v in vector().prop_filter("non-null", |v| !v.is_null())) {
        prop_assert!(Tolerant(v.as_unit_vector().magnitude()).approx_eq(1.0));
    }

    #[test]
    fn rotate_round_trip(v in vector(), angle in -10.0..10.0f64) {
        prop_assert!(v.rotate(angle).rotate(-angle).approx_eq(v));
    }

    #[test]
    fn closed_route_stays_closed_and_returns_after_full_turn(
        edges in prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 2..8),
        angle in 0.0..std::f64::consts::TAU,
    ) {
        let mut route: Outline = edges.iter().map(|(x, y)| Vec2::new(*x, *y)).collect();
        route.append(route.sum().reverse());
        prop_assert!(route.is_closed());

        let turned = route.rotate(angle);
        prop_assert!(turned.is_closed());

        let back = turned.rotate(std::f64::consts::TAU - angle);
        for (a, b) in route.vertices().iter().zip(back.vertices()) {
            prop_assert!(a.approx_eq(b), "{} vs {}", a, b);
        }
    }

    #[test]
    fn solver_recovers_planted_solution(
        x in -100.0..100.0f64,
        y in -100.0..100.0f64,
        a in 1.0..10.0f64,
        b in -10.0..10.0f64,
        c in -10.0..10.0f64,
        d in 1.0..10.0f64,
    ) {
        prop_assume!((a * d - b * c).abs() > 1.0);
        let equation = |p: f64, q: f64| {
            Equation::new(
                vec![EquationSegment::unknown("x", p), EquationSegment::unknown("y", q)],
                vec![EquationSegment::constant(p * x + q * y)],
            )
        };
        let system = LinearEquationSystem::new(vec![equation(a, b), equation(c, d)]);
        let solution = system.solve_gaussian().unwrap();
        prop_assert!((solution["x"] - x).abs() < 1e-6);
        prop_assert!((solution["y"] - y).abs() < 1e-6);
    }

    #[test]
    fn points_inside_square_are_inside(x in -4.9..4.9f64, y in -4.9..4.9f64) {
        let collider = square_collider(10.0);
        prop_assert!(collider.is_inside(&Transform::identity(), Vec2::new(x, y)).unwrap());
    }

    #[test]
    fn points_beside_square_are_outside(x in 5.1..50.0f64, y in -4.9..4.9f64, left in any::<bool>()) {
        let collider = square_collider(10.0);
        let x = if left { -x } else { x };
        prop_assert!(!collider.is_inside(&Transform::identity(), Vec2::new(x, y)).unwrap());
    }

    #[test]
    fn points_near_center_are_inside_turned_square(
        rotation in 0.0..std::f64::consts::TAU,
        radius in 0.0..0.95f64,
        direction in 0.0..std::f64::consts::TAU,
    ) {
        // the inscribed circle of a side-2 square has radius 1 at any rotation
        let collider = square_collider(2.0);
        let owner = Transform::new(Vec2::ZERO, rotation);
        let point = Vec2::new(radius, 0.0).rotate(direction);
        prop_assert!(collider.is_inside(&owner, point).unwrap());
    }

    #[test]
    fn quarter_turned_square_contains_points_on_its_corner_axis(x in -1.3..1.3f64) {
        let collider = square_collider(2.0);
        let owner = Transform::new(Vec2::ZERO, std::f64::consts::FRAC_PI_4);
        prop_assert!(collider.is_inside(&owner, Vec2::new(x, 0.0)).unwrap());
    }
}
