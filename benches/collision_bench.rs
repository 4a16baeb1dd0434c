use criterion::{black_box, criterion_group, criterion_main, Criterion};
use route_physics::{
    objects::{Body, BodyId},
    solver::{Equation, LinearEquationSystem},
    Collider, ColliderKey, Material, Outline, PhysicsWorld, PlacedCollider, Transform, Vec2,
};

// Regular polygon with `sides` corners around the body center
fn polygon_collider(sides: usize, radius: f64) -> Collider {
    let step = std::f64::consts::TAU / sides as f64;
    let corners: Vec<Vec2> = (0..sides)
        .map(|i| Vec2::new(radius, 0.0).rotate(step * i as f64))
        .collect();
    let edges: Vec<Vec2> = (0..sides)
        .map(|i| corners[(i + 1) % sides] - corners[i])
        .collect();
    Collider::new(
        Outline::from_edges(edges),
        corners[0],
        Vec2::ZERO,
        Material::default(),
    )
}

fn placed(body: usize, collider: Collider, position: Vec2) -> PlacedCollider {
    PlacedCollider::new(
        ColliderKey { body: BodyId(body), index: 0 },
        collider,
        Transform::new(position, 0.3),
    )
}

fn bench_solver(c: &mut Criterion) {
    let system: LinearEquationSystem = ["a + b + c = 6", "2b + 5c = -4", "2a + 5b - c = 27"]
        .iter()
        .filter_map(|s| s.parse::<Equation>().ok())
        .collect();
    c.bench_function("solve_gaussian_3x3", |b| {
        b.iter(|| black_box(&system).solve_gaussian())
    });
}

// Pairwise collider checks for growing vertex counts
fn bench_collider_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("collider_check");

    for sides in [4, 16, 64].iter() {
        let a = placed(0, polygon_collider(*sides, 2.0), Vec2::ZERO);
        let b = placed(1, polygon_collider(*sides, 2.0), Vec2::new(1.5, 0.5));
        group.bench_with_input(criterion::BenchmarkId::from_parameter(sides), sides, |bench, _| {
            bench.iter(|| black_box(&a).check(black_box(&b)));
        });
    }
    group.finish();
}

// A row of overlapping boxes advanced for a fixed number of ticks
fn bench_world_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_step");

    for count in [4, 16, 64].iter() {
        group.bench_with_input(criterion::BenchmarkId::from_parameter(count), count, |b, &n| {
            b.iter(|| {
                let mut world = PhysicsWorld::default();
                for i in 0..n {
                    let mut body = Body::new().at(Vec2::new(i as f64 * 1.5, 0.0));
                    body.add_collider(polygon_collider(4, 1.0), true);
                    body.velocity = Vec2::new(1.0, 0.0);
                    world.add_body(body);
                }
                let dt = 0.020;
                for _ in 0..10 {
                    let _ = world.step(black_box(dt));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solver, bench_collider_check, bench_world_step);
criterion_main!(benches);
