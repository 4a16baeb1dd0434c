use log::{debug, trace};

use crate::collision::{Collision, PlacedCollider, ResultingBehavior};
use crate::error::{GeometryError, PhysicsError};
use crate::math::Vec2;
use crate::objects::Body;
use crate::shapes::Line;

/// What the integrator made of a detected collision.
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionResponse {
    /// Several vertices hit, or the single hit vertex belongs to the other body.
    Unhandled,
    /// Candidate sides were found, but no velocity change is applied yet.
    Unresolved(ResponseCandidates),
}

/// Geometry gathered for a single own-vertex hit.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCandidates {
    /// World position of the hit vertex.
    pub hit_point: Vec2,
    pub velocity: Vec2,
    /// Spin velocity at the hit point.
    pub circular_velocity: Vec2,
    pub behavior: ResultingBehavior,
    /// Sides of the other collider crossed by a ray along `velocity`.
    pub velocity_sides: Vec<usize>,
    /// Sides of the other collider crossed by a ray along `circular_velocity`.
    pub circular_sides: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollisionReport {
    pub collision: Collision,
    pub response: CollisionResponse,
}

/// Integrates the body's state forward in time using Semi-Implicit Euler.
///
/// Velocity is updated first and the position uses the new velocity. Force
/// and torque are left untouched.
pub fn integrate(body: &mut Body, dt: f64) {
    // --- Linear Motion --- //
    let acceleration = body.force.magnitude() / body.mass();
    body.velocity += body.force.with_length(acceleration * dt);
    body.location += body.velocity * dt;

    // --- Angular Motion --- //
    let angular_acceleration = body.torque / body.moment_of_inertia();
    body.angular_velocity += angular_acceleration * dt;
    body.rotate(body.angular_velocity * dt);
}

/// Advances `body` by `dt` seconds, then checks each of its colliders against
/// every external collider. Colliders owned by `body` itself are skipped.
pub fn advance(
    body: &mut Body,
    dt: f64,
    external: &[PlacedCollider],
) -> Result<Vec<CollisionReport>, PhysicsError> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(PhysicsError::InvalidDeltaTime(dt));
    }
    if body.active_collider().is_none() {
        return Err(PhysicsError::NoActiveCollider);
    }

    integrate(body, dt);

    let own = body.placed_colliders();
    let mut reports = Vec::new();
    for other in external.iter().filter(|c| c.key().body != body.id()) {
        for mine in &own {
            let Some(collision) = mine.check(other)? else {
                continue;
            };
            let response = respond(body, &collision, mine, other)?;
            debug!(
                "{:?} hit {:?} ({} vertices, {:?})",
                collision.base(),
                collision.compared(),
                collision.hit_count(),
                collision.behavior()
            );
            reports.push(CollisionReport { collision, response });
        }
    }
    Ok(reports)
}

/// Gathers response candidates for a collision where exactly one vertex of
/// `own` went inside `other`.
pub fn respond(
    body: &Body,
    collision: &Collision,
    own: &PlacedCollider,
    other: &PlacedCollider,
) -> Result<CollisionResponse, PhysicsError> {
    let hit_index = match collision.base_hits() {
        [index] if collision.hit_count() == 1 => *index,
        _ => return Ok(CollisionResponse::Unhandled),
    };

    let hit_point = own.outline().total_position(hit_index)?;
    let velocity = body.velocity;
    let circular_velocity = body.circular_velocity(hit_point - body.mass_emphasis()?);

    let velocity_sides = cast_along(other, hit_point, velocity)?;
    let circular_sides = cast_along(other, hit_point, circular_velocity)?;
    trace!("hit at {hit_point}: velocity sides {velocity_sides:?}, circular sides {circular_sides:?}");

    Ok(CollisionResponse::Unresolved(ResponseCandidates {
        hit_point,
        velocity,
        circular_velocity,
        behavior: collision.behavior(),
        velocity_sides,
        circular_sides,
    }))
}

fn cast_along(
    other: &PlacedCollider,
    origin: Vec2,
    direction: Vec2,
) -> Result<Vec<usize>, GeometryError> {
    if direction.is_null() {
        return Ok(Vec::new());
    }
    let ray = Line::from_base_and_direction(origin, direction)?;
    other.do_ray_cast(&ray)
}
