use serde::{Deserialize, Serialize};

use crate::collision::{Collider, ColliderKey, PlacedCollider};
use crate::config::{PhysicsConfig, DEFAULT_MASS, DEFAULT_MOMENT_OF_INERTIA};
use crate::error::PhysicsError;
use crate::math::{normalize_angle, Tolerant, Transform, Vec2, FULL_RADIAN, QUARTER_RADIAN};

/// Handle of a body inside a [`crate::world::PhysicsWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BodyId(pub usize);

/// A simulated object: colliders plus translational and rotational state.
///
/// Rotation is counted in radians and kept within `[0, 2π)`. Force and torque
/// accumulate until cleared explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: BodyId,
    pub name: Option<String>,

    colliders: Vec<Collider>,
    main_collider: Option<usize>,

    /// World position of the body's center.
    pub location: Vec2,
    rotation: f64,
    pub velocity: Vec2,
    /// Radians per second.
    pub angular_velocity: f64,

    pub force: Vec2,
    pub torque: f64,

    mass: f64,
    moment_of_inertia: f64,

    /// Fixed bodies are not meant to move on collisions.
    pub is_fixed: bool,
    can_collide: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

impl Body {
    /// A body at the origin with unit mass and moment of inertia.
    pub fn new() -> Self {
        Self {
            id: BodyId::default(),
            name: None,
            colliders: Vec::new(),
            main_collider: None,
            location: Vec2::ZERO,
            rotation: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            force: Vec2::ZERO,
            torque: 0.0,
            mass: DEFAULT_MASS,
            moment_of_inertia: DEFAULT_MOMENT_OF_INERTIA,
            is_fixed: true,
            can_collide: false,
        }
    }

    /// A body using the config's default mass and moment of inertia.
    pub fn from_config(config: &PhysicsConfig) -> Result<Self, PhysicsError> {
        let mut body = Self::new();
        body.set_mass(config.default_mass)?;
        body.set_moment_of_inertia(config.default_moment_of_inertia)?;
        Ok(body)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn at(mut self, location: Vec2) -> Self {
        self.location = location;
        self
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: BodyId) {
        self.id = id;
    }

    /// Attaches a collider; `main` makes it the active collider.
    pub fn add_collider(&mut self, collider: Collider, main: bool) {
        self.colliders.push(collider);
        self.can_collide = true;
        if main {
            self.main_collider = Some(self.colliders.len() - 1);
        }
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    pub fn active_collider(&self) -> Option<&Collider> {
        self.main_collider.and_then(|i| self.colliders.get(i))
    }

    pub fn can_collide(&self) -> bool {
        self.can_collide
    }

    /// World position of the center of mass, taken from the active collider.
    pub fn mass_emphasis(&self) -> Result<Vec2, PhysicsError> {
        let collider = self.active_collider().ok_or(PhysicsError::NoActiveCollider)?;
        Ok(self.location + collider.mass_emphasis_from_center())
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = normalize_angle(rotation);
    }

    pub fn rotate(&mut self, delta: f64) {
        self.set_rotation(self.rotation + delta);
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.location, self.rotation)
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<(), PhysicsError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        self.mass = mass;
        Ok(())
    }

    pub fn moment_of_inertia(&self) -> f64 {
        self.moment_of_inertia
    }

    pub fn set_moment_of_inertia(&mut self, moment: f64) -> Result<(), PhysicsError> {
        if !(moment.is_finite() && moment > 0.0) {
            return Err(PhysicsError::InvalidMomentOfInertia(moment));
        }
        self.moment_of_inertia = moment;
        Ok(())
    }

    /// Turns per second.
    pub fn circular_frequency(&self) -> f64 {
        self.angular_velocity / FULL_RADIAN
    }

    /// Applies force to the mass emphasis.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Applies `force` at `offset` from the mass emphasis.
    ///
    /// The part of the force along the offset moves the body; the perpendicular
    /// part becomes torque of `|perpendicular| · |offset|`. The torque is
    /// negative when the perpendicular part points where the offset turned a
    /// quarter counter-clockwise points.
    pub fn apply_force_at(&mut self, force: Vec2, offset: Vec2) -> Result<(), PhysicsError> {
        if force.is_null() {
            return Ok(());
        }
        if offset.is_null() || force.is_parallel(offset) {
            self.apply_force(force);
            return Ok(());
        }

        let along = force.component_at_angle(force.angle_to(offset))?;
        let perpendicular = force - along;
        self.apply_force(along);

        let mut torque = perpendicular.magnitude() * offset.magnitude();
        if Tolerant(offset.rotate(QUARTER_RADIAN).cos_angle(perpendicular)).approx_eq(1.0) {
            torque = -torque;
        }
        self.torque += torque;
        Ok(())
    }

    pub fn add_velocity(&mut self, velocity: Vec2) {
        self.velocity += velocity;
    }

    pub fn add_angular_velocity(&mut self, angular_velocity: f64) {
        self.angular_velocity += angular_velocity;
    }

    pub fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }

    pub fn clear_torque(&mut self) {
        self.torque = 0.0;
    }

    pub fn clear_velocity(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    pub fn clear_angular_velocity(&mut self) {
        self.angular_velocity = 0.0;
    }

    pub fn clear_all(&mut self) {
        self.clear_angular_velocity();
        self.clear_force();
        self.clear_torque();
        self.clear_velocity();
    }

    /// Tangential velocity of a point at `offset` from the mass emphasis caused
    /// by the body's spin.
    pub fn circular_velocity(&self, offset: Vec2) -> Vec2 {
        if Tolerant(self.angular_velocity).is_zero() || offset.is_null() {
            return Vec2::ZERO;
        }

        let result = Vec2::UP.with_length(self.angular_velocity * offset.magnitude());
        let distance_to_radius = result.cos_angle(offset).clamp(-1.0, 1.0).acos();
        let radius_angle = self.rotation + distance_to_radius;
        let result = result.rotate(radius_angle + QUARTER_RADIAN);

        // empirical direction correction: flip when the result points a
        // quarter turn clockwise of the turned offset
        if Tolerant(offset.rotate(radius_angle).angle_to(result)).approx_eq(3.0 * QUARTER_RADIAN) {
            result.reverse()
        } else {
            result
        }
    }

    /// Every collider frozen at the body's current placement.
    pub fn placed_colliders(&self) -> Vec<PlacedCollider> {
        let owner = self.transform();
        self.colliders
            .iter()
            .enumerate()
            .map(|(index, collider)| {
                PlacedCollider::new(
                    ColliderKey { body: self.id, index },
                    collider.clone(),
                    owner,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Material;
    use crate::shapes::Outline;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-9;

    fn unit_collider(mass_emphasis: Vec2) -> Collider {
        let outline = Outline::from_edges([
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.0, -1.0),
        ]);
        Collider::new(outline, Vec2::new(-0.5, -0.5), mass_emphasis, Material::default())
    }

    #[test]
    fn test_body_new_defaults() {
        let body = Body::new();
        assert_eq!(body.mass(), 1.0);
        assert_eq!(body.moment_of_inertia(), 1.0);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.force, Vec2::ZERO);
        assert_eq!(body.rotation(), 0.0);
        assert!(body.is_fixed);
        assert!(!body.can_collide());
        assert!(body.active_collider().is_none());
    }

    #[test]
    fn test_from_config() {
        let config = PhysicsConfig {
            default_mass: 3.0,
            ..PhysicsConfig::default()
        };
        let body = Body::from_config(&config).unwrap();
        assert_eq!(body.mass(), 3.0);
    }

    #[test]
    fn test_add_collider_sets_main_and_can_collide() {
        let mut body = Body::new().at(Vec2::new(2.0, 3.0));
        body.add_collider(unit_collider(Vec2::ZERO), false);
        assert!(body.can_collide());
        assert!(body.active_collider().is_none());
        assert_eq!(body.mass_emphasis(), Err(PhysicsError::NoActiveCollider));

        body.add_collider(unit_collider(Vec2::new(0.25, 0.0)), true);
        assert_eq!(body.colliders().len(), 2);
        assert_eq!(body.mass_emphasis().unwrap(), Vec2::new(2.25, 3.0));
    }

    #[test]
    fn test_mass_and_inertia_are_validated() {
        let mut body = Body::new();
        assert_eq!(body.set_mass(0.0), Err(PhysicsError::InvalidMass(0.0)));
        assert!(body.set_mass(f64::INFINITY).is_err());
        assert!(body.set_moment_of_inertia(-1.0).is_err());
        assert_eq!(body.mass(), 1.0);
        body.set_mass(2.5).unwrap();
        assert_eq!(body.mass(), 2.5);
    }

    #[test]
    fn test_rotation_is_normalized() {
        let mut body = Body::new();
        body.set_rotation(-PI / 2.0);
        assert!((body.rotation() - 1.5 * PI).abs() < EPSILON);
        body.rotate(PI);
        assert!((body.rotation() - 0.5 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_apply_force_accumulates() {
        let mut body = Body::new();
        body.apply_force(Vec2::new(1.0, 2.0));
        body.apply_force(Vec2::new(0.5, -1.0));
        assert_eq!(body.force, Vec2::new(1.5, 1.0));
        body.clear_force();
        assert_eq!(body.force, Vec2::ZERO);
    }

    #[test]
    fn test_apply_force_at_along_offset_has_no_torque() {
        let mut body = Body::new();
        body.apply_force_at(Vec2::new(3.0, 0.0), Vec2::new(-2.0, 0.0)).unwrap();
        assert_eq!(body.force, Vec2::new(3.0, 0.0));
        assert_eq!(body.torque, 0.0);

        body.apply_force_at(Vec2::new(0.0, 1.0), Vec2::ZERO).unwrap();
        assert_eq!(body.force, Vec2::new(3.0, 1.0));
        assert_eq!(body.torque, 0.0);
    }

    #[test]
    fn test_apply_force_at_perpendicular_is_pure_torque() {
        let mut body = Body::new();
        body.apply_force_at(Vec2::new(0.0, 2.0), Vec2::new(3.0, 0.0)).unwrap();
        assert!(body.force.is_null());
        assert!((body.torque + 6.0).abs() < EPSILON);

        let mut body = Body::new();
        body.apply_force_at(Vec2::new(0.0, -2.0), Vec2::new(3.0, 0.0)).unwrap();
        assert!((body.torque - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_apply_force_at_diagonal_splits_force() {
        let mut body = Body::new();
        body.apply_force_at(Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0)).unwrap();
        assert!((body.force.x - 1.0).abs() < EPSILON);
        assert!(body.force.y.abs() < EPSILON);
        assert!((body.torque + 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_circular_velocity() {
        let mut body = Body::new();
        assert_eq!(body.circular_velocity(Vec2::new(1.0, 0.0)), Vec2::ZERO);

        body.angular_velocity = 2.0;
        assert_eq!(body.circular_velocity(Vec2::ZERO), Vec2::ZERO);
        assert!(body.circular_velocity(Vec2::new(0.0, 3.0)).approx_eq(Vec2::new(-6.0, 0.0)));
        assert!(body.circular_velocity(Vec2::new(0.0, -3.0)).approx_eq(Vec2::new(-6.0, 0.0)));
        assert!(body.circular_velocity(Vec2::new(3.0, 0.0)).approx_eq(Vec2::new(0.0, -6.0)));
        assert!(body.circular_velocity(Vec2::new(-3.0, 0.0)).approx_eq(Vec2::new(0.0, -6.0)));
    }

    #[test]
    fn test_circular_velocity_negative_spin() {
        let mut body = Body::new();
        body.angular_velocity = -2.0;
        assert!(body.circular_velocity(Vec2::new(0.0, 3.0)).approx_eq(Vec2::new(6.0, 0.0)));

        body.angular_velocity = -0.5;
        let v = body.circular_velocity(Vec2::new(0.0, 4.0));
        assert!((v.magnitude() - 2.0).abs() < EPSILON);
        assert!((body.circular_frequency() + 0.5 / FULL_RADIAN).abs() < EPSILON);
    }

    #[test]
    fn test_circular_velocity_rotated_body() {
        let mut body = Body::new();
        body.set_rotation(QUARTER_RADIAN);
        body.angular_velocity = 2.0;
        assert!(body.circular_velocity(Vec2::new(0.0, 3.0)).approx_eq(Vec2::new(0.0, -6.0)));
    }

    #[test]
    fn test_clear_all() {
        let mut body = Body::new();
        body.apply_force(Vec2::new(1.0, 0.0));
        body.torque = 2.0;
        body.add_velocity(Vec2::new(0.0, 1.0));
        body.add_angular_velocity(0.3);
        body.clear_all();
        assert_eq!(body.force, Vec2::ZERO);
        assert_eq!(body.torque, 0.0);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.angular_velocity, 0.0);
    }

    #[test]
    fn test_placed_colliders_use_current_transform() {
        let mut body = Body::new().at(Vec2::new(10.0, 0.0));
        body.add_collider(unit_collider(Vec2::ZERO), true);
        let placed = body.placed_colliders();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].key(), ColliderKey { body: body.id(), index: 0 });
        assert_eq!(placed[0].outline().start(), Vec2::new(9.5, -0.5));
        assert!(placed[0].is_inside(Vec2::new(10.0, 0.0)).unwrap());
    }
}
