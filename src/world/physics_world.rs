use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::collision::{Collider, PlacedCollider};
use crate::common::Material;
use crate::config::PhysicsConfig;
use crate::error::{ConfigError, PhysicsError};
use crate::integration::{advance, CollisionReport};
use crate::math::Vec2;
use crate::objects::{Body, BodyId};
use crate::shapes::Outline;

/// Owns the bodies of a scene and advances them tick by tick.
#[derive(Debug, Clone, Default)]
pub struct PhysicsWorld {
    config: PhysicsConfig,
    bodies: Vec<Body>,
    // Store collision reports from the last step
    contacts: Vec<CollisionReport>,
}

impl PhysicsWorld {
    /// Creates a new, empty physics world.
    pub fn new(config: PhysicsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            bodies: Vec::new(),
            contacts: Vec::new(),
        })
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// A body carrying this world's default mass and moment of inertia.
    pub fn create_body(&self) -> Result<Body, PhysicsError> {
        Body::from_config(&self.config)
    }

    /// A collider padded by this world's bounding box padding.
    pub fn create_collider(
        &self,
        outline: Outline,
        center_to_outline: Vec2,
        mass_emphasis_from_center: Vec2,
        material: Material,
    ) -> Result<Collider, PhysicsError> {
        Collider::new(outline, center_to_outline, mass_emphasis_from_center, material)
            .with_padding(self.config.bounding_box_padding)
    }

    /// Adds a body to the world and returns its id.
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        body.set_id(id);
        self.bodies.push(body);
        id
    }

    pub fn body(&self, id: BodyId) -> Result<&Body, PhysicsError> {
        self.bodies.get(id.0).ok_or(PhysicsError::UnknownBody(id.0))
    }

    pub fn body_mut(&mut self, id: BodyId) -> Result<&mut Body, PhysicsError> {
        self.bodies.get_mut(id.0).ok_or(PhysicsError::UnknownBody(id.0))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Collision reports of the last step.
    pub fn contacts(&self) -> &[CollisionReport] {
        &self.contacts
    }

    /// Advances every body that has an active collider by `dt` seconds.
    ///
    /// All bodies are checked against colliders frozen at their placement from
    /// before the step, so the order bodies are advanced in does not matter.
    pub fn step(&mut self, dt: f64) -> Result<(), PhysicsError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(PhysicsError::InvalidDeltaTime(dt));
        }

        let snapshot: Vec<PlacedCollider> = self
            .bodies
            .iter()
            .filter(|b| b.can_collide())
            .flat_map(Body::placed_colliders)
            .collect();

        #[cfg(feature = "parallel")]
        let results: Vec<Result<Vec<CollisionReport>, PhysicsError>> = self
            .bodies
            .par_iter_mut()
            .filter(|b| b.active_collider().is_some())
            .map(|b| advance(b, dt, &snapshot))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results: Vec<Result<Vec<CollisionReport>, PhysicsError>> = self
            .bodies
            .iter_mut()
            .filter(|b| b.active_collider().is_some())
            .map(|b| advance(b, dt, &snapshot))
            .collect();

        self.contacts.clear();
        for result in results {
            self.contacts.extend(result?);
        }
        debug!(
            "stepped {} bodies by {dt}s, {} contacts",
            self.bodies.len(),
            self.contacts.len()
        );
        Ok(())
    }
}
