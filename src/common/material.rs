//! Defines the collision material of a collider.

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;

/// How a collider reacts when it is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionBehavior {
    #[default]
    Absorbing,
    Reflecting,
}

/// Represents the properties of a collider affecting collisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Share of energy kept on impact. Range (0, 1].
    temper: f64,
    pub behavior: CollisionBehavior,
}

impl Material {
    /// Creates a new material; `temper` outside (0, 1] is rejected.
    pub fn new(temper: f64, behavior: CollisionBehavior) -> Result<Self, PhysicsError> {
        Self::check_temper(temper)?;
        Ok(Material { temper, behavior })
    }

    pub fn temper(&self) -> f64 {
        self.temper
    }

    pub fn set_temper(&mut self, temper: f64) -> Result<(), PhysicsError> {
        Self::check_temper(temper)?;
        self.temper = temper;
        Ok(())
    }

    fn check_temper(temper: f64) -> Result<(), PhysicsError> {
        if temper > 0.0 && temper <= 1.0 {
            Ok(())
        } else {
            Err(PhysicsError::InvalidTemper(temper))
        }
    }
}

impl Default for Material {
    /// Fully tempered and absorbing.
    fn default() -> Self {
        Material {
            temper: 1.0,
            behavior: CollisionBehavior::Absorbing,
        }
    }
}
