use serde::{Deserialize, Serialize};

use super::angle::normalize_angle;
use super::vec2::Vec2;

/// Placement of a body in the world: the location of its center and its
/// rotation around the mass emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// Radians, within `[0, 2π)`.
    pub rotation: f64,
}

impl Transform {
    /// Creates a new transform; the rotation is normalized into `[0, 2π)`.
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self {
            position,
            rotation: normalize_angle(rotation),
        }
    }

    /// Creates an identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}
