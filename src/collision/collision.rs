use serde::{Deserialize, Serialize};

use super::collider::ColliderKey;
use crate::common::CollisionBehavior;

/// Combined behavior of both colliders taking part in a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultingBehavior {
    FullAbsorbing,
    HalfAbsorbing,
    FullReflecting,
}

/// Stores information about a detected overlap between two colliders.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    base: ColliderKey,
    compared: ColliderKey,
    base_behavior: CollisionBehavior,
    compared_behavior: CollisionBehavior,
    /// Vertices of the base outline inside the compared collider.
    base_hits: Vec<usize>,
    /// Vertices of the compared outline inside the base collider.
    compared_hits: Vec<usize>,
}

impl Collision {
    pub fn new(
        base: ColliderKey,
        compared: ColliderKey,
        base_behavior: CollisionBehavior,
        compared_behavior: CollisionBehavior,
        base_hits: Vec<usize>,
        compared_hits: Vec<usize>,
    ) -> Self {
        Self {
            base,
            compared,
            base_behavior,
            compared_behavior,
            base_hits,
            compared_hits,
        }
    }

    pub fn base(&self) -> ColliderKey {
        self.base
    }

    pub fn compared(&self) -> ColliderKey {
        self.compared
    }

    pub fn base_hits(&self) -> &[usize] {
        &self.base_hits
    }

    pub fn compared_hits(&self) -> &[usize] {
        &self.compared_hits
    }

    pub fn is_hit(&self) -> bool {
        !self.base_hits.is_empty() || !self.compared_hits.is_empty()
    }

    pub fn hit_count(&self) -> usize {
        self.base_hits.len() + self.compared_hits.len()
    }

    pub fn behavior(&self) -> ResultingBehavior {
        use CollisionBehavior::*;
        match (self.base_behavior, self.compared_behavior) {
            (Absorbing, Absorbing) => ResultingBehavior::FullAbsorbing,
            (Reflecting, Reflecting) => ResultingBehavior::FullReflecting,
            _ => ResultingBehavior::HalfAbsorbing,
        }
    }
}
