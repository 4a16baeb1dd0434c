// Defines an Axis-Aligned Bounding Box

use serde::{Deserialize, Serialize};

use crate::math::{Tolerant, Vec2};

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new AABB.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        // Ensure min coordinates are <= max coordinates
        Aabb {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// A zero-sized box at `point`.
    pub fn at(point: Vec2) -> Self {
        Aabb { min: point, max: point }
    }

    /// Merges another AABB into this one, expanding this AABB to contain both.
    pub fn merge(&mut self, other: &Aabb) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }

    /// Expands this AABB to contain `point`.
    pub fn include(&mut self, point: Vec2) {
        self.merge(&Aabb::at(point));
    }

    /// Creates an AABB that encompasses a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Aabb::at(*first);
        for point in rest {
            aabb.include(*point);
        }
        Some(aabb)
    }

    /// Tolerant, boundary-inclusive containment.
    pub fn contains(&self, point: Vec2) -> bool {
        !(Tolerant(point.x).approx_lt(self.min.x)
            || Tolerant(point.x).approx_gt(self.max.x)
            || Tolerant(point.y).approx_lt(self.min.y)
            || Tolerant(point.y).approx_gt(self.max.y))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
