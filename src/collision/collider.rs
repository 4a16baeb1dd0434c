use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::collision::Collision;
use crate::common::{CollisionBehavior, Material};
use crate::config::DEFAULT_BOUNDING_BOX_PADDING;
use crate::error::{GeometryError, PhysicsError};
use crate::math::{Tolerant, Transform, Vec2};
use crate::objects::BodyId;
use crate::shapes::{Line, Outline};

/// Ray origins sit at least this many tolerance widths left of the outline.
const MIN_RAY_OFFSET: f64 = 4.0 * Tolerant::EPSILON;

/// A polygon outline attached to a body.
///
/// The outline is stored relative to its anchor point. The anchor sits at
/// `center_to_outline` from the body's center, and the body rotates around its
/// center plus `mass_emphasis_from_center`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    outline: Outline,
    center_to_outline: Vec2,
    mass_emphasis_from_center: Vec2,
    pub material: Material,
    padding: f64,
}

impl Collider {
    pub fn new(
        outline: Outline,
        center_to_outline: Vec2,
        mass_emphasis_from_center: Vec2,
        material: Material,
    ) -> Self {
        Self {
            outline,
            center_to_outline,
            mass_emphasis_from_center,
            material,
            padding: DEFAULT_BOUNDING_BOX_PADDING,
        }
    }

    /// Sets the bounding box padding as a fraction of the outline size.
    pub fn with_padding(mut self, padding: f64) -> Result<Self, PhysicsError> {
        if !(0.0..1.0).contains(&padding) {
            return Err(PhysicsError::InvalidPadding(padding));
        }
        self.padding = padding;
        Ok(self)
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn center_to_outline(&self) -> Vec2 {
        self.center_to_outline
    }

    pub fn mass_emphasis_from_center(&self) -> Vec2 {
        self.mass_emphasis_from_center
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn behavior(&self) -> CollisionBehavior {
        self.material.behavior
    }

    /// The outline in world coordinates for an owner at `owner`.
    ///
    /// Computed fresh on every call.
    pub fn positioned_outline(&self, owner: &Transform) -> Outline {
        let anchor = self.center_to_outline + owner.position;
        let pivot_from_anchor = self.mass_emphasis_from_center - self.center_to_outline;
        self.outline
            .shift(anchor)
            .rotate_around(owner.rotation, pivot_from_anchor)
    }

    /// Point-in-polygon test by ray casting from the left of the outline.
    pub fn is_inside(&self, owner: &Transform, point: Vec2) -> Result<bool, GeometryError> {
        point_in_outline(&self.positioned_outline(owner), self.padding, point)
    }

    /// Indices of the positioned outline's sides crossed by `ray`.
    pub fn do_ray_cast(&self, owner: &Transform, ray: &Line) -> Result<Vec<usize>, GeometryError> {
        ray_cast_outline(&self.positioned_outline(owner), ray)
    }
}

pub(crate) fn point_in_outline(
    outline: &Outline,
    padding: f64,
    point: Vec2,
) -> Result<bool, GeometryError> {
    let bounds = outline.bounding_box();
    if !bounds.contains(point) {
        return Ok(false);
    }

    let offset = outline.x_padding(padding).max(MIN_RAY_OFFSET);
    let origin = Vec2::new(bounds.min.x - offset, point.y);
    let ray = Line::bounded(origin, point)?;
    let sides = outline.sides()?;
    // a vertex on the ray counts only for the side reaching above it
    let crossings = ray_cast_sides(&sides, &ray)?
        .into_iter()
        .filter(|&index| straddles(&sides[index], point.y))
        .count();
    trace!("ray to {point} crossed {crossings} sides");
    Ok(crossings % 2 == 1)
}

/// Exactly one endpoint of `side` lies strictly above `y`.
fn straddles(side: &Line, y: f64) -> bool {
    match (side.start(), side.end()) {
        (Some(start), Some(end)) => (start.y > y) != (end.y > y),
        _ => false,
    }
}

pub(crate) fn ray_cast_outline(outline: &Outline, ray: &Line) -> Result<Vec<usize>, GeometryError> {
    ray_cast_sides(&outline.sides()?, ray)
}

fn ray_cast_sides(sides: &[Line], ray: &Line) -> Result<Vec<usize>, GeometryError> {
    let mut hits = Vec::new();
    for (index, side) in sides.iter().enumerate() {
        if ray.is_parallel(side) {
            continue;
        }
        let solution = ray.solve_against(side)?;
        let (Some(&r), Some(&s)) = (solution.get("r"), solution.get("s")) else {
            debug!("no intersection solved between ray at {} and side {index}", ray.base());
            continue;
        };
        // an unbounded ray would otherwise hit sides behind its origin too
        if ray.contains_param(r) && side.contains_param(s) {
            hits.push(index);
        }
    }
    Ok(hits)
}

/// Identifies one collider of one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColliderKey {
    pub body: BodyId,
    pub index: usize,
}

/// A collider frozen at its owner's placement, as used during one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCollider {
    key: ColliderKey,
    collider: Collider,
    owner: Transform,
    outline: Outline,
}

impl PlacedCollider {
    pub fn new(key: ColliderKey, collider: Collider, owner: Transform) -> Self {
        let outline = collider.positioned_outline(&owner);
        Self {
            key,
            collider,
            owner,
            outline,
        }
    }

    pub fn key(&self) -> ColliderKey {
        self.key
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    pub fn owner(&self) -> Transform {
        self.owner
    }

    /// Positioned outline at the frozen placement.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn is_inside(&self, point: Vec2) -> Result<bool, GeometryError> {
        point_in_outline(&self.outline, self.collider.padding, point)
    }

    pub fn do_ray_cast(&self, ray: &Line) -> Result<Vec<usize>, GeometryError> {
        ray_cast_outline(&self.outline, ray)
    }

    /// Tests every vertex of each outline against the other collider.
    ///
    /// A collision is reported only when some vertex of `other` lies inside
    /// this collider; the hits of this collider's vertices inside `other` are
    /// carried along but do not count on their own.
    pub fn check(&self, other: &PlacedCollider) -> Result<Option<Collision>, GeometryError> {
        let mut base_hits = Vec::new();
        for (i, vertex) in self.outline.vertices().into_iter().enumerate() {
            if other.is_inside(vertex)? {
                base_hits.push(i);
            }
        }

        let mut compared_hits = Vec::new();
        for (i, vertex) in other.outline.vertices().into_iter().enumerate() {
            if self.is_inside(vertex)? {
                compared_hits.push(i);
            }
        }

        if compared_hits.is_empty() {
            return Ok(None);
        }

        Ok(Some(Collision::new(
            self.key,
            other.key,
            self.collider.behavior(),
            other.collider.behavior(),
            base_hits,
            compared_hits,
        )))
    }
}
