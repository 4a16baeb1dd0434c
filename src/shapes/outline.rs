use serde::{Deserialize, Serialize};

use super::line::Line;
use crate::collision::Aabb;
use crate::error::GeometryError;
use crate::math::Vec2;

const MIN_EDGES_FOR_SIDES: usize = 2;

/// An ordered route of displacement vectors starting at a point.
///
/// Vertex `i` sits at `start + edges[0] + .. + edges[i]`; a closed route ends
/// where it started. The closing vector and the bounding box are recomputed on
/// every structural change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OutlineRepr", into = "OutlineRepr")]
pub struct Outline {
    start: Vec2,
    edges: Vec<Vec2>,
    sum: Vec2,
    bounds: Aabb,
}

#[derive(Serialize, Deserialize)]
struct OutlineRepr {
    start: Vec2,
    edges: Vec<Vec2>,
}

impl From<OutlineRepr> for Outline {
    fn from(repr: OutlineRepr) -> Self {
        Outline::with_start(repr.start, repr.edges)
    }
}

impl From<Outline> for OutlineRepr {
    fn from(outline: Outline) -> Self {
        OutlineRepr {
            start: outline.start,
            edges: outline.edges,
        }
    }
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

impl Outline {
    /// An empty route starting at the origin.
    pub fn new() -> Self {
        Self::with_start(Vec2::ZERO, Vec::new())
    }

    pub fn from_edges(edges: impl IntoIterator<Item = Vec2>) -> Self {
        Self::with_start(Vec2::ZERO, edges.into_iter().collect())
    }

    pub fn with_start(start: Vec2, edges: Vec<Vec2>) -> Self {
        let mut outline = Self {
            start,
            edges,
            sum: Vec2::ZERO,
            bounds: Aabb::at(start),
        };
        outline.recalculate();
        outline
    }

    fn recalculate(&mut self) {
        self.sum = self.edges.iter().fold(Vec2::ZERO, |acc, e| acc + *e);
        let mut points = Vec::with_capacity(self.edges.len() + 1);
        points.push(self.start);
        points.extend(self.vertices());
        self.bounds = Aabb::from_points(&points).unwrap_or_else(|| Aabb::at(self.start));
    }

    fn check_index(&self, index: usize, len: usize) -> Result<(), GeometryError> {
        if index < len {
            Ok(())
        } else {
            Err(GeometryError::IndexOutOfRange { index, len: self.edges.len() })
        }
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn edges(&self) -> &[Vec2] {
        &self.edges
    }

    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.edges.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.edges.iter()
    }

    pub fn append(&mut self, edge: Vec2) {
        self.edges.push(edge);
        self.recalculate();
    }

    pub fn insert_at(&mut self, index: usize, edge: Vec2) -> Result<(), GeometryError> {
        self.check_index(index, self.edges.len() + 1)?;
        self.edges.insert(index, edge);
        self.recalculate();
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Vec2, GeometryError> {
        self.check_index(index, self.edges.len())?;
        let removed = self.edges.remove(index);
        self.recalculate();
        Ok(removed)
    }

    pub fn set(&mut self, index: usize, edge: Vec2) -> Result<(), GeometryError> {
        self.check_index(index, self.edges.len())?;
        self.edges[index] = edge;
        self.recalculate();
        Ok(())
    }

    /// Sum of the edges `0..=index`.
    pub fn from_start(&self, index: usize) -> Result<Vec2, GeometryError> {
        self.check_index(index, self.edges.len())?;
        Ok(self.edges[..=index].iter().fold(Vec2::ZERO, |acc, e| acc + *e))
    }

    /// Absolute position of vertex `index`.
    pub fn total_position(&self, index: usize) -> Result<Vec2, GeometryError> {
        Ok(self.start + self.from_start(index)?)
    }

    /// Absolute position of every vertex, in route order.
    pub fn vertices(&self) -> Vec<Vec2> {
        self.edges
            .iter()
            .scan(self.start, |current, edge| {
                *current += *edge;
                Some(*current)
            })
            .collect()
    }

    /// One bounded line per edge, in absolute coordinates.
    pub fn sides(&self) -> Result<Vec<Line>, GeometryError> {
        if self.edges.len() < MIN_EDGES_FOR_SIDES {
            return Err(GeometryError::TooFewEdges {
                required: MIN_EDGES_FOR_SIDES,
                actual: self.edges.len(),
            });
        }
        let mut current = self.start;
        self.edges
            .iter()
            .map(|edge| {
                let next = current + *edge;
                let side = Line::bounded(current, next);
                current = next;
                side
            })
            .collect()
    }

    /// Rotates the start point and every edge around the origin.
    pub fn rotate(&self, angle: f64) -> Outline {
        Outline::with_start(
            self.start.rotate(angle),
            self.edges.iter().map(|e| e.rotate(angle)).collect(),
        )
    }

    /// Rotates the route around `start + pivot_from_start`, which stays fixed.
    pub fn rotate_around(&self, angle: f64, pivot_from_start: Vec2) -> Outline {
        let rotated_pivot = pivot_from_start.rotate(angle);
        Outline::with_start(
            self.start + pivot_from_start - rotated_pivot,
            self.edges.iter().map(|e| e.rotate(angle)).collect(),
        )
    }

    /// Same edges, start moved by `offset`.
    pub fn shift(&self, offset: Vec2) -> Outline {
        Outline::with_start(self.start + offset, self.edges.clone())
    }

    /// The closing vector. Null for a closed route.
    pub fn sum(&self) -> Vec2 {
        self.sum
    }

    pub fn is_closed(&self) -> bool {
        !self.edges.is_empty() && self.sum.is_null()
    }

    pub fn bounding_box(&self) -> Aabb {
        self.bounds
    }

    /// `fraction` of the route's width.
    pub fn x_padding(&self, fraction: f64) -> f64 {
        self.bounds.width() * fraction
    }

    /// `fraction` of the route's height.
    pub fn y_padding(&self, fraction: f64) -> f64 {
        self.bounds.height() * fraction
    }

    pub fn max_padding(&self, fraction: f64) -> f64 {
        self.x_padding(fraction).max(self.y_padding(fraction))
    }
}

impl FromIterator<Vec2> for Outline {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Outline::from_edges(iter)
    }
}

impl Extend<Vec2> for Outline {
    fn extend<I: IntoIterator<Item = Vec2>>(&mut self, iter: I) {
        self.edges.extend(iter);
        self.recalculate();
    }
}
