use crate::collision::Aabb;
use crate::error::GeometryError;
use crate::math::{Tolerant, Vec2};
use crate::solver::{Equation, EquationSegment, LinearEquationSystem, Solution};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    start: Vec2,
    end: Vec2,
    aabb: Aabb,
}

/// A parametric line `base + direction·t`, optionally bounded to the segment
/// between its two defining points.
///
/// The direction is the unit vector pointing from the second defining point
/// towards the base, so the second point sits at a negative parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    base: Vec2,
    direction: Vec2,
    bounds: Option<Bounds>,
}

impl Line {
    /// Unbounded line through `base` and `point`.
    pub fn new(base: Vec2, point: Vec2) -> Result<Self, GeometryError> {
        let direction = Self::direction_between(base, point)?;
        Ok(Self {
            base,
            direction,
            bounds: None,
        })
    }

    /// Segment from `start` to `end`.
    pub fn bounded(start: Vec2, end: Vec2) -> Result<Self, GeometryError> {
        let direction = Self::direction_between(start, end)?;
        Ok(Self {
            base: start,
            direction,
            bounds: Some(Bounds {
                start,
                end,
                aabb: Aabb::new(start, end),
            }),
        })
    }

    /// Unbounded line through `base` along `direction`.
    pub fn from_base_and_direction(base: Vec2, direction: Vec2) -> Result<Self, GeometryError> {
        if direction.is_null() {
            return Err(GeometryError::DegenerateLine);
        }
        Ok(Self {
            base,
            direction: direction.as_unit_vector(),
            bounds: None,
        })
    }

    fn direction_between(base: Vec2, point: Vec2) -> Result<Vec2, GeometryError> {
        if base.approx_eq(point) {
            return Err(GeometryError::DegenerateLine);
        }
        Ok((base - point).as_unit_vector())
    }

    pub fn base(&self) -> Vec2 {
        self.base
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn is_bounded(&self) -> bool {
        self.bounds.is_some()
    }

    pub fn start(&self) -> Option<Vec2> {
        self.bounds.map(|b| b.start)
    }

    pub fn end(&self) -> Option<Vec2> {
        self.bounds.map(|b| b.end)
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        self.bounds.map(|b| b.aabb)
    }

    /// Smallest x and y a point on this line can have.
    pub fn min_limit(&self) -> Vec2 {
        match self.bounds {
            Some(b) => b.aabb.min,
            None => Vec2::new(f64::MIN, f64::MIN),
        }
    }

    /// Largest x and y a point on this line can have.
    pub fn max_limit(&self) -> Vec2 {
        match self.bounds {
            Some(b) => b.aabb.max,
            None => Vec2::new(f64::MAX, f64::MAX),
        }
    }

    pub fn point_at(&self, t: f64) -> Vec2 {
        self.base + self.direction * t
    }

    pub fn cos_angle_to(&self, other: &Line) -> f64 {
        self.direction.cos_angle(other.direction)
    }

    pub fn is_parallel(&self, other: &Line) -> bool {
        self.direction.is_parallel(other.direction)
    }

    pub fn x_segments(&self, name: &str) -> Vec<EquationSegment> {
        vec![
            EquationSegment::constant(self.base.x),
            EquationSegment::unknown(name, self.direction.x),
        ]
    }

    pub fn y_segments(&self, name: &str) -> Vec<EquationSegment> {
        vec![
            EquationSegment::constant(self.base.y),
            EquationSegment::unknown(name, self.direction.y),
        ]
    }

    /// Whether `point` lies on the line (and within the segment when bounded).
    ///
    /// Each axis is solved for its own parameter and both parameters must agree.
    /// An axis the line does not move along only requires the coordinate to
    /// match the base.
    pub fn contains_point(&self, point: Vec2) -> bool {
        if let Some(bounds) = &self.bounds {
            if !bounds.aabb.contains(point) {
                return false;
            }
        }

        let tx = Self::axis_param(self.x_segments("t"), self.direction.x, self.base.x, point.x);
        let ty = Self::axis_param(self.y_segments("t"), self.direction.y, self.base.y, point.y);

        match (tx, ty) {
            (AxisParam::Solved(a), AxisParam::Solved(b)) => Tolerant(a).approx_eq(b),
            (AxisParam::Off, _) | (_, AxisParam::Off) => false,
            _ => true,
        }
    }

    /// Whether the point at parameter `t` lies on this line's valid range.
    pub fn contains_param(&self, t: f64) -> bool {
        self.contains_point(self.point_at(t))
    }

    fn axis_param(segments: Vec<EquationSegment>, direction: f64, base: f64, coordinate: f64) -> AxisParam {
        if Tolerant(direction).is_zero() {
            return if Tolerant(base).approx_eq(coordinate) {
                AxisParam::Fixed
            } else {
                AxisParam::Off
            };
        }
        match Equation::new(segments, vec![EquationSegment::constant(coordinate)]).try_solve() {
            Some(t) => AxisParam::Solved(t),
            None => AxisParam::Off,
        }
    }

    /// Solves `self` (as `r`) against `other` (as `s`). Empty when the system has
    /// no unique solution.
    pub fn solve_against(&self, other: &Line) -> Result<Solution, GeometryError> {
        Ok(LinearEquationSystem::from_lines(self, "r", other, "s").solve_gaussian()?)
    }

    /// Intersection point of both (unbounded) lines.
    pub fn intersection(&self, other: &Line) -> Result<Vec2, GeometryError> {
        if self.is_parallel(other) {
            return Err(GeometryError::ParallelLines);
        }
        let solution = self.solve_against(other)?;
        if let Some(r) = solution.get("r") {
            Ok(self.point_at(*r))
        } else if let Some(s) = solution.get("s") {
            Ok(other.point_at(*s))
        } else {
            Err(GeometryError::UnsolvedIntersection)
        }
    }

    /// Like [`Line::intersection`], but parallel lines give `Ok(None)`.
    pub fn try_intersection(&self, other: &Line) -> Result<Option<Vec2>, GeometryError> {
        if self.is_parallel(other) {
            return Ok(None);
        }
        self.intersection(other).map(Some)
    }
}

enum AxisParam {
    Solved(f64),
    /// Direction has no component on this axis and the coordinate matches.
    Fixed,
    Off,
}
