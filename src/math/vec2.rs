use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use super::angle::{normalize_angle, FULL_RADIAN, QUARTER_RADIAN};
use super::tolerant::Tolerant;
use crate::error::GeometryError;
use crate::shapes::Line;

/// A 2D vector. Every operation returns a new value.
///
/// Components are stored as raw `f64`; all comparisons (`is_null`, `approx_eq`,
/// unit checks) go through [`Tolerant`]. The derived `PartialEq` is exact.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const UP: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components are tolerant-equal to zero.
    pub fn is_null(self) -> bool {
        Tolerant(self.x).is_zero() && Tolerant(self.y).is_zero()
    }

    /// Component-wise tolerant equality.
    pub fn approx_eq(self, other: Vec2) -> bool {
        Tolerant(self.x).approx_eq(other.x) && Tolerant(self.y).approx_eq(other.y)
    }

    pub fn reverse(self) -> Self {
        Self::ZERO - self
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Calculates the magnitude (length) of the vector; zero for a null vector.
    pub fn magnitude(self) -> f64 {
        if self.is_null() {
            0.0
        } else {
            self.dot(self).sqrt()
        }
    }

    /// Calculates the distance between two vector points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Cosine of the angle between both vectors. NaN if either is null.
    pub fn cos_angle(self, other: Vec2) -> f64 {
        self.dot(other) / (self.magnitude() * other.magnitude())
    }

    /// Counter-clockwise angle in `[0, 2π)` that rotates `self` onto the
    /// direction of `other`. NaN if either vector is null.
    ///
    /// `acos` only covers `[0, π]`; rotating by its result and re-checking the
    /// cosine tells which side `other` lies on.
    pub fn angle_to(self, other: Vec2) -> f64 {
        let result = self.cos_angle(other).clamp(-1.0, 1.0).acos();
        if Tolerant(self.rotate(result).cos_angle(other)).approx_eq(1.0) {
            result
        } else {
            normalize_angle(FULL_RADIAN - result)
        }
    }

    /// Both directions lie on one line (same or opposite orientation).
    pub fn is_parallel(self, other: Vec2) -> bool {
        let cos = self.cos_angle(other);
        Tolerant(cos * cos).approx_eq(1.0)
    }

    /// Computes the 2D cross product (scalar). Equivalent to z-component of 3D cross product.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - other.x * self.y
    }

    /// Returns a vector perpendicular to this vector (90-degree counter-clockwise rotation).
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates the vector counter-clockwise by `angle` radians.
    pub fn rotate(self, angle: f64) -> Self {
        let angle = normalize_angle(angle);
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        Self::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Unit vector in the same direction. Null and unit vectors are returned as is.
    pub fn as_unit_vector(self) -> Self {
        let length = Tolerant(self.magnitude());
        if length.approx_eq(1.0) || length.is_zero() {
            self
        } else {
            self * (1.0 / length.value())
        }
    }

    /// Same direction, scaled to `length`. A negative length flips the direction.
    pub fn with_length(self, length: f64) -> Self {
        self.as_unit_vector() * length
    }

    /// Projection of this vector onto the direction obtained by rotating it by
    /// `angle` (radians, within `[0, 2π]`).
    ///
    /// The general case intersects a line through the origin along the target
    /// direction with the orthogonal line through this vector's tip. At exactly
    /// `π` the vector itself is returned, not its reverse, which keeps the
    /// result continuous with the neighbouring angles.
    pub fn component_at_angle(self, angle: f64) -> Result<Vec2, GeometryError> {
        let a = Tolerant(angle);
        if a.approx_lt(0.0) || a.approx_gt(FULL_RADIAN) {
            return Err(GeometryError::AngleOutOfRange { angle });
        }
        if self.is_null() {
            return Ok(Self::ZERO);
        }

        if a.is_zero() || a.approx_eq(FULL_RADIAN) {
            return Ok(self);
        }
        // projecting onto the reversed direction gives the vector back
        if a.approx_eq(std::f64::consts::PI) {
            return Ok(self);
        }
        if a.approx_eq(QUARTER_RADIAN) || a.approx_eq(3.0 * QUARTER_RADIAN) {
            return Ok(Self::ZERO);
        }

        let ortho_angle = if a.approx_lt(QUARTER_RADIAN) {
            3.0 * QUARTER_RADIAN + angle
        } else if a.approx_lt(std::f64::consts::PI) {
            angle + QUARTER_RADIAN
        } else if a.approx_lt(std::f64::consts::PI + QUARTER_RADIAN) {
            angle - QUARTER_RADIAN
        } else {
            angle - (QUARTER_RADIAN + std::f64::consts::PI)
        };

        let direction = self.rotate(angle).as_unit_vector();
        let ortho_direction = self.rotate(ortho_angle).as_unit_vector();

        let component_line = Line::new(Self::ZERO, direction.reverse())?;
        let ortho_line = Line::new(self, ortho_direction + self)?;

        component_line.intersection(&ortho_line)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={}, Y={}", self.x, self.y)
    }
}

// Implement Add trait
impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

// Implement Sub trait
impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Implement Mul trait for scalar multiplication (Vec2 * f64)
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

// Implement Mul trait for scalar multiplication (f64 * Vec2)
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

// Negation
impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.reverse()
    }
}
