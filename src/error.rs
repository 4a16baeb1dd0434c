//! Error types shared across the crate.

use thiserror::Error;

/// Failures of the linear equation solver that are caller mistakes rather than
/// geometric degeneracies. A singular system is not an error; it solves to an
/// empty mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("a linear equation system needs at least one equation")]
    NoEquations,
    #[error("system has {equations} equations but {unknowns} unknowns")]
    NotSquare { equations: usize, unknowns: usize },
}

/// Malformed textual equation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEquationError {
    #[error("equation has no '='")]
    MissingEquals,
    #[error("equation has more than one '='")]
    MultipleEquals,
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
}

/// Construction and query failures of lines, outlines and vectors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Both defining points are equal (or the direction is a null vector).
    #[error("a line needs two distinct points")]
    DegenerateLine,
    #[error("angle {angle} is outside [0, 2π]")]
    AngleOutOfRange { angle: f64 },
    #[error("outline needs at least {required} edges to produce sides, has {actual}")]
    TooFewEdges { required: usize, actual: usize },
    #[error("parallel lines have no unique intersection")]
    ParallelLines,
    /// The solver produced neither line parameter for two non-parallel lines.
    #[error("could not solve the intersection of two non-parallel lines")]
    UnsolvedIntersection,
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Validation and precondition failures of bodies, colliders and the world.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("physics needs an active collider")]
    NoActiveCollider,
    #[error("temper must be in (0, 1], got {0}")]
    InvalidTemper(f64),
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("moment of inertia must be positive and finite, got {0}")]
    InvalidMomentOfInertia(f64),
    #[error("delta time must be positive and finite, got {0}")]
    InvalidDeltaTime(f64),
    #[error("bounding box padding must be in [0, 1), got {0}")]
    InvalidPadding(f64),
    #[error("no body with id {0}")]
    UnknownBody(usize),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
