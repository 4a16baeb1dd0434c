//! 2D polygon collision detection and force/torque motion integration.
//!
//! Geometry is compared through [`math::Tolerant`], a fixed-width tolerance
//! interval. Line intersections are resolved by a general Gaussian solver over
//! named unknowns ([`solver::LinearEquationSystem`]). Polygons are described as
//! [`shapes::Outline`]s, attached to [`objects::Body`]s through
//! [`collision::Collider`]s and advanced by [`integration::advance`].

pub mod collision;
pub mod common;
pub mod config;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod solver;
pub mod world;

// Re-export key types for easier use
pub use collision::{Aabb, Collider, ColliderKey, Collision, PlacedCollider, ResultingBehavior};
pub use common::{CollisionBehavior, Material};
pub use config::PhysicsConfig;
pub use error::{ConfigError, GeometryError, ParseEquationError, PhysicsError, SolverError};
pub use integration::{CollisionReport, CollisionResponse, ResponseCandidates};
pub use math::{Tolerant, Transform, Vec2};
pub use objects::{Body, BodyId};
pub use shapes::{Line, Outline};
pub use solver::{Equation, EquationSegment, LinearEquationSystem, Solution};
pub use world::PhysicsWorld;
