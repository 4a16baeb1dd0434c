pub mod aabb;
pub mod collider;
pub mod collision;

// Re-export key types
pub use aabb::Aabb;
pub use collider::{Collider, ColliderKey, PlacedCollider};
pub use collision::{Collision, ResultingBehavior};
