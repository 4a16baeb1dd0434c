pub mod angle;
pub mod tolerant;
pub mod transform;
pub mod vec2;

pub use angle::{degree_to_radian, normalize_angle, radian_to_degree, FULL_RADIAN, QUARTER_RADIAN};
pub use tolerant::Tolerant;
pub use transform::Transform;
pub use vec2::Vec2;
