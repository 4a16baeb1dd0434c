pub mod material;

pub use material::{CollisionBehavior, Material};
