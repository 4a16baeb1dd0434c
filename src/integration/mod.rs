pub mod integrator;

pub use integrator::{advance, integrate, respond, CollisionReport, CollisionResponse, ResponseCandidates};
