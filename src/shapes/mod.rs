pub mod line;
pub mod outline;

// Re-export the specific shape types
pub use line::Line;
pub use outline::Outline;
