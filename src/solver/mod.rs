pub mod equation;
pub mod system;

pub use equation::{Equation, EquationSegment};
pub use system::{LinearEquationSystem, Solution};
