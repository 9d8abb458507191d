pub mod color;
pub mod error;
pub mod math;
pub mod range;
pub mod target;
