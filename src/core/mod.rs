pub mod observations;
pub mod sample;

pub use observations::{Arm, Observation};
pub use sample::Sample;
