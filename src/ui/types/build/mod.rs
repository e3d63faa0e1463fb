mod error;
mod synthetic_generator;

pub use error::BuildError;
