mod models;
mod synthetic_generator;

pub use models::{CovariateModel, OutcomeModel};
pub use synthetic_generator::SyntheticGenerator;
