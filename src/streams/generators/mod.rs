mod synthetic;

pub use synthetic::{CovariateModel, OutcomeModel, SyntheticGenerator};
