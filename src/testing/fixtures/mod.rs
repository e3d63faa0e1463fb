mod samples;

pub use samples::{confounded_parameters, four_point_sample, generator_parameters};
