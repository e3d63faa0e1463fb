use crate::core::{Arm, Observation, Sample};
use crate::ui::types::choices::GeneratorParameters;

/// `[(0,1,0), (0,2,0), (1,3,1), (1,4,1)]`.
pub fn four_point_sample() -> Sample {
    Sample::new(vec![
        Observation::new(0.0, 1.0, Arm::Untreated),
        Observation::new(0.0, 2.0, Arm::Untreated),
        Observation::new(1.0, 3.0, Arm::Treated),
        Observation::new(1.0, 4.0, Arm::Treated),
    ])
}

/// `x ~ N(0.5, 1)`, untreated `y = 1 + x + e`, treated `y = 3 + 2x + e`, `e ~ N(0, 1)`.
pub fn generator_parameters(theta: f64, data_num: u64) -> GeneratorParameters {
    GeneratorParameters {
        x_mu: 0.5,
        x_sigma: 1.0,
        theta,
        alpha_zero: 1.0,
        beta_zero: 1.0,
        epsilon_zero: 1.0,
        alpha_one: 3.0,
        beta_one: 2.0,
        epsilon_one: 1.0,
        data_num,
        seed: 42,
    }
}

/// Assignment driven by `x` (theta = 1), so the naive difference is biased.
pub fn confounded_parameters(data_num: u64) -> GeneratorParameters {
    generator_parameters(1.0, data_num)
}
