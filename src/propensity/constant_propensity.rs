use crate::core::{Arm, Observation, Sample};
use crate::error::EstimationError;
use crate::numeric::{Accumulator, MeanAccumulator};
use crate::propensity::{PropensityModel, PropensityParameter};

/// `P(z=1|x) = P(z=1)`: the marginal treatment rate for every unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantPropensity {
    rate: f64,
}

impl ConstantPropensity {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Sample mean of `z`. An empty sample has no rate.
    pub fn fit(sample: &Sample) -> Result<Self, EstimationError> {
        if sample.is_empty() {
            return Err(EstimationError::EmptyGroup {
                arm: Arm::Untreated,
            });
        }
        let rate: MeanAccumulator = sample.iter().map(|o| o.arm.indicator()).collect();
        Ok(Self::new(rate.estimation()))
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl PropensityModel for ConstantPropensity {
    fn parameter(&self) -> PropensityParameter {
        PropensityParameter::Constant(self.rate)
    }

    #[inline]
    fn propensity(&self, _observation: &Observation) -> f64 {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_treated_share() {
        let sample = Sample::new(vec![
            Observation::new(-2.0, 0.0, Arm::Untreated),
            Observation::new(0.0, 0.0, Arm::Treated),
            Observation::new(1.0, 0.0, Arm::Untreated),
            Observation::new(9.0, 0.0, Arm::Untreated),
        ]);
        let model = ConstantPropensity::fit(&sample).unwrap();
        assert_eq!(model.rate(), 0.25);
    }

    #[test]
    fn ignores_the_covariate() {
        let model = ConstantPropensity::new(0.4);
        for x in [-100.0, 0.0, 3.5] {
            let obs = Observation::new(x, 1.0, Arm::Treated);
            assert_eq!(model.propensity(&obs), 0.4);
        }
    }

    #[test]
    fn empty_sample_is_rejected() {
        assert!(matches!(
            ConstantPropensity::fit(&Sample::default()),
            Err(EstimationError::EmptyGroup { .. })
        ));
    }
}
