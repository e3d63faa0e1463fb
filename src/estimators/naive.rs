use crate::core::{Arm, Sample};
use crate::error::EstimationError;
use crate::estimators::{EstimationResult, Estimator, Method, require_arms};
use crate::numeric::{Accumulator, MeanAccumulator};

/// Difference of the per-arm outcome means. Ignores `x` entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveEstimator;

impl NaiveEstimator {
    fn arm_mean(sample: &Sample, arm: Arm) -> f64 {
        let mean: MeanAccumulator = sample.arm(arm).map(|o| o.y).collect();
        mean.estimation()
    }
}

impl Estimator for NaiveEstimator {
    fn method(&self) -> Method {
        Method::Naive
    }

    fn estimate(&self, sample: &Sample) -> Result<EstimationResult, EstimationError> {
        require_arms(sample, &[Arm::Untreated, Arm::Treated])?;
        Ok(EstimationResult::new(
            Self::arm_mean(sample, Arm::Untreated),
            Self::arm_mean(sample, Arm::Treated),
        ))
    }
}
