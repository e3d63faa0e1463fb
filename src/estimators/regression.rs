use crate::core::{Arm, Sample};
use crate::error::EstimationError;
use crate::estimators::{EstimationResult, Estimator, Method, require_arms};
use crate::numeric::{Accumulator, MeanAccumulator, fit_ols, predict};

/// Regression adjustment (g-formula).
///
/// Each arm gets its own OLS line fit on that arm only; the arm estimate is
/// the mean of that line's predictions over every unit in the sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegressionEstimator;

impl RegressionEstimator {
    fn arm_estimate(sample: &Sample, arm: Arm) -> Result<f64, EstimationError> {
        let coeffs = fit_ols(sample.arm(arm))?;
        log::debug!(
            "{arm} outcome model: alpha={}, beta={}",
            coeffs.alpha,
            coeffs.beta
        );
        let mean: MeanAccumulator = sample.iter().map(|o| predict(o.x, &coeffs)).collect();
        Ok(mean.estimation())
    }
}

impl Estimator for RegressionEstimator {
    fn method(&self) -> Method {
        Method::Regression
    }

    fn estimate(&self, sample: &Sample) -> Result<EstimationResult, EstimationError> {
        require_arms(sample, &[Arm::Untreated, Arm::Treated])?;
        Ok(EstimationResult::new(
            Self::arm_estimate(sample, Arm::Untreated)?,
            Self::arm_estimate(sample, Arm::Treated)?,
        ))
    }
}
