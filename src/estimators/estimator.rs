use crate::core::{Arm, Sample};
use crate::error::EstimationError;
use crate::estimators::{EstimationResult, Method};

/// Average treatment effect estimator over a whole in-memory sample.
///
/// Implementations hold no per-call state: every intermediate fit (regression
/// coefficients, propensity parameter) is rebuilt inside [`estimate`].
pub trait Estimator: Send + Sync {
    /// Selector this estimator answers to.
    fn method(&self) -> Method;

    fn estimate(&self, sample: &Sample) -> Result<EstimationResult, EstimationError>;
}

/// Fails with [`EstimationError::EmptyGroup`] for the first arm of `arms`
/// that has no observations.
pub fn require_arms(sample: &Sample, arms: &[Arm]) -> Result<(), EstimationError> {
    for &arm in arms {
        if sample.arm(arm).next().is_none() {
            return Err(EstimationError::EmptyGroup { arm });
        }
    }
    Ok(())
}
