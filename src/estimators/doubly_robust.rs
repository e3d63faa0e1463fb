use crate::core::{Arm, Sample};
use crate::error::EstimationError;
use crate::estimators::{EstimationResult, Estimator, Method, require_arms};
use crate::numeric::{RegressionCoefficients, fit_ols, predict};
use crate::propensity::{PropensityModel, PropensityStrategy};

/// Augmented IPW: an arm-specific outcome regression corrected by inverse
/// propensity weighted residuals of that arm's units.
///
/// For target arm `k` with `c_i = P(k | x_i)`:
///
/// ```text
/// unit in arm k:     num += y_i / c_i + (1 - 1 / c_i) * m_k(x_i)
/// unit in other arm: num += m_k(x_i)
/// estimate_k = num / n
/// ```
///
/// The normalization is by the sample size `n`. The matching weight total
/// (`1 / c_i` or `1`) is still accumulated and logged, but never divides.
#[derive(Debug, Clone, Copy)]
pub struct DoublyRobustEstimator {
    strategy: PropensityStrategy,
}

impl DoublyRobustEstimator {
    pub fn new(strategy: PropensityStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> PropensityStrategy {
        self.strategy
    }

    fn arm_estimate(
        sample: &Sample,
        model: &dyn PropensityModel,
        arm: Arm,
    ) -> Result<f64, EstimationError> {
        let coeffs: RegressionCoefficients = fit_ols(sample.arm(arm))?;
        log::debug!(
            "{arm} outcome model: alpha={}, beta={}",
            coeffs.alpha,
            coeffs.beta
        );

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for o in sample.iter() {
            let regression = predict(o.x, &coeffs);
            if o.is_in(arm) {
                let correction = model.arm_probability(o, arm);
                numerator += o.y / correction;
                numerator += (1.0 - 1.0 / correction) * regression;
                denominator += 1.0 / correction;
            } else {
                numerator += regression;
                denominator += 1.0;
            }
        }
        log::trace!("{arm} weight total {denominator} (unused, estimate divides by n)");

        Ok(numerator / sample.len() as f64)
    }
}

impl Estimator for DoublyRobustEstimator {
    fn method(&self) -> Method {
        match self.strategy {
            PropensityStrategy::Logistic => Method::DoublyRobust,
            PropensityStrategy::Constant => Method::DoublyRobustWrong,
        }
    }

    fn estimate(&self, sample: &Sample) -> Result<EstimationResult, EstimationError> {
        require_arms(sample, &[Arm::Untreated, Arm::Treated])?;
        let model = self.strategy.fit(sample)?;
        Ok(EstimationResult::new(
            Self::arm_estimate(sample, model.as_ref(), Arm::Untreated)?,
            Self::arm_estimate(sample, model.as_ref(), Arm::Treated)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Observation;
    use crate::estimators::RegressionEstimator;
    use crate::streams::SyntheticGenerator;
    use crate::testing::fixtures::confounded_parameters;

    const EPS: f64 = 1e-12;

    fn linear_sample() -> Sample {
        Sample::new(vec![
            Observation::new(0.0, 1.0, Arm::Untreated),
            Observation::new(1.0, 2.0, Arm::Untreated),
            Observation::new(-1.0, 0.0, Arm::Untreated),
            Observation::new(2.0, 7.0, Arm::Treated),
            Observation::new(3.0, 9.0, Arm::Treated),
            Observation::new(0.0, 3.0, Arm::Treated),
        ])
    }

    #[test]
    fn zero_residuals_reduce_to_regression() {
        // Both arms lie exactly on their lines, so every correction term vanishes.
        let sample = linear_sample();
        let reg = RegressionEstimator.estimate(&sample).unwrap();
        for strategy in [PropensityStrategy::Logistic, PropensityStrategy::Constant] {
            let dr = DoublyRobustEstimator::new(strategy).estimate(&sample).unwrap();
            assert!((dr.untreated() - reg.untreated()).abs() < 1e-9, "{dr} vs {reg}");
            assert!((dr.treated() - reg.treated()).abs() < 1e-9, "{dr} vs {reg}");
        }
    }

    #[test]
    fn divides_by_sample_size() {
        // Constant propensity 1/2, so every correction is 0.5.
        // Untreated line m0(x) = x, treated line m1(x) = 1.
        let sample = Sample::new(vec![
            Observation::new(0.0, 0.0, Arm::Untreated),
            Observation::new(2.0, 2.0, Arm::Untreated),
            Observation::new(0.0, 1.0, Arm::Treated),
            Observation::new(2.0, 1.0, Arm::Treated),
        ]);
        let dr = DoublyRobustEstimator::new(PropensityStrategy::Constant)
            .estimate(&sample)
            .unwrap();
        // untreated: own units give 2y - m0(x) = y, the others m0(x): (0 + 2 + 0 + 2) / 4
        assert!((dr.untreated() - 1.0).abs() < EPS, "{dr}");
        assert!((dr.treated() - 1.0).abs() < EPS, "{dr}");
        assert_eq!(dr.effect(), dr.treated() - dr.untreated());
    }

    #[test]
    fn residuals_are_reweighted_by_inverse_propensity() {
        let sample = Sample::new(vec![
            Observation::new(0.0, 0.0, Arm::Untreated),
            Observation::new(1.0, 3.0, Arm::Untreated),
            Observation::new(2.0, 2.0, Arm::Untreated),
            Observation::new(0.0, 1.0, Arm::Treated),
            Observation::new(2.0, 1.0, Arm::Treated),
        ]);
        let model = PropensityStrategy::Constant.fit(&sample).unwrap();
        let c0 = 1.0 - 2.0 / 5.0;
        let coeffs = fit_ols(sample.arm(Arm::Untreated)).unwrap();
        let expected: f64 = sample
            .iter()
            .map(|o| {
                let m = predict(o.x, &coeffs);
                if o.is_in(Arm::Untreated) {
                    o.y / c0 + (1.0 - 1.0 / c0) * m
                } else {
                    m
                }
            })
            .sum::<f64>()
            / 5.0;
        let got = DoublyRobustEstimator::arm_estimate(&sample, model.as_ref(), Arm::Untreated)
            .unwrap();
        assert!((got - expected).abs() < EPS, "got={got} expected={expected}");
    }

    #[test]
    fn empty_untreated_arm_is_an_error() {
        let sample = Sample::new(vec![
            Observation::new(0.0, 1.0, Arm::Treated),
            Observation::new(1.0, 2.0, Arm::Treated),
        ]);
        for strategy in [PropensityStrategy::Logistic, PropensityStrategy::Constant] {
            assert_eq!(
                DoublyRobustEstimator::new(strategy).estimate(&sample),
                Err(EstimationError::EmptyGroup {
                    arm: Arm::Untreated
                })
            );
        }
    }

    #[test]
    fn recovers_effect_under_confounding() {
        let parameters = confounded_parameters(200_000);
        let truth = parameters.true_effect();
        let mut generator = SyntheticGenerator::try_from(parameters).unwrap();
        let sample = Sample::from_stream(&mut generator).unwrap();
        for strategy in [PropensityStrategy::Logistic, PropensityStrategy::Constant] {
            let r = DoublyRobustEstimator::new(strategy).estimate(&sample).unwrap();
            assert!(
                (r.effect() - truth).abs() < 0.05,
                "{strategy}: effect={} truth={truth}",
                r.effect()
            );
        }
    }
}
