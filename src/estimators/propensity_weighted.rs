use crate::core::{Arm, Sample};
use crate::error::EstimationError;
use crate::estimators::{EstimationResult, Estimator, Method, require_arms};
use crate::numeric::{Accumulator, WeightedMeanAccumulator};
use crate::propensity::{PropensityModel, PropensityStrategy};

/// Hájek-normalized inverse propensity weighting.
///
/// For each arm, outcomes of that arm's units are averaged with weights
/// `1 / P(arm | x)`, normalized by the sum of the weights rather than by the
/// arm size.
#[derive(Debug, Clone, Copy)]
pub struct PropensityWeightedEstimator {
    strategy: PropensityStrategy,
}

impl PropensityWeightedEstimator {
    pub fn new(strategy: PropensityStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> PropensityStrategy {
        self.strategy
    }

    fn arm_estimate(sample: &Sample, model: &dyn PropensityModel, arm: Arm) -> f64 {
        let mut acc = WeightedMeanAccumulator::default();
        for o in sample.arm(arm) {
            acc.add_weighted(o.y, 1.0 / model.arm_probability(o, arm));
        }
        acc.estimation()
    }
}

impl Estimator for PropensityWeightedEstimator {
    fn method(&self) -> Method {
        match self.strategy {
            PropensityStrategy::Logistic => Method::Propensity,
            PropensityStrategy::Constant => Method::PropensityWrong,
        }
    }

    fn estimate(&self, sample: &Sample) -> Result<EstimationResult, EstimationError> {
        require_arms(sample, &[Arm::Untreated, Arm::Treated])?;
        let model = self.strategy.fit(sample)?;
        Ok(EstimationResult::new(
            Self::arm_estimate(sample, model.as_ref(), Arm::Untreated),
            Self::arm_estimate(sample, model.as_ref(), Arm::Treated),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Observation;
    use crate::streams::SyntheticGenerator;
    use crate::testing::fixtures::{confounded_parameters, four_point_sample};

    const EPS: f64 = 1e-12;

    #[test]
    fn constant_propensity_reduces_to_arm_means() {
        let estimator = PropensityWeightedEstimator::new(PropensityStrategy::Constant);
        let r = estimator.estimate(&four_point_sample()).unwrap();
        assert!((r.untreated() - 1.5).abs() < EPS);
        assert!((r.treated() - 3.5).abs() < EPS);
        assert_eq!(r.effect(), r.treated() - r.untreated());
    }

    #[test]
    fn weights_are_inverse_arm_probabilities() {
        // Two treated units with p = logistic(theta*x); the estimate is the
        // 1/p-weighted mean of their outcomes.
        let sample = Sample::new(vec![
            Observation::new(-1.0, 0.0, Arm::Untreated),
            Observation::new(1.0, 10.0, Arm::Treated),
            Observation::new(0.0, 4.0, Arm::Treated),
        ]);
        let estimator = PropensityWeightedEstimator::new(PropensityStrategy::Logistic);
        let r = estimator.estimate(&sample).unwrap();

        let model = PropensityStrategy::Logistic.fit(&sample).unwrap();
        let w1 = 1.0 / model.propensity(&sample.observations()[1]);
        let w2 = 1.0 / model.propensity(&sample.observations()[2]);
        let expected = (10.0 * w1 + 4.0 * w2) / (w1 + w2);
        assert!((r.treated() - expected).abs() < 1e-9, "{r}");
        assert!((r.untreated() - 0.0).abs() < EPS);
    }

    #[test]
    fn empty_untreated_arm_is_an_error() {
        let sample = Sample::new(vec![Observation::new(1.0, 2.0, Arm::Treated)]);
        for strategy in [PropensityStrategy::Logistic, PropensityStrategy::Constant] {
            assert_eq!(
                PropensityWeightedEstimator::new(strategy).estimate(&sample),
                Err(EstimationError::EmptyGroup {
                    arm: Arm::Untreated
                })
            );
        }
    }

    #[test]
    fn method_follows_strategy() {
        assert_eq!(
            PropensityWeightedEstimator::new(PropensityStrategy::Logistic).method(),
            Method::Propensity
        );
        assert_eq!(
            PropensityWeightedEstimator::new(PropensityStrategy::Constant).method(),
            Method::PropensityWrong
        );
    }

    #[test]
    fn logistic_model_recovers_arm_means_and_constant_model_does_not() {
        let parameters = confounded_parameters(200_000);
        let truth_zero = parameters.true_mean(Arm::Untreated);
        let truth_one = parameters.true_mean(Arm::Treated);
        let mut generator = SyntheticGenerator::try_from(parameters).unwrap();
        let sample = Sample::from_stream(&mut generator).unwrap();

        let right = PropensityWeightedEstimator::new(PropensityStrategy::Logistic)
            .estimate(&sample)
            .unwrap();
        assert!((right.untreated() - truth_zero).abs() < 0.05, "{right}");
        assert!((right.treated() - truth_one).abs() < 0.05, "{right}");

        let wrong = PropensityWeightedEstimator::new(PropensityStrategy::Constant)
            .estimate(&sample)
            .unwrap();
        assert!(
            (wrong.effect() - (truth_one - truth_zero)).abs() > 0.3,
            "{wrong}"
        );
    }
}
