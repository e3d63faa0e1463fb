use std::fmt::{Display, Formatter};

use strum_macros::{Display as StrumDisplay, EnumIter, IntoStaticStr};

use crate::core::{Arm, Observation, Sample};
use crate::error::EstimationError;
use crate::propensity::{ConstantPropensity, LogisticPropensity};

/// Fitted value of a propensity model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropensityParameter {
    /// Marginal treatment rate, used as `P(z=1)` for every unit.
    Constant(f64),
    /// Slope of `P(z=1|x) = logistic(theta * x)`.
    Logistic(f64),
}

impl Display for PropensityParameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropensityParameter::Constant(rate) => write!(f, "constant(rate={rate})"),
            PropensityParameter::Logistic(theta) => write!(f, "logistic(theta={theta})"),
        }
    }
}

/// A propensity model fitted on a whole sample.
///
/// The fit happens once per estimator call; the fitted model is then asked
/// for `P(z=1|x)` of each observation in both arms.
pub trait PropensityModel: std::fmt::Debug {
    fn parameter(&self) -> PropensityParameter;

    /// `P(z=1 | observation)`.
    fn propensity(&self, observation: &Observation) -> f64;

    /// Probability of being assigned to `arm`: `p` for treated, `1 - p` for untreated.
    fn arm_probability(&self, observation: &Observation, arm: Arm) -> f64 {
        let p = self.propensity(observation);
        match arm {
            Arm::Treated => p,
            Arm::Untreated => 1.0 - p,
        }
    }
}

/// Which propensity model an estimator fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PropensityStrategy {
    /// Overall treatment rate, ignoring `x`. Misspecified whenever assignment depends on `x`.
    Constant,
    /// One-covariate logistic model fitted by bisection on the score.
    Logistic,
}

impl PropensityStrategy {
    pub fn fit(self, sample: &Sample) -> Result<Box<dyn PropensityModel>, EstimationError> {
        let model: Box<dyn PropensityModel> = match self {
            PropensityStrategy::Constant => Box::new(ConstantPropensity::fit(sample)?),
            PropensityStrategy::Logistic => Box::new(LogisticPropensity::fit(sample)),
        };
        log::debug!("fitted propensity model: {}", model.parameter());
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::four_point_sample;

    #[test]
    fn strategies_report_their_parameter_kind() {
        let sample = four_point_sample();
        let constant = PropensityStrategy::Constant.fit(&sample).unwrap();
        assert_eq!(constant.parameter(), PropensityParameter::Constant(0.5));

        let logistic = PropensityStrategy::Logistic.fit(&sample).unwrap();
        assert!(matches!(
            logistic.parameter(),
            PropensityParameter::Logistic(_)
        ));
    }

    #[test]
    fn arm_probability_complements() {
        let model = ConstantPropensity::new(0.25);
        let obs = Observation::new(3.0, 0.0, Arm::Untreated);
        assert_eq!(model.arm_probability(&obs, Arm::Treated), 0.25);
        assert_eq!(model.arm_probability(&obs, Arm::Untreated), 0.75);
    }

    #[test]
    fn parameter_display() {
        assert_eq!(
            PropensityParameter::Constant(0.5).to_string(),
            "constant(rate=0.5)"
        );
        assert_eq!(
            PropensityParameter::Logistic(-1.0).to_string(),
            "logistic(theta=-1)"
        );
    }
}
