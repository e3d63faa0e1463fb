use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::core::Sample;
use crate::error::EstimationError;
use crate::estimators::{
    DoublyRobustEstimator, EstimationResult, Estimator, NaiveEstimator,
    PropensityWeightedEstimator, RegressionEstimator,
};
use crate::propensity::PropensityStrategy;

/// Estimator selector, parsed from its snake_case token.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, EnumMessage, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Method {
    #[strum(
        message = "Naive",
        detailed_message = "Difference of the per-arm outcome means."
    )]
    Naive,

    #[strum(
        message = "Regression",
        detailed_message = "Per-arm OLS averaged over every unit (g-formula)."
    )]
    Regression,

    #[strum(
        message = "Propensity",
        detailed_message = "Hájek IPW with a logistic propensity model."
    )]
    Propensity,

    #[strum(
        message = "Doubly Robust",
        detailed_message = "Augmented IPW with a logistic propensity model."
    )]
    DoublyRobust,

    #[strum(
        message = "Propensity (constant model)",
        detailed_message = "Hájek IPW with the marginal treatment rate as propensity."
    )]
    PropensityWrong,

    #[strum(
        message = "Doubly Robust (constant model)",
        detailed_message = "Augmented IPW with the marginal treatment rate as propensity."
    )]
    DoublyRobustWrong,
}

impl Method {
    /// Parses a selector token, failing with [`EstimationError::UnknownMethod`].
    pub fn parse(token: &str) -> Result<Self, EstimationError> {
        Method::from_str(token.trim())
            .map_err(|_| EstimationError::UnknownMethod(token.to_string()))
    }

    /// Propensity model the method fits, if any.
    pub fn propensity_strategy(self) -> Option<PropensityStrategy> {
        match self {
            Method::Naive | Method::Regression => None,
            Method::Propensity | Method::DoublyRobust => Some(PropensityStrategy::Logistic),
            Method::PropensityWrong | Method::DoublyRobustWrong => {
                Some(PropensityStrategy::Constant)
            }
        }
    }

    pub fn build(self) -> Box<dyn Estimator> {
        match self {
            Method::Naive => Box::new(NaiveEstimator),
            Method::Regression => Box::new(RegressionEstimator),
            Method::Propensity => {
                Box::new(PropensityWeightedEstimator::new(PropensityStrategy::Logistic))
            }
            Method::PropensityWrong => {
                Box::new(PropensityWeightedEstimator::new(PropensityStrategy::Constant))
            }
            Method::DoublyRobust => {
                Box::new(DoublyRobustEstimator::new(PropensityStrategy::Logistic))
            }
            Method::DoublyRobustWrong => {
                Box::new(DoublyRobustEstimator::new(PropensityStrategy::Constant))
            }
        }
    }
}

/// Parses `token`, builds the matching estimator and runs it on `sample`.
pub fn run(token: &str, sample: &Sample) -> Result<EstimationResult, EstimationError> {
    let method = Method::parse(token)?;
    log::debug!(
        "estimating with {method} over {} observations ({} treated)",
        sample.len(),
        sample.arm_len(crate::core::Arm::Treated)
    );
    method.build().estimate(sample)
}
