mod doubly_robust;
mod estimation_result;
mod estimator;
mod method;
mod naive;
mod propensity_weighted;
mod regression;

pub use doubly_robust::DoublyRobustEstimator;
pub use estimation_result::EstimationResult;
pub use estimator::{Estimator, require_arms};
pub use method::{Method, run};
pub use naive::NaiveEstimator;
pub use propensity_weighted::PropensityWeightedEstimator;
pub use regression::RegressionEstimator;
