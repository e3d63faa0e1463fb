mod constant_propensity;
mod logistic_propensity;
mod propensity_model;

pub use constant_propensity::ConstantPropensity;
pub use logistic_propensity::{
    BISECTION_ITERATIONS, BISECTION_LOWER, BISECTION_UPPER, LogisticPropensity, score,
};
pub use propensity_model::{PropensityModel, PropensityParameter, PropensityStrategy};
