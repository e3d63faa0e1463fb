mod accumulators;
mod logistic;
mod ols;

pub use accumulators::{Accumulator, MeanAccumulator, WeightedMeanAccumulator};
pub use logistic::logistic;
pub use ols::{RegressionCoefficients, SufficientStatistics, fit_ols, predict};
