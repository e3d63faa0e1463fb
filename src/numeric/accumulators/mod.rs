mod accumulator;
mod mean_accumulator;
mod weighted_mean_accumulator;

pub use accumulator::Accumulator;
pub use mean_accumulator::MeanAccumulator;
pub use weighted_mean_accumulator::WeightedMeanAccumulator;
