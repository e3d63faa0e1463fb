use crate::core::{Observation, Sample};
use crate::numeric::logistic;
use crate::propensity::{PropensityModel, PropensityParameter};

/// Lower end of the bisection bracket for `theta`.
pub const BISECTION_LOWER: f64 = -5.0;
/// Upper end of the bisection bracket for `theta`.
pub const BISECTION_UPPER: f64 = 5.0;
/// Fixed number of halvings. The final bracket is `10 / 2^50` wide.
pub const BISECTION_ITERATIONS: usize = 50;

/// Score of the Bernoulli log-likelihood under `logistic(theta * x)`:
/// `g(theta) = sum_i x_i * (z_i - logistic(theta * x_i))`.
pub fn score(sample: &Sample, theta: f64) -> f64 {
    sample.iter().fold(0.0, |sum, o| {
        let p = logistic(theta, o.x);
        sum + o.x * (o.arm.indicator() - p)
    })
}

/// `P(z=1|x) = logistic(theta * x)` with `theta` at the maximum-likelihood root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticPropensity {
    theta: f64,
}

impl LogisticPropensity {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Bisection on the score over `[BISECTION_LOWER, BISECTION_UPPER]`.
    ///
    /// Runs exactly [`BISECTION_ITERATIONS`] halvings with no convergence
    /// check and returns the lower bound of the final bracket. The score is
    /// assumed decreasing with its root inside the bracket; a root outside it
    /// leaves `theta` pinned at the nearest end.
    pub fn fit(sample: &Sample) -> Self {
        let mut lo = BISECTION_LOWER;
        let mut hi = BISECTION_UPPER;
        for _ in 0..BISECTION_ITERATIONS {
            let mid = (lo + hi) / 2.0;
            if score(sample, mid) > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let width = hi - lo;
        if lo - BISECTION_LOWER <= width || BISECTION_UPPER - hi <= width {
            log::warn!(
                "logistic propensity fit saturated at theta={lo} (bracket [{BISECTION_LOWER}, {BISECTION_UPPER}])"
            );
        }
        Self::new(lo)
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }
}

impl PropensityModel for LogisticPropensity {
    fn parameter(&self) -> PropensityParameter {
        PropensityParameter::Logistic(self.theta)
    }

    #[inline]
    fn propensity(&self, observation: &Observation) -> f64 {
        logistic(self.theta, observation.x)
    }
}
