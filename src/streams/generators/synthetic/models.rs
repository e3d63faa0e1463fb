/// `x ~ Normal(mu, sigma)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CovariateModel {
    pub mu: f64,
    pub sigma: f64,
}

/// `y = alpha + beta * x + Normal(0, epsilon)` for one treatment arm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutcomeModel {
    pub alpha: f64,
    pub beta: f64,
    pub epsilon: f64,
}

impl OutcomeModel {
    pub fn new(alpha: f64, beta: f64, epsilon: f64) -> Self {
        Self {
            alpha,
            beta,
            epsilon,
        }
    }

    /// Noise-free outcome at `x`.
    #[inline]
    pub fn mean_at(&self, x: f64) -> f64 {
        self.alpha + self.beta * x
    }
}
