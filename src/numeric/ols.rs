//! Closed-form ordinary least squares for `y = alpha + beta * x`.
//!
//! The fit only needs the five sufficient statistics `n, S_x, S_y, S_xx, S_xy`;
//! the 2x2 normal equations are then solved directly:
//!
//! ```text
//! det   = n*S_xx - S_x^2
//! alpha = (S_xx*S_y - S_x*S_xy) / det
//! beta  = (n*S_xy - S_x*S_y)    / det
//! ```

use crate::core::Observation;
use crate::error::EstimationError;

/// Intercept and slope of a fitted line. Only meaningful for the subset it was fit on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionCoefficients {
    pub alpha: f64,
    pub beta: f64,
}

/// Running sums for the normal equations.
#[derive(Debug, Default, Clone, Copy)]
pub struct SufficientStatistics {
    n: usize,
    s_x: f64,
    s_y: f64,
    s_xx: f64,
    s_xy: f64,
}

impl SufficientStatistics {
    #[inline]
    pub fn add(&mut self, x: f64, y: f64) {
        self.n += 1;
        self.s_x += x;
        self.s_y += y;
        self.s_xx += x * x;
        self.s_xy += x * y;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Solves the normal equations. An empty accumulator, or one whose `x`
    /// values are all identical, has a zero determinant.
    pub fn solve(&self) -> Result<RegressionCoefficients, EstimationError> {
        let n = self.n as f64;
        let det = n * self.s_xx - self.s_x * self.s_x;
        if det == 0.0 {
            return Err(EstimationError::DegenerateInput { n: self.n });
        }
        Ok(RegressionCoefficients {
            alpha: (self.s_xx * self.s_y - self.s_x * self.s_xy) / det,
            beta: (-self.s_x * self.s_y + n * self.s_xy) / det,
        })
    }
}

/// Fits `y = alpha + beta * x` over `subset`.
///
/// Callers are expected to hand in a non-empty subset with at least two
/// distinct `x` values; otherwise this fails with
/// [`EstimationError::DegenerateInput`].
pub fn fit_ols<'a, I>(subset: I) -> Result<RegressionCoefficients, EstimationError>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut stats = SufficientStatistics::default();
    for obs in subset {
        stats.add(obs.x, obs.y);
    }
    stats.solve()
}

#[inline]
pub fn predict(x: f64, coeffs: &RegressionCoefficients) -> f64 {
    coeffs.alpha + coeffs.beta * x
}
