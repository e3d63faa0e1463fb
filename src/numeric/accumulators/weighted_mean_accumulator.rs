use crate::numeric::accumulators::Accumulator;

/// Ratio of weighted sums: `sum(w * v) / sum(w)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedMeanAccumulator {
    len: usize,
    weighted_sum: f64,
    weight_sum: f64,
}

impl WeightedMeanAccumulator {
    pub fn weight_sum(&self) -> f64 {
        self.weight_sum
    }
}

impl Accumulator for WeightedMeanAccumulator {
    #[inline]
    fn add_weighted(&mut self, v: f64, w: f64) {
        self.len += 1;
        self.weighted_sum += w * v;
        self.weight_sum += w;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.weighted_sum / self.weight_sum
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_nan() {
        assert!(WeightedMeanAccumulator::default().estimation().is_nan());
    }

    #[test]
    fn unit_weights_give_plain_mean() {
        let mut acc = WeightedMeanAccumulator::default();
        acc.add(2.0);
        acc.add(4.0);
        assert_eq!(acc.estimation(), 3.0);
        assert_eq!(acc.weight_sum(), 2.0);
    }

    #[test]
    fn heavier_values_pull_the_mean() {
        let mut acc = WeightedMeanAccumulator::default();
        acc.add_weighted(0.0, 1.0);
        acc.add_weighted(10.0, 3.0);
        assert_eq!(acc.estimation(), 7.5);
        assert_eq!(acc.count(), 2);
    }
}
