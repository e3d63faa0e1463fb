use crate::numeric::accumulators::Accumulator;

/// Plain mean: `sum / len`. Weights are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanAccumulator {
    len: usize,
    sum: f64,
}

impl Accumulator for MeanAccumulator {
    #[inline]
    fn add_weighted(&mut self, v: f64, _w: f64) {
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.sum / self.len as f64
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len
    }
}

impl FromIterator<f64> for MeanAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::default();
        for v in iter {
            acc.add(v);
        }
        acc
    }
}
