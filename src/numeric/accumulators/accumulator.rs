/// Running scalar reduction (mean, weighted mean).
///
/// Implementations accept values one at a time via [`add`] and expose the
/// current value via [`estimation`].
pub trait Accumulator {
    /// Incorporates a value with the given weight.
    fn add_weighted(&mut self, v: f64, w: f64);

    /// Incorporates a value with unit weight.
    fn add(&mut self, v: f64) {
        self.add_weighted(v, 1.0);
    }

    /// Returns the current estimate, `NaN` when nothing has been added.
    fn estimation(&self) -> f64;

    /// Number of values added so far.
    fn count(&self) -> usize;
}
