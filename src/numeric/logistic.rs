/// `1 / (1 + exp(-theta * x))`.
///
/// Total on finite inputs. Large `|theta * x|` saturates to exactly 0 or 1.
#[inline]
pub fn logistic(theta: f64, x: f64) -> f64 {
    1.0 / (1.0 + (-theta * x).exp())
}
