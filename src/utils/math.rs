use std::f64::consts::PI;

use rand::Rng;

/// Box–Muller draw from `Normal(mu, sigma)` using two uniforms.
///
/// The first uniform is taken from `(0, 1]` so that its logarithm stays finite.
pub fn normal_sample<R: Rng + ?Sized>(rng: &mut R, mu: f64, sigma: f64) -> f64 {
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    z * sigma + mu
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draws_are_finite_and_centred() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 40_000;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..n {
            let v = normal_sample(&mut rng, 2.0, 0.5);
            assert!(v.is_finite());
            sum += v;
            sum_sq += (v - 2.0) * (v - 2.0);
        }
        let mean = sum / n as f64;
        let var = sum_sq / n as f64;
        assert!((mean - 2.0).abs() < 0.02, "mean={mean}");
        assert!((var - 0.25).abs() < 0.02, "var={var}");
    }

    #[test]
    fn zero_sigma_returns_mu() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(normal_sample(&mut rng, -1.5, 0.0), -1.5);
    }
}
