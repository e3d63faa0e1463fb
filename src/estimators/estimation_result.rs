use std::fmt::{Display, Formatter};

use crate::core::Arm;

/// `[estimate_z0, estimate_z1, effect]` produced by every estimator.
///
/// Only the two arm estimates are stored; the effect is always derived as
/// `treated - untreated`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationResult {
    untreated: f64,
    treated: f64,
}

impl EstimationResult {
    #[inline]
    pub fn new(untreated: f64, treated: f64) -> Self {
        Self { untreated, treated }
    }

    #[inline]
    pub fn untreated(&self) -> f64 {
        self.untreated
    }

    #[inline]
    pub fn treated(&self) -> f64 {
        self.treated
    }

    #[inline]
    pub fn estimate(&self, arm: Arm) -> f64 {
        match arm {
            Arm::Untreated => self.untreated,
            Arm::Treated => self.treated,
        }
    }

    #[inline]
    pub fn effect(&self) -> f64 {
        self.treated - self.untreated
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.untreated, self.treated, self.effect()]
    }
}

impl Display for EstimationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "untreated={:.6}, treated={:.6}, effect={:.6}",
            self.untreated,
            self.treated,
            self.effect()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_is_exact_difference() {
        let r = EstimationResult::new(0.1, 0.3);
        assert_eq!(r.effect(), 0.3 - 0.1);
        assert_eq!(r.to_array(), [0.1, 0.3, 0.3 - 0.1]);
    }

    #[test]
    fn estimate_by_arm() {
        let r = EstimationResult::new(1.5, 3.5);
        assert_eq!(r.estimate(Arm::Untreated), 1.5);
        assert_eq!(r.estimate(Arm::Treated), 3.5);
    }
}
