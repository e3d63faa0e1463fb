use crate::core::observations::Arm;

/// One unit of the sample: covariate `x`, outcome `y` and the arm it was assigned to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub x: f64,
    pub y: f64,
    pub arm: Arm,
}

impl Observation {
    #[inline]
    pub fn new(x: f64, y: f64, arm: Arm) -> Self {
        Self { x, y, arm }
    }

    #[inline]
    pub fn is_in(&self, arm: Arm) -> bool {
        self.arm == arm
    }

    /// `[x, y, z]`, the column order used by the CSV format.
    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.x, self.y, self.arm.indicator()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_vec_keeps_csv_column_order() {
        let obs = Observation::new(0.5, -1.25, Arm::Treated);
        assert_eq!(obs.to_vec(), vec![0.5, -1.25, 1.0]);
    }

    #[test]
    fn membership_follows_arm() {
        let obs = Observation::new(0.0, 0.0, Arm::Untreated);
        assert!(obs.is_in(Arm::Untreated));
        assert!(!obs.is_in(Arm::Treated));
    }
}
