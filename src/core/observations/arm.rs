use strum_macros::{Display, EnumIter};

/// Treatment arm of a unit: `z = 0` (untreated) or `z = 1` (treated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Arm {
    Untreated,
    Treated,
}

impl Arm {
    /// The `z` indicator as a float, so that rates can be averaged directly.
    #[inline]
    pub fn indicator(self) -> f64 {
        match self {
            Arm::Untreated => 0.0,
            Arm::Treated => 1.0,
        }
    }

    #[inline]
    pub fn opposite(self) -> Arm {
        match self {
            Arm::Untreated => Arm::Treated,
            Arm::Treated => Arm::Untreated,
        }
    }

    #[inline]
    pub fn is_treated(self) -> bool {
        matches!(self, Arm::Treated)
    }
}

impl From<bool> for Arm {
    fn from(treated: bool) -> Self {
        if treated { Arm::Treated } else { Arm::Untreated }
    }
}

/// Rejects every indicator other than 0 or 1, handing the value back.
impl TryFrom<i64> for Arm {
    type Error = i64;

    fn try_from(z: i64) -> Result<Self, Self::Error> {
        match z {
            0 => Ok(Arm::Untreated),
            1 => Ok(Arm::Treated),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn indicator_matches_z() {
        assert_eq!(Arm::Untreated.indicator(), 0.0);
        assert_eq!(Arm::Treated.indicator(), 1.0);
    }

    #[test]
    fn try_from_accepts_only_binary_indicators() {
        assert_eq!(Arm::try_from(0), Ok(Arm::Untreated));
        assert_eq!(Arm::try_from(1), Ok(Arm::Treated));
        assert_eq!(Arm::try_from(2), Err(2));
        assert_eq!(Arm::try_from(-1), Err(-1));
    }

    #[test]
    fn opposite_is_an_involution() {
        for arm in Arm::iter() {
            assert_ne!(arm, arm.opposite());
            assert_eq!(arm, arm.opposite().opposite());
        }
    }

    #[test]
    fn display_is_snake_case() {
        assert_eq!(Arm::Untreated.to_string(), "untreated");
        assert_eq!(Arm::Treated.to_string(), "treated");
    }
}
