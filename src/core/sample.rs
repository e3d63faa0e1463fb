use crate::core::observations::{Arm, Observation};
use crate::error::SampleError;
use crate::streams::ObservationStream;

/// The full in-memory sample handed to an estimator.
///
/// Order carries no meaning: every estimator reduces it with order-independent
/// aggregates. A sample is built once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    observations: Vec<Observation>,
}

impl Sample {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Drains `stream` until it reports exhaustion. The first malformed
    /// record aborts the whole load.
    pub fn from_stream(stream: &mut dyn ObservationStream) -> Result<Self, SampleError> {
        let mut observations = Vec::new();
        while stream.has_more_observations() {
            match stream.next_observation() {
                Some(observation) => observations.push(observation?),
                None => break,
            }
        }
        Ok(Self { observations })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    /// Observations assigned to `arm`, in sample order.
    pub fn arm(&self, arm: Arm) -> impl Iterator<Item = &Observation> {
        self.observations.iter().filter(move |o| o.is_in(arm))
    }

    pub fn arm_len(&self, arm: Arm) -> usize {
        self.arm(arm).count()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }
}

impl From<Vec<Observation>> for Sample {
    fn from(observations: Vec<Observation>) -> Self {
        Self::new(observations)
    }
}

impl FromIterator<Observation> for Sample {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
