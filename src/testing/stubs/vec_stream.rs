use crate::core::Observation;
use crate::error::SampleError;
use crate::streams::ObservationStream;

pub struct VecStream {
    pub observations: Vec<Observation>,
    idx: usize,
}

impl VecStream {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self {
            observations,
            idx: 0,
        }
    }
}

impl ObservationStream for VecStream {
    fn has_more_observations(&self) -> bool {
        self.idx < self.observations.len()
    }

    fn next_observation(&mut self) -> Option<Result<Observation, SampleError>> {
        if !self.has_more_observations() {
            return None;
        }

        let observation = self.observations[self.idx];
        self.idx += 1;
        Some(Ok(observation))
    }

    fn restart(&mut self) -> Result<(), SampleError> {
        self.idx = 0;
        Ok(())
    }
}
