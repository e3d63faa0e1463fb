use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{Arm, Observation};
use crate::error::SampleError;
use crate::numeric::logistic;
use crate::streams::generators::synthetic::{CovariateModel, OutcomeModel};
use crate::streams::stream::ObservationStream;
use crate::utils::math::normal_sample;

/// Ground-truth process for validating the estimators.
///
/// Each observation draws `x` from the covariate model, assigns `z = 1` with
/// probability `logistic(theta * x)`, then draws `y` from the outcome model
/// of the assigned arm. A fixed seed reproduces the same sequence.
#[derive(Debug)]
pub struct SyntheticGenerator {
    seed: u64,
    rng: StdRng,
    covariate: CovariateModel,
    theta: f64,
    zero: OutcomeModel,
    one: OutcomeModel,
    max_observations: Option<usize>,
    produced: usize,
}

impl SyntheticGenerator {
    pub fn new(
        covariate: CovariateModel,
        theta: f64,
        zero: OutcomeModel,
        one: OutcomeModel,
        max_observations: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        let all = [
            covariate.mu,
            covariate.sigma,
            theta,
            zero.alpha,
            zero.beta,
            zero.epsilon,
            one.alpha,
            one.beta,
            one.epsilon,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "generator parameters must be finite",
            ));
        }
        if covariate.sigma < 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "x_sigma must be >= 0",
            ));
        }
        if zero.epsilon < 0.0 || one.epsilon < 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "epsilon must be >= 0",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            covariate,
            theta,
            zero,
            one,
            max_observations,
            produced: 0,
        })
    }

    pub fn outcome_model(&self, arm: Arm) -> &OutcomeModel {
        match arm {
            Arm::Untreated => &self.zero,
            Arm::Treated => &self.one,
        }
    }

    pub fn produced(&self) -> usize {
        self.produced
    }

    fn draw(&mut self) -> Observation {
        let x = normal_sample(&mut self.rng, self.covariate.mu, self.covariate.sigma);

        let p = logistic(self.theta, x);
        let u: f64 = self.rng.random();
        let arm = Arm::from(u <= p);

        let model = *self.outcome_model(arm);
        let eps = normal_sample(&mut self.rng, 0.0, model.epsilon);
        Observation::new(x, model.mean_at(x) + eps, arm)
    }
}

impl ObservationStream for SyntheticGenerator {
    fn has_more_observations(&self) -> bool {
        self.max_observations.map_or(true, |max| self.produced < max)
    }

    fn next_observation(&mut self) -> Option<Result<Observation, SampleError>> {
        if !self.has_more_observations() {
            return None;
        }
        let observation = self.draw();
        self.produced += 1;
        Some(Ok(observation))
    }

    fn restart(&mut self) -> Result<(), SampleError> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
