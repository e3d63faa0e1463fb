use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::Arm;
use crate::streams::OutcomeModel;
use crate::ui::types::build::BuildError;

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_data_num() -> u64 {
    1000
}

fn default_zero() -> f64 {
    0.0
}

fn default_one() -> f64 {
    1.0
}

/// Configuration of the synthetic ground-truth process.
///
/// Loaded from JSON (every field optional), overridden by CLI flags, or
/// collected by the interactive wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GeneratorParameters {
    #[serde(default = "default_zero")]
    #[schemars(
        title = "x mean",
        description = "Mean of the normal covariate distribution",
        default = "default_zero"
    )]
    pub x_mu: f64,

    #[serde(default = "default_one")]
    #[schemars(
        title = "x sigma",
        description = "Standard deviation of the normal covariate distribution",
        range(min = 0.0),
        default = "default_one"
    )]
    pub x_sigma: f64,

    #[serde(default = "default_zero")]
    #[schemars(
        title = "Theta",
        description = "Propensity slope: P(z=1|x) = logistic(theta * x)",
        default = "default_zero"
    )]
    pub theta: f64,

    #[serde(default = "default_zero")]
    #[schemars(
        title = "Alpha (untreated)",
        description = "Intercept of the untreated outcome line",
        default = "default_zero"
    )]
    pub alpha_zero: f64,

    #[serde(default = "default_one")]
    #[schemars(
        title = "Beta (untreated)",
        description = "Slope of the untreated outcome line",
        default = "default_one"
    )]
    pub beta_zero: f64,

    #[serde(default = "default_one")]
    #[schemars(
        title = "Epsilon (untreated)",
        description = "Noise standard deviation of untreated outcomes",
        range(min = 0.0),
        default = "default_one"
    )]
    pub epsilon_zero: f64,

    #[serde(default = "default_one")]
    #[schemars(
        title = "Alpha (treated)",
        description = "Intercept of the treated outcome line",
        default = "default_one"
    )]
    pub alpha_one: f64,

    #[serde(default = "default_one")]
    #[schemars(
        title = "Beta (treated)",
        description = "Slope of the treated outcome line",
        default = "default_one"
    )]
    pub beta_one: f64,

    #[serde(default = "default_one")]
    #[schemars(
        title = "Epsilon (treated)",
        description = "Noise standard deviation of treated outcomes",
        range(min = 0.0),
        default = "default_one"
    )]
    pub epsilon_one: f64,

    #[serde(default = "default_data_num")]
    #[schemars(
        title = "Observations",
        description = "Number of observations to generate",
        range(min = 0),
        default = "default_data_num"
    )]
    pub data_num: u64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for GeneratorParameters {
    fn default() -> Self {
        Self {
            x_mu: default_zero(),
            x_sigma: default_one(),
            theta: default_zero(),
            alpha_zero: default_zero(),
            beta_zero: default_one(),
            epsilon_zero: default_one(),
            alpha_one: default_one(),
            beta_one: default_one(),
            epsilon_one: default_one(),
            data_num: default_data_num(),
            seed: default_seed(),
        }
    }
}

impl GeneratorParameters {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, BuildError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn outcome_model(&self, arm: Arm) -> OutcomeModel {
        match arm {
            Arm::Untreated => OutcomeModel::new(self.alpha_zero, self.beta_zero, self.epsilon_zero),
            Arm::Treated => OutcomeModel::new(self.alpha_one, self.beta_one, self.epsilon_one),
        }
    }

    /// Population mean of the `arm` outcome line: `alpha + beta * x_mu`.
    pub fn true_mean(&self, arm: Arm) -> f64 {
        self.outcome_model(arm).mean_at(self.x_mu)
    }

    /// `(alpha_one - alpha_zero) + (beta_one - beta_zero) * x_mu`.
    pub fn true_effect(&self) -> f64 {
        self.true_mean(Arm::Treated) - self.true_mean(Arm::Untreated)
    }
}
