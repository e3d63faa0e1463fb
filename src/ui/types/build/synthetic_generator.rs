use std::convert::TryFrom;
use std::io::ErrorKind;

use crate::core::Arm;
use crate::streams::{CovariateModel, SyntheticGenerator};
use crate::ui::types::{build::BuildError, choices::GeneratorParameters};

impl TryFrom<GeneratorParameters> for SyntheticGenerator {
    type Error = BuildError;

    fn try_from(parameters: GeneratorParameters) -> Result<Self, Self::Error> {
        let max_observations = usize::try_from(parameters.data_num).map_err(|_| {
            BuildError::InvalidParameter("data_num too large for usize".into())
        })?;

        SyntheticGenerator::new(
            CovariateModel {
                mu: parameters.x_mu,
                sigma: parameters.x_sigma,
            },
            parameters.theta,
            parameters.outcome_model(Arm::Untreated),
            parameters.outcome_model(Arm::Treated),
            Some(max_observations),
            parameters.seed,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidInput => BuildError::InvalidParameter(e.to_string()),
            _ => BuildError::from(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sample;
    use crate::testing::fixtures::generator_parameters;

    #[test]
    fn builds_a_finite_stream_of_data_num_observations() {
        let mut generator = SyntheticGenerator::try_from(generator_parameters(0.3, 25)).unwrap();
        let sample = Sample::from_stream(&mut generator).unwrap();
        assert_eq!(sample.len(), 25);
    }

    #[test]
    fn negative_sigma_is_an_invalid_parameter() {
        let parameters = GeneratorParameters {
            x_sigma: -1.0,
            ..GeneratorParameters::default()
        };
        assert!(matches!(
            SyntheticGenerator::try_from(parameters),
            Err(BuildError::InvalidParameter(_))
        ));
    }

    #[test]
    fn same_parameters_same_sample() {
        let a = Sample::from_stream(
            &mut SyntheticGenerator::try_from(generator_parameters(1.0, 40)).unwrap(),
        )
        .unwrap();
        let b = Sample::from_stream(
            &mut SyntheticGenerator::try_from(generator_parameters(1.0, 40)).unwrap(),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
