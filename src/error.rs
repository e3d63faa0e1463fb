use crate::core::Arm;
use thiserror::Error;

/// Failures of the estimator core. None of them is retried: a call either
/// yields a complete result or one of these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimationError {
    #[error("the {arm} group is empty")]
    EmptyGroup { arm: Arm },

    #[error("degenerate regression input: zero determinant over {n} observations")]
    DegenerateInput { n: usize },

    #[error("unknown method: {0}")]
    UnknownMethod(String),
}

/// Failures while turning an input source into a [`Sample`](crate::core::Sample).
///
/// Line numbers are 1-based and count the header line.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 3 fields (x,y,z), found {found}")]
    Arity { line: u64, found: usize },

    #[error("line {line}: cannot parse {field} from {value:?}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: treatment indicator must be 0 or 1, got {value:?}")]
    InvalidTreatment { line: u64, value: String },
}
