pub mod csv_file;
pub mod generators;
pub mod stream;

pub use csv_file::CsvObservationStream;
pub use generators::{CovariateModel, OutcomeModel, SyntheticGenerator};
pub use stream::ObservationStream;
