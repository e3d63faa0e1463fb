use crate::core::Observation;
use crate::error::SampleError;

/// Pull-based source of [`Observation`]s.
///
/// Implementations may be finite datasets (CSV files) or seeded generators.
/// Streams only feed the in-memory [`Sample`](crate::core::Sample); estimators
/// never consume them incrementally.
pub trait ObservationStream {
    /// Indicates whether the stream *may* produce more observations.
    ///
    /// This call should be cheap and side effect free. If it returns `false`,
    /// a subsequent call to [`next_observation`] must return `None`.
    fn has_more_observations(&self) -> bool;

    /// Produces the next observation, `None` at end of stream, or the error
    /// of a malformed record.
    fn next_observation(&mut self) -> Option<Result<Observation, SampleError>>;

    /// Resets the stream to its initial state.
    ///
    /// File-backed streams reopen their source; generators re-seed the RNG and
    /// clear their counters. Fails when the source cannot be reopened.
    fn restart(&mut self) -> Result<(), SampleError>;
}
