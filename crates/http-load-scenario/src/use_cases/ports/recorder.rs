use crate::entities::Outcome;

/// Trait for recording the outcome of every issued action
///
/// The `Output` type is what a simulated user hands back once it is done.
/// Aggregating outcomes into statistics is left to the load engine.
pub trait Recorder: Send + Sync {
    /// The type returned when the simulated user is consumed
    type Output: Send;

    /// Called after each issued action
    fn record(&self, outcome: Outcome);

    /// Consume the recorder and return the final output
    fn into_output(self) -> Self::Output;
}
