use crate::entities::ReceivedRequest;

/// Trait for collecting the requests a recording target receives
pub trait Collector: Send + Sync {
    /// The type returned when the target shuts down
    type Output: Send;

    /// Called when a request is received
    fn collect(&self, request: ReceivedRequest);

    /// Consume the collector and return the final output
    fn into_output(self) -> Self::Output;
}
