use async_trait::async_trait;

use crate::entities::Action;
use crate::error::ScenarioError;

/// Trait for HTTP clients that can issue an action against the target host
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send the request described by `action` and return the response status.
    ///
    /// An `Err` means no response arrived (connection refused, timeout, ...);
    /// any HTTP status, including 4xx and 5xx, is an `Ok`.
    async fn send(&self, action: &Action) -> Result<u16, ScenarioError>;
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for std::sync::Arc<T> {
    async fn send(&self, action: &Action) -> Result<u16, ScenarioError> {
        (**self).send(action).await
    }
}
