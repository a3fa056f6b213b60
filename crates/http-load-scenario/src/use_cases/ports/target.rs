use async_trait::async_trait;
use std::net::SocketAddr;

use super::Collector;
use crate::error::ScenarioError;

/// Trait for servers standing in for the system under load
#[async_trait]
pub trait Target: Send + Sync + Clone {
    /// Serve until `expected_requests` requests have been collected.
    ///
    /// If `on_ready` is provided, it is called with the bound address
    /// once the server accepts connections.
    async fn run<C, F>(
        &self,
        expected_requests: usize,
        collector: C,
        on_ready: Option<F>,
    ) -> Result<C::Output, ScenarioError>
    where
        C: Collector + 'static,
        F: FnOnce(SocketAddr) + Send + 'static;
}
