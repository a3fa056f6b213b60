use async_trait::async_trait;
use axum::{
    body::Body,
    extract::State,
    http::{Request as AxumRequest, StatusCode},
    routing::{any, get},
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::sync::{oneshot, Mutex};

use crate::entities::{Method, ReceivedRequest};
use crate::error::ScenarioError;
use crate::use_cases::ports::{Collector, Target};

/// Axum-based recording target.
///
/// Mirrors the ingest service the scenario is aimed at: `POST /` accepts a JSON
/// object with a string `data` field, `GET /` answers 200 and `GET /healthcheck`
/// is a liveness probe. Every request except the probe is collected.
#[derive(Clone)]
pub struct Axum {
    addr: SocketAddr,
}

impl Axum {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    pub fn bind(addr: impl Into<SocketAddr>) -> Self {
        Self::new(addr.into())
    }
}

impl Default for Axum {
    fn default() -> Self {
        Self::new(([127, 0, 0, 1], 0).into())
    }
}

/// Shared state for tracking completion
#[derive(Clone)]
struct CompletionTracker {
    expected: usize,
    received: Arc<AtomicUsize>,
    /// Shutdown signal sender (wrapped in Mutex for Clone)
    shutdown_tx: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl CompletionTracker {
    fn new(expected: usize, shutdown_tx: oneshot::Sender<()>) -> Self {
        Self {
            expected,
            received: Arc::new(AtomicUsize::new(0)),
            shutdown_tx: Arc::new(Mutex::new(Some(shutdown_tx))),
        }
    }

    async fn request_received(&self) {
        let received = self.received.fetch_add(1, Ordering::SeqCst) + 1;
        if received >= self.expected {
            self.shutdown().await;
        }
    }

    async fn shutdown(&self) {
        if let Some(tx) = self.shutdown_tx.lock().await.take() {
            let _ = tx.send(());
        }
    }
}

/// Type-erased collector trait for internal use
trait ErasedCollector: Send + Sync {
    fn collect(&self, request: ReceivedRequest);
}

impl<C: Collector> ErasedCollector for std::sync::Mutex<Option<C>> {
    fn collect(&self, request: ReceivedRequest) {
        if let Ok(guard) = self.lock() {
            if let Some(ref collector) = *guard {
                collector.collect(request);
            }
        }
    }
}

#[derive(Clone)]
struct TargetState {
    collector: Arc<dyn ErasedCollector>,
    completion_tracker: CompletionTracker,
}

/// Status the ingest service answers with for a given request
pub(crate) fn respond(request: &ReceivedRequest) -> StatusCode {
    match (request.method, request.path.as_str()) {
        (Method::Get, "/") => StatusCode::OK,
        (Method::Post, "/") => {
            let has_data = request
                .body_as_json()
                .as_ref()
                .and_then(|json| json.get("data"))
                .is_some_and(|data| data.is_string());
            if has_data {
                StatusCode::OK
            } else {
                StatusCode::BAD_REQUEST
            }
        }
        _ => StatusCode::NOT_FOUND,
    }
}

async fn healthcheck() -> StatusCode {
    StatusCode::OK
}

async fn handle_request(
    State(state): State<TargetState>,
    request: AxumRequest<Body>,
) -> StatusCode {
    let Some(method) = Method::parse(request.method().as_str()) else {
        return StatusCode::METHOD_NOT_ALLOWED;
    };

    let path = request.uri().path().to_string();
    let headers: HashMap<String, String> = request
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map(|b| b.to_vec())
        .unwrap_or_default();

    let received = ReceivedRequest {
        method,
        path,
        headers,
        body,
    };
    let status = respond(&received);
    tracing::debug!(
        method = %received.method,
        path = %received.path,
        status = status.as_u16(),
        "target received request"
    );

    state.collector.collect(received);
    state.completion_tracker.request_received().await;

    status
}

#[async_trait]
impl Target for Axum {
    async fn run<C, F>(
        &self,
        expected_requests: usize,
        collector: C,
        on_ready: Option<F>,
    ) -> Result<C::Output, ScenarioError>
    where
        C: Collector + 'static,
        F: FnOnce(SocketAddr) + Send + 'static,
    {
        // Wrap collector in Mutex<Option<C>> so we can take it out at the end
        let collector_holder: Arc<std::sync::Mutex<Option<C>>> =
            Arc::new(std::sync::Mutex::new(Some(collector)));
        let erased_collector: Arc<dyn ErasedCollector> = collector_holder.clone();

        let (auto_shutdown_tx, auto_shutdown_rx) = oneshot::channel();
        let completion_tracker = CompletionTracker::new(expected_requests, auto_shutdown_tx);
        if expected_requests == 0 {
            completion_tracker.shutdown().await;
        }

        let router = Router::new()
            .route("/healthcheck", get(healthcheck))
            .route("/", any(handle_request))
            .fallback(handle_request)
            .with_state(TargetState {
                collector: erased_collector,
                completion_tracker,
            });

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        let addr = listener.local_addr()?;
        tracing::info!(%addr, expected_requests, "recording target listening");

        if let Some(callback) = on_ready {
            callback(addr);
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                auto_shutdown_rx.await.ok();
            })
            .await?;

        tracing::info!(%addr, "recording target stopped");

        let collector = collector_holder
            .lock()
            .map_err(|e| ScenarioError::Server(e.to_string()))?
            .take()
            .ok_or_else(|| ScenarioError::Server("Collector already taken".to_string()))?;

        Ok(collector.into_output())
    }
}
