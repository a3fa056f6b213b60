//! Simple example: one simulated website user against the recording target.
//!
//! The target stands in for the ingest service and shuts down by itself once
//! it has seen every request the user is going to send.

use http_load_scenario::prelude::*;
use std::net::SocketAddr;

const ITERATIONS: usize = 5;

#[tokio::main]
async fn main() -> Result<(), ScenarioError> {
    let addr: SocketAddr = "127.0.0.1:3000"
        .parse()
        .map_err(|_| ScenarioError::Server("invalid listen address".to_string()))?;

    // One on-start request plus one request per iteration
    let expected = 1 + ITERATIONS;
    let target = tokio::spawn(async move {
        Axum::bind(addr)
            .run(expected, DefaultCollector::new(), None::<fn(SocketAddr)>)
            .await
    });

    // Give the listener a moment to bind
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    let mut user = SimulatedUser::new(
        website_user()?,
        Reqwest::new(format!("http://{addr}")),
        DefaultRecorder::new(),
    )?
    .without_sleeping();

    for iteration in user.run(ITERATIONS).await? {
        println!(
            "{} {} -> {:?} (would pause {:?})",
            iteration.outcome.method,
            iteration.outcome.path,
            iteration.outcome.status,
            iteration.wait
        );
    }

    let received = target
        .await
        .map_err(|e| ScenarioError::Server(e.to_string()))??;

    println!("\n=== Received by target ===");
    for (i, req) in received.iter().enumerate() {
        println!("Request {}: {} {}", i + 1, req.method, req.path);
        if let Some(body) = req.body_as_str() {
            if !body.is_empty() {
                println!("  Body: {}", body);
            }
        }
    }

    Ok(())
}
