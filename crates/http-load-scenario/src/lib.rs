//! HTTP Load Scenario
//!
//! Declares what a simulated user does against a web endpoint: which requests
//! it issues, how often each one is picked, and how long it pauses in between.
//! Running many users, ramping them up and computing statistics is left to a
//! load engine; this crate hands the behavior over and can drive a single user
//! for smoke runs.
//!
//! # Example
//!
//! ```rust,no_run
//! use http_load_scenario::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScenarioError> {
//!     let mut user = SimulatedUser::new(
//!         website_user()?,
//!         Reqwest::new("http://127.0.0.1:8080"),
//!         DefaultRecorder::new(),
//!     )?;
//!
//!     user.run(10).await?;
//!
//!     for outcome in user.into_output() {
//!         println!("{} {} -> {:?}", outcome.method, outcome.path, outcome.status);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod adapters;
pub mod entities;
pub mod error;
pub mod use_cases;
pub mod website_user;

pub use error::ScenarioError;

#[cfg(feature = "axum")]
pub use adapters::gateways::Axum;
#[cfg(feature = "reqwest")]
pub use adapters::gateways::Reqwest;
#[cfg(feature = "goose")]
pub use adapters::gateways::website_user_scenario;

/// Default recorder implementation that keeps every outcome in a Vec
pub struct DefaultRecorder {
    outcomes: std::sync::Mutex<Vec<entities::Outcome>>,
}

impl DefaultRecorder {
    pub fn new() -> Self {
        Self {
            outcomes: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for DefaultRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl use_cases::ports::Recorder for DefaultRecorder {
    type Output = Vec<entities::Outcome>;

    fn record(&self, outcome: entities::Outcome) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push(outcome);
        }
    }

    fn into_output(self) -> Self::Output {
        self.outcomes.into_inner().unwrap_or_default()
    }
}

/// Default collector implementation that collects received requests into a Vec
pub struct DefaultCollector {
    requests: std::sync::Mutex<Vec<entities::ReceivedRequest>>,
}

impl DefaultCollector {
    pub fn new() -> Self {
        Self {
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for DefaultCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl use_cases::ports::Collector for DefaultCollector {
    type Output = Vec<entities::ReceivedRequest>;

    fn collect(&self, request: entities::ReceivedRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }

    fn into_output(self) -> Self::Output {
        self.requests.into_inner().unwrap_or_default()
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::entities::{
        Action, Method, Outcome, ReceivedRequest, UserBehavior, WaitTime, Weight,
    };
    pub use crate::error::ScenarioError;
    pub use crate::use_cases::ports::{Collector, HttpClient, Recorder, Target};
    pub use crate::use_cases::{BehaviorBuilder, Iteration, SimulatedUser, WeightedSelector};
    pub use crate::website_user::website_user;
    pub use crate::{DefaultCollector, DefaultRecorder};

    #[cfg(feature = "axum")]
    pub use crate::Axum;
    #[cfg(feature = "reqwest")]
    pub use crate::Reqwest;
    #[cfg(feature = "goose")]
    pub use crate::website_user_scenario;

    pub use serde_json::json;
}
