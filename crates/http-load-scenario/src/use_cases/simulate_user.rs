use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::Instant;

use super::ports::{HttpClient, Recorder};
use super::WeightedSelector;
use crate::entities::{Action, Outcome, UserBehavior};
use crate::error::ScenarioError;

/// One pass of a simulated user: the action it issued and the pause it took after
#[derive(Debug, Clone, PartialEq)]
pub struct Iteration {
    pub outcome: Outcome,
    pub wait: Duration,
}

/// A single simulated user driving a [`UserBehavior`] through an [`HttpClient`].
///
/// The user is strictly sequential. Running many of them concurrently, ramping
/// them up and turning their outcomes into statistics is the load engine's job.
pub struct SimulatedUser<H, R> {
    behavior: UserBehavior,
    selector: WeightedSelector,
    client: H,
    recorder: R,
    rng: StdRng,
    sleep: bool,
}

impl<H: HttpClient, R: Recorder> SimulatedUser<H, R> {
    pub fn new(behavior: UserBehavior, client: H, recorder: R) -> Result<Self, ScenarioError> {
        let selector = WeightedSelector::new(&behavior)?;
        Ok(Self {
            behavior,
            selector,
            client,
            recorder,
            rng: StdRng::from_entropy(),
            sleep: true,
        })
    }

    /// Make action selection and wait sampling reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Still sample waits, but return immediately instead of sleeping
    pub fn without_sleeping(mut self) -> Self {
        self.sleep = false;
        self
    }

    pub fn behavior(&self) -> &UserBehavior {
        &self.behavior
    }

    /// Issue every on-start action once, in declaration order
    pub async fn start(&mut self) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(self.behavior.on_start().len());
        for action in self.behavior.on_start() {
            outcomes.push(issue(&self.client, &self.recorder, action).await);
        }
        outcomes
    }

    /// Pick one weighted action, issue it, then pause for a sampled wait
    pub async fn run_iteration(&mut self) -> Result<Iteration, ScenarioError> {
        let index = self.selector.pick(&mut self.rng);
        let action = self
            .behavior
            .actions()
            .get(index)
            .ok_or_else(|| ScenarioError::EmptyBehavior(self.behavior.name().to_string()))?;

        let outcome = issue(&self.client, &self.recorder, action).await;

        let wait = self.behavior.wait_time().sample(&mut self.rng);
        if self.sleep && !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }

        Ok(Iteration { outcome, wait })
    }

    /// Run the on-start actions, then `iterations` weighted iterations
    pub async fn run(&mut self, iterations: usize) -> Result<Vec<Iteration>, ScenarioError> {
        self.start().await;
        let mut done = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            done.push(self.run_iteration().await?);
        }
        Ok(done)
    }

    /// Consume the user and return everything its recorder kept
    pub fn into_output(self) -> R::Output {
        self.recorder.into_output()
    }
}

async fn issue<H: HttpClient, R: Recorder>(client: &H, recorder: &R, action: &Action) -> Outcome {
    let started = Instant::now();
    let result = client.send(action).await;
    let elapsed = started.elapsed();

    let (status, error) = match result {
        Ok(status) => {
            tracing::debug!(
                action = %action.name,
                method = %action.method,
                path = %action.path,
                status,
                ?elapsed,
                "action issued"
            );
            (Some(status), None)
        }
        Err(e) => {
            tracing::warn!(
                action = %action.name,
                method = %action.method,
                path = %action.path,
                error = %e,
                "action failed"
            );
            (None, Some(e.to_string()))
        }
    };

    let outcome = Outcome {
        action: action.name.clone(),
        method: action.method,
        path: action.path.clone(),
        status,
        error,
        elapsed,
    };
    recorder.record(outcome.clone());
    outcome
}
