use std::collections::HashSet;

use crate::entities::{Action, UserBehavior, WaitTime, Weight};
use crate::error::ScenarioError;

/// Builder for user behaviors with a fluent API.
///
/// Validation happens once, in [`BehaviorBuilder::build`]: weights must be
/// positive, action names unique, paths absolute, JSON payloads serializable
/// and wait bounds ordered.
///
/// # Example
///
/// ```rust
/// use http_load_scenario::prelude::*;
///
/// let behavior = BehaviorBuilder::new("WebsiteUser")
///     .wait_between(1000, 2000)
///     .weighted(Action::get("index", "/"), 2)
///     .weighted(Action::post("submit", "/").with_json(&json!({"data": "x"})), 3)
///     .build()
///     .unwrap();
///
/// assert_eq!(behavior.total_weight(), 5);
/// ```
pub struct BehaviorBuilder {
    name: String,
    on_start: Vec<Action>,
    actions: Vec<(Action, u32)>,
    wait_bounds: (u64, u64),
}

impl BehaviorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_start: Vec::new(),
            actions: Vec::new(),
            wait_bounds: (0, 0),
        }
    }

    /// Add a weighted action, keeping the weight it already carries
    pub fn action(mut self, action: Action) -> Self {
        let weight = action.weight.get();
        self.actions.push((action, weight));
        self
    }

    /// Add several weighted actions
    pub fn actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        for action in actions {
            self = self.action(action);
        }
        self
    }

    /// Add an action with a raw weight, checked at build time
    pub fn weighted(mut self, action: Action, weight: u32) -> Self {
        self.actions.push((action, weight));
        self
    }

    /// Add an action run once when each simulated user starts
    pub fn on_start(mut self, action: Action) -> Self {
        self.on_start.push(action);
        self
    }

    pub fn wait_between(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.wait_bounds = (min_ms, max_ms);
        self
    }

    pub fn wait_time(self, wait_time: WaitTime) -> Self {
        let min_ms = u64::try_from(wait_time.min().as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(wait_time.max().as_millis()).unwrap_or(u64::MAX);
        self.wait_between(min_ms, max_ms)
    }

    pub fn build(self) -> Result<UserBehavior, ScenarioError> {
        let (min_ms, max_ms) = self.wait_bounds;
        let wait_time = WaitTime::between(min_ms, max_ms)?;

        if self.actions.is_empty() {
            return Err(ScenarioError::EmptyBehavior(self.name));
        }

        let actions = self
            .actions
            .into_iter()
            .map(|(action, weight)| Ok(action.with_weight(Weight::new(weight)?)))
            .collect::<Result<Vec<_>, ScenarioError>>()?;

        let mut seen = HashSet::new();
        for action in self.on_start.iter().chain(actions.iter()) {
            if !action.path.starts_with('/') {
                return Err(ScenarioError::InvalidPath(action.path.clone()));
            }
            if let Some(reason) = action.payload_error() {
                return Err(ScenarioError::InvalidPayload {
                    action: action.name.clone(),
                    reason: reason.to_string(),
                });
            }
            if !seen.insert(action.name.as_str()) {
                return Err(ScenarioError::DuplicateAction(action.name.clone()));
            }
        }

        Ok(UserBehavior {
            name: self.name,
            on_start: self.on_start,
            actions,
            wait_time,
        })
    }
}
