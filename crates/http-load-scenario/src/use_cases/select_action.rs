use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::entities::{Action, UserBehavior};
use crate::error::ScenarioError;

/// Picks the next action of a behavior with probability proportional to its weight
#[derive(Debug, Clone)]
pub struct WeightedSelector {
    index: WeightedIndex<u32>,
}

impl WeightedSelector {
    pub fn new(behavior: &UserBehavior) -> Result<Self, ScenarioError> {
        let index = WeightedIndex::new(behavior.actions().iter().map(|a| a.weight.get()))
            .map_err(|_| ScenarioError::EmptyBehavior(behavior.name().to_string()))?;
        Ok(Self { index })
    }

    /// Index into `behavior.actions()` of the next action to run
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index.sample(rng)
    }

    pub fn select<'b, R: Rng + ?Sized>(
        &self,
        behavior: &'b UserBehavior,
        rng: &mut R,
    ) -> Option<&'b Action> {
        behavior.actions().get(self.pick(rng))
    }
}
