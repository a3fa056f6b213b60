use std::time::Duration;

use rand::Rng;

use crate::error::ScenarioError;

/// Bounds of the random pause a simulated user takes between two actions.
///
/// A pause is drawn uniformly from the closed interval `[min_ms, max_ms]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTime {
    min_ms: u64,
    max_ms: u64,
}

impl WaitTime {
    pub fn between(min_ms: u64, max_ms: u64) -> Result<Self, ScenarioError> {
        if min_ms > max_ms {
            return Err(ScenarioError::InvalidWaitTime { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    /// No pause at all between actions
    pub fn none() -> Self {
        Self {
            min_ms: 0,
            max_ms: 0,
        }
    }

    pub fn constant(ms: u64) -> Self {
        Self {
            min_ms: ms,
            max_ms: ms,
        }
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    pub fn contains(&self, wait: Duration) -> bool {
        wait >= self.min() && wait <= self.max()
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }
}

impl Default for WaitTime {
    fn default() -> Self {
        Self::none()
    }
}
