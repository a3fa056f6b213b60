use std::num::NonZeroU32;

use crate::error::ScenarioError;

/// Relative selection weight of an action. Always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weight(NonZeroU32);

impl Weight {
    pub const ONE: Weight = Weight(NonZeroU32::MIN);

    pub fn new(value: u32) -> Result<Self, ScenarioError> {
        NonZeroU32::new(value)
            .map(Weight)
            .ok_or(ScenarioError::InvalidWeight(value))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Weight {
    type Error = ScenarioError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
