use super::{Action, WaitTime};

/// Everything a load engine needs to drive one kind of simulated user.
///
/// Built and validated through [`crate::use_cases::BehaviorBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct UserBehavior {
    pub(crate) name: String,
    pub(crate) on_start: Vec<Action>,
    pub(crate) actions: Vec<Action>,
    pub(crate) wait_time: WaitTime,
}

impl UserBehavior {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Actions run once, in order, when a simulated user starts
    pub fn on_start(&self) -> &[Action] {
        &self.on_start
    }

    /// Actions picked at random, proportionally to their weight
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn wait_time(&self) -> WaitTime {
        self.wait_time
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.on_start
            .iter()
            .chain(self.actions.iter())
            .find(|action| action.name == name)
    }

    pub fn total_weight(&self) -> u64 {
        self.actions
            .iter()
            .map(|action| u64::from(action.weight.get()))
            .sum()
    }
}
