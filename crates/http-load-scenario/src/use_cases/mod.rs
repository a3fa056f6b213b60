mod define_behavior;
pub mod ports;
mod select_action;
mod simulate_user;

pub use define_behavior::BehaviorBuilder;
pub use select_action::WeightedSelector;
pub use simulate_user::{Iteration, SimulatedUser};
