mod action;
mod behavior;
mod method;
mod outcome;
mod request;
mod wait_time;
mod weight;

pub use action::Action;
pub use behavior::UserBehavior;
pub use method::Method;
pub use outcome::Outcome;
pub use request::ReceivedRequest;
pub use wait_time::WaitTime;
pub use weight::Weight;
