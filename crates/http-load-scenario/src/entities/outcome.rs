use std::time::Duration;

use super::Method;

/// What a single issued action produced
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub action: String,
    pub method: Method,
    pub path: String,
    /// Response status, when a response arrived
    pub status: Option<u16>,
    /// Transport failure, when it did not
    pub error: Option<String>,
    pub elapsed: Duration,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(status) if (200..400).contains(&status))
    }
}
