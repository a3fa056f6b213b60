use thiserror::Error;

/// Errors that can occur while defining or running a scenario
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Invalid weight {0}: weights must be positive integers")]
    InvalidWeight(u32),

    #[error("Invalid wait time: min {min_ms}ms is greater than max {max_ms}ms")]
    InvalidWaitTime { min_ms: u64, max_ms: u64 },

    #[error("Invalid path '{0}': paths must start with '/'")]
    InvalidPath(String),

    #[error("Invalid payload for action '{action}': {reason}")]
    InvalidPayload { action: String, reason: String },

    #[error("Duplicate action name '{0}'")]
    DuplicateAction(String),

    #[error("Behavior '{0}' has no weighted actions")]
    EmptyBehavior(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Load engine error: {0}")]
    Engine(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
