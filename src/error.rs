//! Error types shared by the engine, the codec and the application layer.

use thiserror::Error;

/// Everything that can go wrong while building rules, parsing patterns or
/// driving a board.
#[derive(Error, Debug)]
pub enum LifeError {
    /// Neighbour range outside `[0, 8]` or with `min > max`
    #[error("invalid neighbour range [{min}, {max}]: bounds must satisfy 0 <= min <= max <= 8")]
    Range { min: i32, max: i32 },

    /// Malformed rule string or pattern text
    #[error("parse error: {0}")]
    Parse(String),

    /// Value that parsed but is not acceptable
    #[error("validation error: {0}")]
    Validation(String),

    /// Rule name not present in the registry
    #[error("unknown rule set: {0}")]
    UnknownRule(String),

    /// Pattern rows of differing length
    #[error("ragged pattern matrix: row {row} has {found} cells, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The per-step worker pool could not be spawned
    #[error("worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
