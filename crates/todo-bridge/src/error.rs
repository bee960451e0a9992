//! Bridge Errors
//!
//! Failures are local to a single call. None of them touch the view-model.

use thiserror::Error;

/// Result alias used across the bridge
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors surfaced by dispatching commands or applying snapshots
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A command or snapshot could not be encoded or decoded as JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A snapshot was valid JSON but not a list of `{name, done}` tasks
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl BridgeError {
    pub fn is_invalid_snapshot(&self) -> bool {
        matches!(self, BridgeError::InvalidSnapshot(_))
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, BridgeError::Serialization(_))
    }
}
