//! Player lookup error types.

use thiserror::Error;

/// Player lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// No active season mentions the player
    #[error("Player not found: {0}")]
    NotFound(String),
}

/// Result type for player lookups
pub type PlayerResult<T> = Result<T, PlayerError>;
