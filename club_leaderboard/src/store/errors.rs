//! Season store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Season store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// File exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid season or manifest document
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest lists a season file that no data directory holds
    #[error("Season file not found in any data directory: {0}")]
    SeasonMissing(String),

    /// Manifest entry is not a plain file name
    #[error("Invalid season file name: {0}")]
    InvalidFileName(String),
}

impl StoreError {
    /// Message safe to show to visitors, without filesystem paths
    pub fn client_message(&self) -> String {
        match self {
            StoreError::Io { .. } | StoreError::Parse { .. } => {
                "Season data unavailable".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
