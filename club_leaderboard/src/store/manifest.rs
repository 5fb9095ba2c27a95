//! Season manifest (`season-list.json`).

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};

/// File name of the manifest inside a data directory
pub const MANIFEST_FILE: &str = "season-list.json";

/// List of season files currently shown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonManifest {
    #[serde(default)]
    pub active: Vec<String>,
}

impl SeasonManifest {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Reject anything but a bare file name so manifests can't reach outside
/// the data directories
pub fn validate_file_name(file: &str) -> StoreResult<&str> {
    let trimmed = file.trim();
    let invalid = trimmed.is_empty()
        || trimmed.contains('/')
        || trimmed.contains('\\')
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('\0');

    if invalid {
        Err(StoreError::InvalidFileName(file.to_string()))
    } else {
        Ok(trimmed)
    }
}
