//! Season source abstraction.

use log::info;
use std::collections::HashMap;

use super::errors::{StoreError, StoreResult};
use super::manifest::{SeasonManifest, validate_file_name};
use crate::season::Season;

/// Where seasons come from
///
/// Every call returns freshly parsed, immutable records, so concurrent
/// callers always see a consistent snapshot.
pub trait SeasonSource {
    /// Read the list of active season files
    fn manifest(&self) -> StoreResult<SeasonManifest>;

    /// Load one season file by name
    fn load_season(&self, file: &str) -> StoreResult<Season>;

    /// Load every active season in manifest order
    fn load_active_seasons(&self) -> StoreResult<Vec<Season>> {
        let manifest = self.manifest()?;
        let seasons = manifest
            .active
            .iter()
            .map(|file| self.load_season(file))
            .collect::<StoreResult<Vec<_>>>()?;
        info!("Loaded {} active season(s)", seasons.len());
        Ok(seasons)
    }
}

/// In-memory source holding season documents as JSON text
#[derive(Debug, Clone, Default)]
pub struct MemorySeasonSource {
    manifest: SeasonManifest,
    files: HashMap<String, String>,
}

impl MemorySeasonSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a season document and list it as active
    pub fn with_season(mut self, file: impl Into<String>, json: impl Into<String>) -> Self {
        let file = file.into();
        self.manifest.active.push(file.clone());
        self.files.insert(file, json.into());
        self
    }

    /// Add a season document without listing it
    pub fn with_inactive_season(mut self, file: impl Into<String>, json: impl Into<String>) -> Self {
        self.files.insert(file.into(), json.into());
        self
    }
}

impl SeasonSource for MemorySeasonSource {
    fn manifest(&self) -> StoreResult<SeasonManifest> {
        Ok(self.manifest.clone())
    }

    fn load_season(&self, file: &str) -> StoreResult<Season> {
        let file = validate_file_name(file)?;
        let json = self
            .files
            .get(file)
            .ok_or_else(|| StoreError::SeasonMissing(file.to_string()))?;
        Season::from_json_str(json).map_err(|source| StoreError::Parse {
            path: file.into(),
            source,
        })
    }
}
