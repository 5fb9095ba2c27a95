//! Filesystem season store.

use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::manifest::{MANIFEST_FILE, SeasonManifest, validate_file_name};
use super::source::SeasonSource;
use crate::season::Season;

/// Default data directories, searched in order
pub const DEFAULT_DATA_DIRS: [&str; 2] = ["src/data", "public/data"];

/// Season store backed by one or more data directories
///
/// Each file is looked up in every directory in order; the first hit wins.
#[derive(Debug, Clone)]
pub struct FsSeasonStore {
    dirs: Vec<PathBuf>,
}

impl FsSeasonStore {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Store rooted at `root` using [`DEFAULT_DATA_DIRS`]
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::new(DEFAULT_DATA_DIRS.iter().map(|dir| root.join(dir)))
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Read the first existing copy of `file`
    ///
    /// Returns `Ok(None)` when no directory has it.
    fn read_first(&self, file: &str) -> StoreResult<Option<(PathBuf, String)>> {
        for dir in &self.dirs {
            let path = dir.join(file);
            match fs::read_to_string(&path) {
                Ok(text) => return Ok(Some((path, text))),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("{} not found, trying next data directory", path.display());
                }
                Err(source) => return Err(StoreError::Io { path, source }),
            }
        }
        Ok(None)
    }
}

impl SeasonSource for FsSeasonStore {
    fn manifest(&self) -> StoreResult<SeasonManifest> {
        match self.read_first(MANIFEST_FILE)? {
            Some((path, text)) => {
                serde_json::from_str(&text).map_err(|source| StoreError::Parse { path, source })
            }
            None => {
                info!("No {} in any data directory, no active seasons", MANIFEST_FILE);
                Ok(SeasonManifest::default())
            }
        }
    }

    fn load_season(&self, file: &str) -> StoreResult<Season> {
        let file = validate_file_name(file)?;
        let (path, text) = self
            .read_first(file)?
            .ok_or_else(|| StoreError::SeasonMissing(file.to_string()))?;

        let season = Season::from_json_str(&text).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;
        info!(
            "Loaded season {:?} from {} ({} tournaments)",
            season.number,
            path.display(),
            season.tournaments.len()
        );
        Ok(season)
    }
}
