//! Season storage.
//!
//! This module implements:
//! - The season manifest (`season-list.json`, `{"active": [...]}`)
//! - The [`SeasonSource`] trait hosts implement to supply season records
//! - A filesystem store searching several data directories in order
//! - An in-memory store for tests and embedding
//!
//! The engine itself never touches storage; hosts load seasons here and pass
//! the resulting records into [`crate::leaderboard`] and [`crate::players`].
//!
//! ## Example
//!
//! ```no_run
//! use club_leaderboard::store::{FsSeasonStore, SeasonSource};
//!
//! let store = FsSeasonStore::with_root(".");
//! for season in store.load_active_seasons()? {
//!     println!("season {:?}: {} tournaments", season.number, season.tournaments.len());
//! }
//! # Ok::<(), club_leaderboard::store::StoreError>(())
//! ```

pub mod errors;
pub mod fs;
pub mod manifest;
pub mod source;

pub use errors::{StoreError, StoreResult};
pub use fs::{DEFAULT_DATA_DIRS, FsSeasonStore};
pub use manifest::{MANIFEST_FILE, SeasonManifest};
pub use source::{MemorySeasonSource, SeasonSource};
