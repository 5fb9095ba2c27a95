//! Season records.
//!
//! This module provides:
//! - Typed, immutable records for seasons, tournaments and placements
//! - The loose on-disk schema and its one-time conversion into typed records
//! - Roster resolution and season overview statistics
//!
//! ## Example
//!
//! ```
//! use club_leaderboard::season::{Season, TournamentType};
//!
//! let season = Season::from_json_str(r#"{
//!     "season": 1,
//!     "tournaments": [{
//!         "id": 1, "type": "classic", "playersCount": 12, "reentries": 2,
//!         "placements": [{"name": "Alice", "place": 1}, {"name": "Bob", "place": "?"}]
//!     }]
//! }"#)?;
//!
//! let tournament = &season.tournaments[0];
//! assert_eq!(tournament.kind, Some(TournamentType::Classic));
//! assert_eq!(tournament.placements[1].place, None);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod models;
pub mod raw;
pub mod roster;

pub use models::{
    Place, Placement, Season, SeasonNumber, Tournament, TournamentType, parse_date_label,
};
pub use raw::{RawPlacement, RawSeason, RawTournament};
pub use roster::SeasonOverview;
