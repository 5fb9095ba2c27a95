//! # Club Leaderboard
//!
//! Scoring engine for a poker club's season leaderboards.
//!
//! Season files record tournaments (classic, jot, bounty) and their
//! placements. The engine turns them into ranked tables under a
//! configurable scoring policy, and answers per-player questions across
//! seasons. All scoring is pure: records go in, tables come out, and no
//! call mutates its inputs.
//!
//! ## Core Modules
//!
//! - [`season`]: Typed season records and the loose on-disk schema
//! - [`identity`]: Name normalization and exclusion lists
//! - [`scoring`]: Fund model, scoring policies and knockout bonuses
//! - [`leaderboard`]: Aggregation, ranking and the leaderboard manager
//! - [`players`]: Cross-season player summaries
//! - [`store`]: Season manifest and data-directory storage
//! - [`config`]: Environment-driven engine configuration
//!
//! ## Example
//!
//! ```
//! use club_leaderboard::{LeaderboardConfig, Season, compute_leaderboard, to_rows};
//!
//! let season = Season::from_json_str(r#"{
//!     "season": 3,
//!     "players": ["Anna", "Boris", "Vera"],
//!     "tournaments": [{
//!         "type": "bounty", "playersCount": 10,
//!         "placements": [{"name": "Boris", "place": 1, "ko": 2}, {"name": "Anna", "place": 2}]
//!     }]
//! }"#)?;
//!
//! let rows = to_rows(&compute_leaderboard(&season, &LeaderboardConfig::organizer()));
//! assert_eq!(rows[0].name, "Boris");
//! assert_eq!(rows[2].points, 0);
//! # Ok::<(), serde_json::Error>(())
//! ```

/// Environment-driven configuration.
pub mod config;
pub use config::{ConfigError, EngineConfig};

/// Player name normalization and exclusions.
pub mod identity;
pub use identity::{ExclusionSet, PlayerKey, names_match, normalize_name};

/// Season aggregation and ranking.
pub mod leaderboard;
pub use leaderboard::{
    LeaderboardConfig, LeaderboardError, LeaderboardManager, LeaderboardRow, PlayerScore,
    SeasonBoard, compute_leaderboard, to_rows,
};

/// Cross-season player statistics.
pub mod players;
pub use players::{PlayerError, PlayerSummary, summarize_player};

/// Fund model and scoring policies.
pub mod scoring;
pub use scoring::{KnockoutBonus, ScoringPolicy, compute_fund, quote_points};

/// Season records.
pub mod season;
pub use season::{Placement, Season, Tournament, TournamentType};

/// Season storage.
pub mod store;
pub use store::{FsSeasonStore, MemorySeasonSource, SeasonSource, StoreError};
