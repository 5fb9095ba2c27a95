//! Season leaderboards.
//!
//! This module implements:
//! - Aggregation of every placement in a season into per-player totals
//! - Deterministic ranking (points, best place, name)
//! - Rank-numbered rows for display
//! - A manager that loads seasons from a [`crate::store::SeasonSource`] and
//!   builds boards and player summaries on demand

pub mod aggregator;
pub mod manager;
pub mod models;
pub mod ranking;

pub use aggregator::compute_leaderboard;
pub use manager::{LeaderboardError, LeaderboardManager, LeaderboardResult, SeasonBoard};
pub use models::{LeaderboardConfig, LeaderboardRow, PlayerScore, to_rows};
pub use ranking::{NO_PLACE, compare_names, rank_order, sort_scores};
