//! Scoring: fund model, place awards and knockout bonuses.
//!
//! This module provides:
//! - The fund model (`compute_fund`) per tournament type
//! - Interchangeable scoring policies (proportional fund, house table, organizer table)
//! - The knockout bonus, configured per call rather than hard-coded
//! - Parsing of hand-written scores such as `"140 + 3☠"`
//! - A single-placement calculator
//!
//! ## Example
//!
//! ```
//! use club_leaderboard::scoring::{
//!     AwardContext, PlaceAward, ProportionalFund, ScoringPolicy, compute_fund,
//! };
//! use club_leaderboard::season::TournamentType;
//!
//! let fund = compute_fund(TournamentType::Classic, 20, 0);
//! let policy = ScoringPolicy::from(ProportionalFund);
//! let first = policy.base_award(&AwardContext { fund, player_count: 20, place: 1 });
//! assert_eq!(first, 36);
//! ```

pub mod bonus;
pub mod calculator;
pub mod fund;
pub mod policy;
pub mod score_text;

pub use bonus::{HOUSE_BOUNTY_UNIT, KnockoutBonus, PROPORTIONAL_BOUNTY_UNIT};
pub use calculator::{PointsQuote, QuoteRequest, quote_points};
pub use fund::compute_fund;
pub use policy::{
    AwardContext, HouseTable, OrganizerTable, PlaceAward, ProportionalFund, ScoringPolicy,
    UnknownPolicy,
};
pub use score_text::{RecordedScore, parse_score_text};
