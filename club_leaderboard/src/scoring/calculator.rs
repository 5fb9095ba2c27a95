//! Single-placement points calculator.
//!
//! Answers "how many points would this finish be worth" without a season,
//! using the same fund model, policy and bonus as the aggregator.

use serde::{Deserialize, Serialize};

use super::bonus::KnockoutBonus;
use super::fund::compute_fund;
use super::policy::{AwardContext, PlaceAward, ScoringPolicy};
use crate::season::{Place, TournamentType};

/// Hypothetical finish to price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub kind: TournamentType,
    pub player_count: u32,
    pub reentries: u32,
    pub place: Place,
    pub knockouts: u32,
}

/// Calculator result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsQuote {
    pub fund: i64,
    pub base: i64,
    pub bounty: i64,
    pub points: i64,
}

/// Price a single finish
///
/// # Example
///
/// ```
/// use club_leaderboard::scoring::{
///     KnockoutBonus, ProportionalFund, QuoteRequest, ScoringPolicy, quote_points,
/// };
/// use club_leaderboard::season::TournamentType;
///
/// let policy = ScoringPolicy::from(ProportionalFund);
/// let quote = quote_points(
///     &policy,
///     &KnockoutBonus::bounty_tournaments(5),
///     &QuoteRequest {
///         kind: TournamentType::Bounty,
///         player_count: 10,
///         reentries: 0,
///         place: 1,
///         knockouts: 2,
///     },
/// );
/// assert_eq!(quote.fund, 50);
/// assert_eq!(quote.base, 17);
/// assert_eq!(quote.bounty, 10);
/// assert_eq!(quote.points, 27);
/// ```
pub fn quote_points(
    policy: &ScoringPolicy,
    bonus: &KnockoutBonus,
    request: &QuoteRequest,
) -> PointsQuote {
    let fund = compute_fund(request.kind, request.player_count, request.reentries);
    let base = policy.base_award(&AwardContext {
        fund,
        player_count: request.player_count,
        place: request.place,
    });
    let bounty = bonus.award(Some(request.kind), request.knockouts);

    PointsQuote {
        fund,
        base,
        bounty,
        points: base + bounty,
    }
}
