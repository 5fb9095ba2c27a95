//! Scoring policies: how many base points a finishing place is worth.
//!
//! Policies form a closed set. Each variant is its own type implementing
//! [`PlaceAward`]; [`ScoringPolicy`] dispatches to them with `enum_dispatch`
//! so callers select a policy by configuration and the aggregator stays
//! policy-agnostic.

use enum_dispatch::enum_dispatch;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::bonus::{HOUSE_BOUNTY_UNIT, KnockoutBonus, PROPORTIONAL_BOUNTY_UNIT};
use crate::season::Place;

/// House table awards for places 1 through 5
pub const HOUSE_TABLE: [i64; 5] = [10, 7, 5, 3, 2];

/// House table award for place 6 and below
pub const HOUSE_TABLE_FLOOR: i64 = 1;

/// Organizer table awards for places 1 through 5; everyone else gets nothing
pub const ORGANIZER_TABLE: [i64; 5] = [100, 50, 30, 20, 10];

/// Inputs a policy may look at when awarding one placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardContext {
    /// Tournament fund, see [`super::compute_fund`]
    pub fund: i64,
    pub player_count: u32,
    pub place: Place,
}

/// Base-point award for a finishing place
#[enum_dispatch]
pub trait PlaceAward {
    /// Base points for the placement described by `ctx`
    fn base_award(&self, ctx: &AwardContext) -> i64;

    /// Whether the award depends on the tournament fund
    fn uses_fund(&self) -> bool;

    /// Knockout bonus this policy is normally paired with
    fn default_bonus(&self) -> KnockoutBonus;

    fn name(&self) -> &'static str;
}

/// Top half of the field splits the fund by descending integer weights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProportionalFund;

/// Hand-authored table where every finisher scores at least one point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HouseTable;

/// Organizer's table: only the top five score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrganizerTable;

/// Selectable scoring policy
#[enum_dispatch(PlaceAward)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPolicy {
    ProportionalFund,
    HouseTable,
    OrganizerTable,
}

impl ProportionalFund {
    /// Number of scoring places: half the field, rounded down
    pub fn winners(player_count: u32) -> u32 {
        player_count / 2
    }

    /// Sum of all weights `1 + 2 + … + winners`
    pub fn weight_pool(winners: u32) -> i64 {
        let winners = i64::from(winners);
        winners * (winners + 1) / 2
    }
}

impl PlaceAward for ProportionalFund {
    fn base_award(&self, ctx: &AwardContext) -> i64 {
        let winners = Self::winners(ctx.player_count);
        if winners < 1 || ctx.place < 1 || ctx.place > winners {
            return 0;
        }

        let weight = i128::from(winners - ctx.place + 1);
        let pool = i128::from(Self::weight_pool(winners));
        let share = i128::from(ctx.fund) * weight;

        // Half rounds up, as Math.round does
        let award = (2 * share + pool).div_euclid(2 * pool);
        i64::try_from(award).unwrap_or(i64::MAX)
    }

    fn uses_fund(&self) -> bool {
        true
    }

    fn default_bonus(&self) -> KnockoutBonus {
        KnockoutBonus::bounty_tournaments(PROPORTIONAL_BOUNTY_UNIT)
    }

    fn name(&self) -> &'static str {
        "proportional"
    }
}

impl PlaceAward for HouseTable {
    fn base_award(&self, ctx: &AwardContext) -> i64 {
        match ctx.place {
            0 => 0,
            place => HOUSE_TABLE
                .get(place as usize - 1)
                .copied()
                .unwrap_or(HOUSE_TABLE_FLOOR),
        }
    }

    fn uses_fund(&self) -> bool {
        false
    }

    fn default_bonus(&self) -> KnockoutBonus {
        KnockoutBonus::per_knockout(HOUSE_BOUNTY_UNIT)
    }

    fn name(&self) -> &'static str {
        "house"
    }
}

impl PlaceAward for OrganizerTable {
    fn base_award(&self, ctx: &AwardContext) -> i64 {
        match ctx.place {
            0 => 0,
            place => ORGANIZER_TABLE
                .get(place as usize - 1)
                .copied()
                .unwrap_or(0),
        }
    }

    fn uses_fund(&self) -> bool {
        false
    }

    fn default_bonus(&self) -> KnockoutBonus {
        KnockoutBonus::disabled()
    }

    fn name(&self) -> &'static str {
        "organizer"
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        OrganizerTable.into()
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unknown policy name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown scoring policy: {0}")]
pub struct UnknownPolicy(pub String);

impl FromStr for ScoringPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "proportional" | "fund" => Ok(ProportionalFund.into()),
            "house" => Ok(HouseTable.into()),
            "organizer" | "organiser" => Ok(OrganizerTable.into()),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::compute_fund;
    use crate::season::TournamentType;

    fn ctx(fund: i64, player_count: u32, place: Place) -> AwardContext {
        AwardContext {
            fund,
            player_count,
            place,
        }
    }

    #[test]
    fn test_proportional_twenty_player_classic() {
        let fund = compute_fund(TournamentType::Classic, 20, 0);
        let policy = ScoringPolicy::from(ProportionalFund);
        assert_eq!(ProportionalFund::weight_pool(10), 55);
        assert_eq!(policy.base_award(&ctx(fund, 20, 1)), 36);
        assert_eq!(policy.base_award(&ctx(fund, 20, 10)), 4);
        assert_eq!(policy.base_award(&ctx(fund, 20, 11)), 0);
    }

    #[test]
    fn test_proportional_needs_two_players() {
        let policy = ProportionalFund;
        assert_eq!(policy.base_award(&ctx(10, 1, 1)), 0);
        assert_eq!(policy.base_award(&ctx(20, 2, 1)), 20);
        assert_eq!(policy.base_award(&ctx(20, 2, 2)), 0);
    }

    #[test]
    fn test_proportional_half_rounds_up() {
        // winners = 3, pool = 6; fund 3 → place 3 weight 1 → 0.5 → 1
        assert_eq!(ProportionalFund.base_award(&ctx(3, 6, 3)), 1);
        // place 2 weight 2 → 1.0
        assert_eq!(ProportionalFund.base_award(&ctx(3, 6, 2)), 1);
        // place 1 weight 3 → 1.5 → 2
        assert_eq!(ProportionalFund.base_award(&ctx(3, 6, 1)), 2);
    }

    #[test]
    fn test_house_table() {
        let expected = [(1, 10), (2, 7), (3, 5), (4, 3), (5, 2), (6, 1), (40, 1)];
        for (place, points) in expected {
            assert_eq!(HouseTable.base_award(&ctx(0, 0, place)), points, "place {place}");
        }
        assert_eq!(HouseTable.base_award(&ctx(0, 0, 0)), 0);
    }

    #[test]
    fn test_organizer_table_ignores_fund() {
        let policy = ScoringPolicy::from(OrganizerTable);
        assert_eq!(policy.base_award(&ctx(10_000, 50, 1)), 100);
        assert_eq!(policy.base_award(&ctx(0, 0, 5)), 10);
        assert_eq!(policy.base_award(&ctx(10_000, 50, 6)), 0);
    }

    #[test]
    fn test_policy_metadata() {
        let proportional = ScoringPolicy::from(ProportionalFund);
        assert!(proportional.uses_fund());
        assert_eq!(proportional.default_bonus().unit_value, 5);
        assert!(proportional.default_bonus().bounty_only);

        let house = ScoringPolicy::from(HouseTable);
        assert!(!house.uses_fund());
        assert_eq!(house.default_bonus(), KnockoutBonus::per_knockout(1));

        let organizer = ScoringPolicy::default();
        assert_eq!(organizer.name(), "organizer");
        assert!(!organizer.default_bonus().is_enabled());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "Proportional".parse::<ScoringPolicy>(),
            Ok(ScoringPolicy::from(ProportionalFund))
        );
        assert_eq!(
            "house".parse::<ScoringPolicy>(),
            Ok(ScoringPolicy::from(HouseTable))
        );
        assert_eq!(
            " organizer ".parse::<ScoringPolicy>(),
            Ok(ScoringPolicy::from(OrganizerTable))
        );
        assert_eq!(
            "elo".parse::<ScoringPolicy>(),
            Err(UnknownPolicy("elo".to_string()))
        );
        assert_eq!(ScoringPolicy::from(HouseTable).to_string(), "house");
    }
}
