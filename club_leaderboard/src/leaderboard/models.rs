//! Leaderboard configuration and output types.

use serde::{Deserialize, Serialize};

use crate::identity::ExclusionSet;
use crate::scoring::{HouseTable, KnockoutBonus, OrganizerTable, PlaceAward, ProportionalFund, ScoringPolicy};
use crate::season::Place;

/// Everything that decides how a season is scored
///
/// Passed into every aggregation call, so two calls with different
/// configurations over the same season never interfere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardConfig {
    pub policy: ScoringPolicy,
    pub bonus: KnockoutBonus,
    /// Players removed from rankings, rosters and counts
    pub exclusions: ExclusionSet,
    /// Use scores written in the season file instead of recomputing them
    pub use_recorded_points: bool,
}

impl LeaderboardConfig {
    /// Configuration for a policy with its usual knockout bonus
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            policy,
            bonus: policy.default_bonus(),
            exclusions: ExclusionSet::default(),
            use_recorded_points: true,
        }
    }

    pub fn proportional() -> Self {
        Self::new(ProportionalFund.into())
    }

    pub fn house() -> Self {
        Self::new(HouseTable.into())
    }

    pub fn organizer() -> Self {
        Self::new(OrganizerTable.into())
    }

    pub fn with_bonus(mut self, bonus: KnockoutBonus) -> Self {
        self.bonus = bonus;
        self
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_recorded_points(mut self, enabled: bool) -> Self {
        self.use_recorded_points = enabled;
        self
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self::new(ScoringPolicy::default())
    }
}

/// One player's accumulated score for a season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    /// Display name (first spelling seen, or the roster spelling)
    pub name: String,
    pub base: i64,
    pub knockout_points: i64,
    pub total: i64,
    /// Best (lowest) place achieved, `None` if never placed
    pub best_place: Option<Place>,
}

impl PlayerScore {
    /// Zero row for a roster member without results
    pub fn zero(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: 0,
            knockout_points: 0,
            total: 0,
            best_place: None,
        }
    }

    pub fn points(&self) -> i64 {
        self.total
    }

    pub(crate) fn add(&mut self, base: i64, knockout_points: i64, place: Option<Place>) {
        self.base = self.base.saturating_add(base);
        self.knockout_points = self.knockout_points.saturating_add(knockout_points);
        self.total = self.total.saturating_add(base.saturating_add(knockout_points));
        if let Some(place) = place {
            self.best_place = Some(self.best_place.map_or(place, |best| best.min(place)));
        }
    }
}

/// Externally visible leaderboard line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// 1-based position in the sorted table
    pub rank: usize,
    pub name: String,
    pub points: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub best_place: Option<Place>,
}

/// Project sorted scores into table rows
pub fn to_rows(scores: &[PlayerScore]) -> Vec<LeaderboardRow> {
    scores
        .iter()
        .enumerate()
        .map(|(idx, score)| LeaderboardRow {
            rank: idx + 1,
            name: score.name.clone(),
            points: score.total,
            best_place: score.best_place,
        })
        .collect()
}
