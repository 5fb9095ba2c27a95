//! Knockout (bounty) bonus.

use serde::{Deserialize, Serialize};

use crate::season::TournamentType;

/// Points per knockout under the proportional-fund policy
pub const PROPORTIONAL_BOUNTY_UNIT: i64 = 5;

/// Points per knockout under the house table
pub const HOUSE_BOUNTY_UNIT: i64 = 1;

/// Additive bonus of `unit_value` points per knockout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutBonus {
    pub unit_value: i64,
    /// Only credit knockouts scored in bounty tournaments
    pub bounty_only: bool,
}

impl KnockoutBonus {
    /// No knockout points at all
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Knockouts count in every tournament type
    pub fn per_knockout(unit_value: i64) -> Self {
        Self {
            unit_value,
            bounty_only: false,
        }
    }

    /// Knockouts count only in bounty tournaments
    pub fn bounty_tournaments(unit_value: i64) -> Self {
        Self {
            unit_value,
            bounty_only: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.unit_value != 0
    }

    /// Bonus for `knockouts` eliminations in a tournament of the given type
    pub fn award(&self, kind: Option<TournamentType>, knockouts: u32) -> i64 {
        if self.bounty_only && kind != Some(TournamentType::Bounty) {
            return 0;
        }
        self.unit_value.saturating_mul(i64::from(knockouts))
    }
}
