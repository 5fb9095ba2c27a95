//! Fund model: the notional prize pool a tournament's points are split from.

use crate::season::TournamentType;

/// Fund units per entry in a classic tournament
pub const CLASSIC_ENTRY_UNITS: i64 = 10;
/// Fund units per re-entry in a classic tournament
pub const CLASSIC_REENTRY_UNITS: i64 = 10;
/// Fund units per entry in a rebuy (jot) tournament
pub const JOT_ENTRY_UNITS: i64 = 10;
/// Fund units per re-entry in a rebuy (jot) tournament
pub const JOT_REENTRY_UNITS: i64 = 15;
/// Fund units per entry in a bounty tournament (the rest of the buy-in is bounty)
pub const BOUNTY_ENTRY_UNITS: i64 = 5;
/// Fund units per re-entry in a bounty tournament
pub const BOUNTY_REENTRY_UNITS: i64 = 5;

impl TournamentType {
    pub fn entry_units(&self) -> i64 {
        match self {
            TournamentType::Classic => CLASSIC_ENTRY_UNITS,
            TournamentType::Jot => JOT_ENTRY_UNITS,
            TournamentType::Bounty => BOUNTY_ENTRY_UNITS,
        }
    }

    pub fn reentry_units(&self) -> i64 {
        match self {
            TournamentType::Classic => CLASSIC_REENTRY_UNITS,
            TournamentType::Jot => JOT_REENTRY_UNITS,
            TournamentType::Bounty => BOUNTY_REENTRY_UNITS,
        }
    }
}

/// Compute the fund for a tournament
///
/// # Example
///
/// ```
/// use club_leaderboard::scoring::compute_fund;
/// use club_leaderboard::season::TournamentType;
///
/// assert_eq!(compute_fund(TournamentType::Classic, 20, 0), 200);
/// assert_eq!(compute_fund(TournamentType::Jot, 10, 2), 130);
/// assert_eq!(compute_fund(TournamentType::Bounty, 10, 2), 60);
/// ```
pub fn compute_fund(kind: TournamentType, player_count: u32, reentries: u32) -> i64 {
    kind.entry_units() * i64::from(player_count) + kind.reentry_units() * i64::from(reentries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_fund() {
        assert_eq!(compute_fund(TournamentType::Classic, 20, 0), 200);
        assert_eq!(compute_fund(TournamentType::Classic, 20, 5), 250);
    }

    #[test]
    fn test_jot_reentries_cost_more() {
        assert_eq!(compute_fund(TournamentType::Jot, 16, 0), 160);
        assert_eq!(compute_fund(TournamentType::Jot, 16, 4), 220);
    }

    #[test]
    fn test_bounty_fund_is_half() {
        assert_eq!(compute_fund(TournamentType::Bounty, 18, 4), 110);
    }

    #[test]
    fn test_empty_tournament_has_no_fund() {
        for kind in [
            TournamentType::Classic,
            TournamentType::Jot,
            TournamentType::Bounty,
        ] {
            assert_eq!(compute_fund(kind, 0, 0), 0);
        }
    }

    #[test]
    fn test_large_counts_do_not_overflow() {
        let fund = compute_fund(TournamentType::Jot, u32::MAX, u32::MAX);
        assert_eq!(fund, 25 * i64::from(u32::MAX));
    }
}
