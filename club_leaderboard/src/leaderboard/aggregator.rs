//! Season aggregation: fold every placement into per-player totals.

use log::debug;
use std::collections::HashMap;

use super::models::{LeaderboardConfig, PlayerScore};
use super::ranking::sort_scores;
use crate::identity::PlayerKey;
use crate::scoring::{AwardContext, PlaceAward, compute_fund};
use crate::season::{Placement, Season, Tournament};

/// Compute the ordered leaderboard for a season
///
/// Never fails: tournaments without type, player count or placements are
/// skipped, placements without a valid place earn no base points, and
/// excluded players are dropped before anything is counted. Every roster
/// member without results still gets a zero row.
///
/// # Example
///
/// ```
/// use club_leaderboard::leaderboard::{LeaderboardConfig, compute_leaderboard};
/// use club_leaderboard::season::{Placement, Season, Tournament, TournamentType};
///
/// let season = Season::new(1)
///     .with_roster(["Alice", "Bob", "Carol"])
///     .with_tournament(
///         Tournament::new(TournamentType::Classic, 8, 0)
///             .with_placements([Placement::new("Alice", 2), Placement::new("Bob", 1)]),
///     );
///
/// let scores = compute_leaderboard(&season, &LeaderboardConfig::organizer());
/// let names: Vec<_> = scores.iter().map(|s| (s.name.as_str(), s.total)).collect();
/// assert_eq!(names, vec![("Bob", 100), ("Alice", 50), ("Carol", 0)]);
/// ```
pub fn compute_leaderboard(season: &Season, config: &LeaderboardConfig) -> Vec<PlayerScore> {
    let mut entries: HashMap<PlayerKey, PlayerScore> = HashMap::new();

    for (idx, tournament) in season.tournaments.iter().enumerate() {
        if !tournament.is_scorable() {
            debug!(
                "Skipping tournament {:?} (#{}) in season {:?}: missing type, player count or placements",
                tournament.id,
                idx + 1,
                season.number
            );
            continue;
        }
        score_tournament(tournament, config, &mut entries);
    }

    let explicit_roster = season.has_explicit_roster();
    for name in season.roster(&config.exclusions) {
        entries
            .entry(PlayerKey::new(&name))
            .and_modify(|entry| {
                if explicit_roster {
                    entry.name = name.clone();
                }
            })
            .or_insert_with(|| PlayerScore::zero(name.clone()));
    }

    let mut scores: Vec<PlayerScore> = entries.into_values().collect();
    sort_scores(&mut scores);
    scores
}

fn score_tournament(
    tournament: &Tournament,
    config: &LeaderboardConfig,
    entries: &mut HashMap<PlayerKey, PlayerScore>,
) {
    let player_count = tournament.player_count.unwrap_or(0);
    let fund = match tournament.kind {
        Some(kind) if config.policy.uses_fund() => {
            compute_fund(kind, player_count, tournament.reentries)
        }
        _ => 0,
    };

    for placement in &tournament.placements {
        let key = placement.key();
        if key.is_empty() || config.exclusions.contains_key(&key) {
            continue;
        }

        let base = base_points(placement, fund, player_count, config);
        let knockout_points = config
            .bonus
            .award(tournament.kind, placement.effective_knockouts());

        entries
            .entry(key)
            .or_insert_with(|| PlayerScore::zero(placement.name.trim()))
            .add(base, knockout_points, placement.place);
    }
}

fn base_points(
    placement: &Placement,
    fund: i64,
    player_count: u32,
    config: &LeaderboardConfig,
) -> i64 {
    if let Some(recorded) = placement.recorded.filter(|_| config.use_recorded_points) {
        return recorded.base;
    }

    match placement.place {
        Some(place) => config.policy.base_award(&AwardContext {
            fund,
            player_count,
            place,
        }),
        None => {
            debug!("No valid place for {}, no base points", placement.name);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::ExclusionSet;
    use crate::scoring::{KnockoutBonus, RecordedScore};
    use crate::season::TournamentType;

    fn classic_twenty() -> Tournament {
        Tournament::new(TournamentType::Classic, 20, 0).with_placements([
            Placement::new("Alice", 1),
            Placement::new("Bob", 10),
            Placement::new("Carol", 11),
        ])
    }

    fn find<'a>(scores: &'a [PlayerScore], name: &str) -> &'a PlayerScore {
        scores
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("{name} missing from leaderboard"))
    }

    #[test]
    fn test_proportional_season() {
        let season = Season::new(1).with_tournament(classic_twenty());
        let scores = compute_leaderboard(&season, &LeaderboardConfig::proportional());

        assert_eq!(find(&scores, "Alice").total, 36);
        assert_eq!(find(&scores, "Bob").total, 4);
        assert_eq!(find(&scores, "Carol").total, 0);
        assert_eq!(find(&scores, "Carol").best_place, Some(11));
    }

    #[test]
    fn test_unscorable_tournaments_contribute_nothing() {
        let mut untyped = classic_twenty();
        untyped.kind = None;
        let mut uncounted = classic_twenty();
        uncounted.player_count = None;

        let season = Season::new(1)
            .with_tournament(untyped)
            .with_tournament(uncounted)
            .with_roster(["Alice"]);
        let scores = compute_leaderboard(&season, &LeaderboardConfig::house());

        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0], PlayerScore::zero("Alice"));
    }

    #[test]
    fn test_unplaced_record_keeps_others() {
        let tournament = Tournament::new(TournamentType::Classic, 6, 0).with_placements([
            Placement::unplaced("Ghost").with_knockouts(2),
            Placement::new("Alice", 1),
        ]);
        let season = Season::new(1).with_tournament(tournament);
        let scores = compute_leaderboard(&season, &LeaderboardConfig::house());

        assert_eq!(find(&scores, "Alice").total, 10);
        let ghost = find(&scores, "Ghost");
        assert_eq!(ghost.base, 0);
        assert_eq!(ghost.knockout_points, 2);
        assert_eq!(ghost.best_place, None);
    }

    #[test]
    fn test_recorded_points_override_policy() {
        let tournament = Tournament::new(TournamentType::Bounty, 12, 0).with_placement(
            Placement::new("Alice", 3).with_recorded(RecordedScore {
                base: 140,
                knockouts: 3,
            }),
        );
        let season = Season::new(1).with_tournament(tournament);

        let config = LeaderboardConfig::proportional();
        let scores = compute_leaderboard(&season, &config);
        assert_eq!(scores[0].base, 140);
        assert_eq!(scores[0].knockout_points, 15);

        let recomputed = compute_leaderboard(&season, &config.with_recorded_points(false));
        // 12 players → 6 winners, pool 21, fund 60, weight 4
        assert_eq!(recomputed[0].base, 11);
        assert_eq!(recomputed[0].knockout_points, 15);
    }

    #[test]
    fn test_knockouts_use_configured_unit() {
        let tournament = Tournament::new(TournamentType::Classic, 6, 0)
            .with_placement(Placement::new("Alice", 6).with_knockouts(4));
        let season = Season::new(1).with_tournament(tournament);

        let house = LeaderboardConfig::house();
        assert_eq!(compute_leaderboard(&season, &house)[0].total, 5);

        let no_bonus = LeaderboardConfig::house().with_bonus(KnockoutBonus::disabled());
        assert_eq!(compute_leaderboard(&season, &no_bonus)[0].total, 1);
    }

    #[test]
    fn test_excluded_player_never_appears() {
        let season = Season::new(1)
            .with_tournament(classic_twenty())
            .with_roster(["Alice", "Bob", "Carol", "Dealer"]);
        let config =
            LeaderboardConfig::organizer().with_exclusions(ExclusionSet::new(["alice", "DEALER"]));
        let scores = compute_leaderboard(&season, &config);

        let names: Vec<_> = scores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carol"]);
    }

    #[test]
    fn test_spelling_variants_merge() {
        let season = Season::new(1)
            .with_tournament(
                Tournament::new(TournamentType::Classic, 4, 0)
                    .with_placement(Placement::new("Ivan Petrov", 1)),
            )
            .with_tournament(
                Tournament::new(TournamentType::Classic, 4, 0)
                    .with_placement(Placement::new(" ivan  petrov", 2)),
            );
        let scores = compute_leaderboard(&season, &LeaderboardConfig::organizer());
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].name, "Ivan Petrov");
        assert_eq!(scores[0].total, 150);
    }

    #[test]
    fn test_roster_spelling_wins_for_display() {
        let season = Season::new(1)
            .with_roster(["Ivan Petrov"])
            .with_tournament(
                Tournament::new(TournamentType::Classic, 4, 0)
                    .with_placement(Placement::new("IVAN PETROV", 1)),
            );
        let scores = compute_leaderboard(&season, &LeaderboardConfig::organizer());
        assert_eq!(scores[0].name, "Ivan Petrov");
    }

    #[test]
    fn test_empty_season() {
        let scores = compute_leaderboard(&Season::default(), &LeaderboardConfig::default());
        assert!(scores.is_empty());
    }
}
