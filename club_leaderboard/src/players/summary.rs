//! Cross-season statistics for one player.

use serde::Serialize;

use super::errors::{PlayerError, PlayerResult};
use crate::identity::{ExclusionSet, PlayerKey};
use crate::season::{Place, Season, SeasonNumber};

/// Statistics for one player in one season
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeasonSummary {
    pub season: Option<SeasonNumber>,
    /// Tournaments with a placement for the player
    pub games: u32,
    pub wins: u32,
    pub best_place: Option<Place>,
    /// Sum of valid places
    pub total_place: u64,
    /// Placements that carried a valid place
    pub placed_games: u32,
    pub knockouts: u32,
}

impl SeasonSummary {
    fn for_season(season: &Season, key: &PlayerKey) -> Self {
        let mut summary = SeasonSummary {
            season: season.number,
            ..Self::default()
        };

        for placement in season.tournaments.iter().filter_map(|t| t.placement_of(key)) {
            summary.games += 1;
            if let Some(place) = placement.place {
                summary.placed_games += 1;
                summary.total_place = summary.total_place.saturating_add(u64::from(place));
                summary.best_place = Some(summary.best_place.map_or(place, |b| b.min(place)));
                if place == 1 {
                    summary.wins += 1;
                }
            }
            summary.knockouts = summary
                .knockouts
                .saturating_add(placement.effective_knockouts());
        }

        summary
    }

    /// Sum of valid places over all games; unplaced games count as zero
    pub fn average_place(&self) -> Option<f64> {
        average(self.total_place, self.games)
    }
}

/// Statistics for one player across every season that mentions them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    /// Name as requested
    pub name: String,
    /// Per-season breakdown, ordered by season number
    pub seasons: Vec<SeasonSummary>,
    pub games: u32,
    pub wins: u32,
    pub best_place: Option<Place>,
    pub average_place: Option<f64>,
    pub knockouts: u32,
}

impl PlayerSummary {
    /// Season numbers the player appears in, ascending
    pub fn season_numbers(&self) -> Vec<Option<SeasonNumber>> {
        self.seasons.iter().map(|s| s.season).collect()
    }
}

/// Summarize a player over all given seasons
///
/// A season counts when the player is on its explicit roster or has a
/// placement in any of its tournaments. Names match after normalization.
///
/// # Errors
///
/// Returns [`PlayerError::NotFound`] for a blank or excluded name, or when no
/// season mentions the player.
///
/// # Example
///
/// ```
/// use club_leaderboard::identity::ExclusionSet;
/// use club_leaderboard::players::summarize_player;
/// use club_leaderboard::season::{Placement, Season, Tournament, TournamentType};
///
/// let season = Season::new(1).with_tournament(
///     Tournament::new(TournamentType::Classic, 6, 0)
///         .with_placement(Placement::new("Alice", 1).with_knockouts(2)),
/// );
///
/// let summary = summarize_player(&[season], "alice", &ExclusionSet::default())?;
/// assert_eq!(summary.wins, 1);
/// assert_eq!(summary.knockouts, 2);
/// # Ok::<(), club_leaderboard::players::PlayerError>(())
/// ```
pub fn summarize_player(
    seasons: &[Season],
    name: &str,
    exclusions: &ExclusionSet,
) -> PlayerResult<PlayerSummary> {
    let key = PlayerKey::new(name);
    if key.is_empty() || exclusions.contains_key(&key) {
        return Err(PlayerError::NotFound(name.to_string()));
    }

    let mut per_season: Vec<SeasonSummary> = seasons
        .iter()
        .filter(|season| season.mentions_player(&key))
        .map(|season| SeasonSummary::for_season(season, &key))
        .collect();

    if per_season.is_empty() {
        return Err(PlayerError::NotFound(name.to_string()));
    }

    per_season.sort_by_key(|s| s.season.unwrap_or(0));

    let total_place = per_season
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.total_place));
    let games: u32 = per_season.iter().map(|s| s.games).sum();

    Ok(PlayerSummary {
        name: name.trim().to_string(),
        games,
        wins: per_season.iter().map(|s| s.wins).sum(),
        best_place: per_season.iter().filter_map(|s| s.best_place).min(),
        average_place: average(total_place, games),
        knockouts: per_season
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(s.knockouts)),
        seasons: per_season,
    })
}

fn average(total: u64, count: u32) -> Option<f64> {
    (count > 0).then(|| total as f64 / f64::from(count))
}
