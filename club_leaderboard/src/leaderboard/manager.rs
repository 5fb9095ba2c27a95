//! Leaderboard manager tying a season source to the scoring engine.

use log::info;
use serde::Serialize;
use thiserror::Error;

use super::aggregator::compute_leaderboard;
use super::models::{LeaderboardConfig, LeaderboardRow, to_rows};
use crate::players::{PlayerError, PlayerSummary, summarize_player};
use crate::season::{Season, SeasonOverview};
use crate::store::{SeasonSource, StoreError};

/// Leaderboard errors
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Player(#[from] PlayerError),
}

impl LeaderboardError {
    /// Message safe to show to site visitors
    pub fn client_message(&self) -> String {
        match self {
            LeaderboardError::Store(e) => e.client_message(),
            LeaderboardError::Player(e) => e.to_string(),
        }
    }
}

pub type LeaderboardResult<T> = Result<T, LeaderboardError>;

/// Ranked table for one season, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonBoard {
    pub overview: SeasonOverview,
    pub rows: Vec<LeaderboardRow>,
}

impl SeasonBoard {
    /// Score `season` under `config`
    pub fn build(season: &Season, config: &LeaderboardConfig) -> Self {
        Self {
            overview: season.overview(&config.exclusions),
            rows: to_rows(&compute_leaderboard(season, config)),
        }
    }
}

/// Leaderboard manager
///
/// Holds no season state; every call reloads from the source.
#[derive(Debug, Clone)]
pub struct LeaderboardManager<S> {
    source: S,
    config: LeaderboardConfig,
}

impl<S: SeasonSource> LeaderboardManager<S> {
    /// Create a new leaderboard manager
    pub fn new(source: S, config: LeaderboardConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &LeaderboardConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Boards for every active season, in manifest order
    pub fn season_boards(&self) -> LeaderboardResult<Vec<SeasonBoard>> {
        let seasons = self.source.load_active_seasons()?;
        let boards: Vec<SeasonBoard> = seasons
            .iter()
            .map(|season| SeasonBoard::build(season, &self.config))
            .collect();
        info!(
            "Built {} season board(s) with the {} policy",
            boards.len(),
            self.config.policy
        );
        Ok(boards)
    }

    /// Board for a single season file, listed or not
    pub fn season_board(&self, file: &str) -> LeaderboardResult<SeasonBoard> {
        let season = self.source.load_season(file)?;
        Ok(SeasonBoard::build(&season, &self.config))
    }

    /// Cross-season statistics for one player over the active seasons
    pub fn player_summary(&self, name: &str) -> LeaderboardResult<PlayerSummary> {
        let seasons = self.source.load_active_seasons()?;
        Ok(summarize_player(&seasons, name, &self.config.exclusions)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::ExclusionSet;
    use crate::store::MemorySeasonSource;

    const SEASON_ONE: &str = r#"{
        "season": 1,
        "players": ["Anna", "Boris", "Vera"],
        "tournaments": [
            {"type": "classic", "playersCount": 3, "placements": [
                {"name": "Anna", "place": 1},
                {"name": "Boris", "place": 2}
            ]}
        ]
    }"#;

    fn manager() -> LeaderboardManager<MemorySeasonSource> {
        let source = MemorySeasonSource::new().with_season("season-1.json", SEASON_ONE);
        LeaderboardManager::new(source, LeaderboardConfig::organizer())
    }

    #[test]
    fn test_season_boards() {
        let boards = manager().season_boards().unwrap();
        assert_eq!(boards.len(), 1);

        let board = &boards[0];
        assert_eq!(board.overview.season, Some(1));
        assert_eq!(board.overview.unique_players, 3);
        let names: Vec<&str> = board.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Boris", "Vera"]);
        assert_eq!(board.rows[0].points, 100);
        assert_eq!(board.rows[2].points, 0);
    }

    #[test]
    fn test_player_summary_not_found() {
        let err = manager().player_summary("Nobody").unwrap_err();
        assert!(matches!(err, LeaderboardError::Player(PlayerError::NotFound(_))));
        assert!(err.client_message().contains("Nobody"));
    }

    #[test]
    fn test_player_summary_respects_exclusions() {
        let source = MemorySeasonSource::new().with_season("season-1.json", SEASON_ONE);
        let config =
            LeaderboardConfig::organizer().with_exclusions(ExclusionSet::new(["boris"]));
        let manager = LeaderboardManager::new(source, config);

        assert!(manager.player_summary("Anna").is_ok());
        assert!(manager.player_summary("Boris").is_err());
        let board = manager.season_board("season-1.json").unwrap();
        assert!(board.rows.iter().all(|r| r.name != "Boris"));
    }

    #[test]
    fn test_missing_season_file() {
        let err = manager().season_board("season-9.json").unwrap_err();
        assert!(matches!(
            err,
            LeaderboardError::Store(StoreError::SeasonMissing(_))
        ));
    }
}
