//! Engine configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::path::PathBuf;

use crate::identity::ExclusionSet;
use crate::leaderboard::LeaderboardConfig;
use crate::scoring::{KnockoutBonus, ScoringPolicy};
use crate::store::{DEFAULT_DATA_DIRS, FsSeasonStore};

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Scoring policy, knockout bonus and exclusions
    pub leaderboard: LeaderboardConfig,
    /// Season data directories, searched in order
    pub data_dirs: Vec<PathBuf>,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables:
    /// - `LEADERBOARD_POLICY`: `proportional`, `house` or `organizer` (default: organizer)
    /// - `LEADERBOARD_BOUNTY_UNIT`: points per knockout (default: the policy's own)
    /// - `LEADERBOARD_BOUNTY_ONLY`: credit knockouts only in bounty tournaments
    ///   (default: the policy's own)
    /// - `LEADERBOARD_EXCLUDED`: comma-separated player names to hide
    /// - `LEADERBOARD_USE_RECORDED_POINTS`: honor scores written in season files (default: true)
    /// - `SEASON_DATA_DIRS`: comma-separated data directories (default: `src/data,public/data`)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is present but invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns error if a variable is present but invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let policy = match lookup("LEADERBOARD_POLICY") {
            Some(value) => value.parse::<ScoringPolicy>().map_err(|e| ConfigError::Invalid {
                var: "LEADERBOARD_POLICY".to_string(),
                reason: e.to_string(),
            })?,
            None => ScoringPolicy::default(),
        };

        let mut leaderboard = LeaderboardConfig::new(policy);

        if let Some(value) = lookup("LEADERBOARD_BOUNTY_UNIT") {
            leaderboard.bonus.unit_value =
                value.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "LEADERBOARD_BOUNTY_UNIT".to_string(),
                    reason: format!("Must be an integer, got {value:?}"),
                })?;
        }

        leaderboard.bonus.bounty_only =
            parse_lookup_or(&lookup, "LEADERBOARD_BOUNTY_ONLY", leaderboard.bonus.bounty_only);
        leaderboard.use_recorded_points =
            parse_lookup_or(&lookup, "LEADERBOARD_USE_RECORDED_POINTS", true);
        leaderboard.exclusions =
            ExclusionSet::new(split_list(lookup("LEADERBOARD_EXCLUDED").as_deref()));

        let data_dirs = match lookup("SEASON_DATA_DIRS") {
            Some(value) => split_list(Some(&value)).into_iter().map(PathBuf::from).collect(),
            None => DEFAULT_DATA_DIRS.iter().map(PathBuf::from).collect(),
        };

        Ok(EngineConfig {
            leaderboard,
            data_dirs,
        })
    }

    /// Validate configuration after loading
    ///
    /// # Errors
    ///
    /// Returns error if the bounty unit is negative or no data directory is configured
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leaderboard.bonus.unit_value < 0 {
            return Err(ConfigError::Invalid {
                var: "LEADERBOARD_BOUNTY_UNIT".to_string(),
                reason: "Must not be negative".to_string(),
            });
        }

        if self.data_dirs.is_empty() {
            return Err(ConfigError::MissingRequired {
                var: "SEASON_DATA_DIRS".to_string(),
                hint: "List at least one directory, e.g. src/data".to_string(),
            });
        }

        Ok(())
    }

    /// Filesystem store over the configured data directories
    pub fn store(&self) -> FsSeasonStore {
        FsSeasonStore::new(self.data_dirs.iter().cloned())
    }

    /// Override the knockout bonus
    pub fn with_bonus(mut self, bonus: KnockoutBonus) -> Self {
        self.leaderboard.bonus = bonus;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            leaderboard: LeaderboardConfig::default(),
            data_dirs: DEFAULT_DATA_DIRS.iter().map(PathBuf::from).collect(),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse a looked-up variable with default fallback
fn parse_lookup_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
