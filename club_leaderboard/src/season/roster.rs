//! Roster resolution and season-level statistics.
//!
//! "Who is in this season" is answered in exactly one place. Precedence:
//! 1. the season's explicit `players` list, when non-empty;
//! 2. otherwise the union over tournaments of each tournament's participant
//!    list, falling back to its placement names.
//!
//! Names are deduplicated by [`PlayerKey`]; the first spelling wins.

use serde::Serialize;
use std::collections::HashSet;

use super::models::{Season, SeasonNumber};
use crate::identity::{ExclusionSet, PlayerKey};

/// Headline numbers shown above a season's table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonOverview {
    pub season: Option<SeasonNumber>,
    pub unique_players: usize,
    pub tournaments: usize,
    pub next_game_date: Option<String>,
    pub final_date: Option<String>,
}

impl Season {
    /// Authoritative roster with excluded players removed
    pub fn roster(&self, exclusions: &ExclusionSet) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();

        let mut push = |name: &str| {
            let key = PlayerKey::new(name);
            if key.is_empty() || exclusions.contains_key(&key) {
                return;
            }
            if seen.insert(key) {
                names.push(name.trim().to_string());
            }
        };

        if self.has_explicit_roster() {
            self.roster.iter().for_each(|name| push(name));
        } else {
            self.tournaments
                .iter()
                .flat_map(|t| t.mentioned_names())
                .for_each(|name| push(name));
        }

        names
    }

    pub fn unique_player_count(&self, exclusions: &ExclusionSet) -> usize {
        self.roster(exclusions).len()
    }

    /// Whether the player belongs to this season by roster or by placement
    pub fn mentions_player(&self, key: &PlayerKey) -> bool {
        self.roster.iter().any(|name| &PlayerKey::new(name) == key)
            || self
                .tournaments
                .iter()
                .any(|t| t.placements.iter().any(|p| &p.key() == key))
    }

    pub fn overview(&self, exclusions: &ExclusionSet) -> SeasonOverview {
        SeasonOverview {
            season: self.number,
            unique_players: self.unique_player_count(exclusions),
            tournaments: self.tournaments.len(),
            next_game_date: self.next_game_date.clone(),
            final_date: self.final_date.clone(),
        }
    }
}
