//! Typed season records.
//!
//! These are produced once at the boundary (see [`super::raw`]) and never
//! mutated by the engine.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identity::PlayerKey;
use crate::scoring::RecordedScore;

/// Season number as written in the season file
pub type SeasonNumber = u32;

/// Finishing place (1 = winner)
pub type Place = u32;

/// Tournament type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentType {
    /// Standard freezeout with optional re-entries
    Classic,
    /// Rebuy tournament ("jot"), re-entries cost more
    Jot,
    /// Knockout tournament, half of every entry goes to bounties
    Bounty,
}

impl TournamentType {
    /// Parse a type label from a season file
    ///
    /// Accepts `classic`, `jot`, `rebuy` and `bounty` in any case.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "classic" => Some(TournamentType::Classic),
            "jot" | "rebuy" | "rebuy/jot" => Some(TournamentType::Jot),
            "bounty" => Some(TournamentType::Bounty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentType::Classic => "classic",
            TournamentType::Jot => "jot",
            TournamentType::Bounty => "bounty",
        }
    }
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One player's result in one tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Player name exactly as written in the season file
    pub name: String,
    /// Finishing place, `None` when the file holds something that is not a positive integer
    pub place: Option<Place>,
    /// Explicit knockout count
    pub knockouts: Option<u32>,
    /// Score already written next to the placement
    pub recorded: Option<RecordedScore>,
}

impl Placement {
    pub fn new(name: impl Into<String>, place: Place) -> Self {
        Self {
            name: name.into(),
            place: (place >= 1).then_some(place),
            knockouts: None,
            recorded: None,
        }
    }

    /// Placement whose place could not be read
    pub fn unplaced(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            place: None,
            knockouts: None,
            recorded: None,
        }
    }

    pub fn with_knockouts(mut self, knockouts: u32) -> Self {
        self.knockouts = Some(knockouts);
        self
    }

    pub fn with_recorded(mut self, recorded: RecordedScore) -> Self {
        self.recorded = Some(recorded);
        self
    }

    pub fn key(&self) -> PlayerKey {
        PlayerKey::new(&self.name)
    }

    /// Knockouts to credit: the explicit field wins over a recorded suffix
    pub fn effective_knockouts(&self) -> u32 {
        self.knockouts
            .or_else(|| self.recorded.map(|r| r.knockouts))
            .unwrap_or(0)
    }
}

/// One event within a season
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: Option<i64>,
    /// Date label as written in the file
    pub date: Option<String>,
    pub kind: Option<TournamentType>,
    pub player_count: Option<u32>,
    pub reentries: u32,
    /// Participant list, when the file carries one separately from placements
    pub participants: Vec<String>,
    pub placements: Vec<Placement>,
}

impl Tournament {
    /// Create a tournament with type and field size, without placements
    pub fn new(kind: TournamentType, player_count: u32, reentries: u32) -> Self {
        Self {
            kind: Some(kind),
            player_count: Some(player_count),
            reentries,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placements.push(placement);
        self
    }

    pub fn with_placements(mut self, placements: impl IntoIterator<Item = Placement>) -> Self {
        self.placements.extend(placements);
        self
    }

    /// Whether this tournament carries enough data to be scored
    ///
    /// Requires a type, a positive player count and at least one placement.
    pub fn is_scorable(&self) -> bool {
        self.kind.is_some() && self.player_count.unwrap_or(0) > 0 && !self.placements.is_empty()
    }

    /// Names mentioned by this tournament, participant list first
    pub fn mentioned_names(&self) -> Vec<&str> {
        if self.participants.is_empty() {
            self.placements.iter().map(|p| p.name.as_str()).collect()
        } else {
            self.participants.iter().map(String::as_str).collect()
        }
    }

    /// First placement recorded for the given player
    pub fn placement_of(&self, key: &PlayerKey) -> Option<&Placement> {
        self.placements.iter().find(|p| &p.key() == key)
    }

    pub fn naive_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date_label)
    }
}

/// One competitive period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub number: Option<SeasonNumber>,
    pub next_game_date: Option<String>,
    pub final_date: Option<String>,
    pub tournaments: Vec<Tournament>,
    /// Explicit roster; authoritative when non-empty
    pub roster: Vec<String>,
}

impl Season {
    pub fn new(number: SeasonNumber) -> Self {
        Self {
            number: Some(number),
            ..Self::default()
        }
    }

    pub fn with_tournament(mut self, tournament: Tournament) -> Self {
        self.tournaments.push(tournament);
        self
    }

    pub fn with_roster<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roster = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_explicit_roster(&self) -> bool {
        !self.roster.is_empty()
    }

    pub fn next_game_naive_date(&self) -> Option<NaiveDate> {
        self.next_game_date.as_deref().and_then(parse_date_label)
    }

    pub fn final_naive_date(&self) -> Option<NaiveDate> {
        self.final_date.as_deref().and_then(parse_date_label)
    }
}

/// Parse an ISO date label, tolerating full RFC 3339 timestamps
///
/// Free-form labels ("TBA", "27 ноября") yield `None`.
pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
    let label = label.trim();
    if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(label) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(label, "%d.%m.%Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_type_parse() {
        assert_eq!(TournamentType::parse("classic"), Some(TournamentType::Classic));
        assert_eq!(TournamentType::parse(" JOT "), Some(TournamentType::Jot));
        assert_eq!(TournamentType::parse("rebuy"), Some(TournamentType::Jot));
        assert_eq!(TournamentType::parse("Bounty"), Some(TournamentType::Bounty));
        assert_eq!(TournamentType::parse("turbo"), None);
    }

    #[test]
    fn test_placement_zero_place_is_unplaced() {
        let placement = Placement::new("Alice", 0);
        assert_eq!(placement.place, None);
    }

    #[test]
    fn test_effective_knockouts_prefers_explicit_field() {
        let recorded = RecordedScore {
            base: 140,
            knockouts: 3,
        };
        let from_suffix = Placement::new("A", 1).with_recorded(recorded);
        assert_eq!(from_suffix.effective_knockouts(), 3);

        let explicit = Placement::new("A", 1)
            .with_recorded(recorded)
            .with_knockouts(1);
        assert_eq!(explicit.effective_knockouts(), 1);

        assert_eq!(Placement::new("A", 1).effective_knockouts(), 0);
    }

    #[test]
    fn test_is_scorable() {
        let full = Tournament::new(TournamentType::Classic, 10, 0)
            .with_placement(Placement::new("A", 1));
        assert!(full.is_scorable());

        let no_placements = Tournament::new(TournamentType::Classic, 10, 0);
        assert!(!no_placements.is_scorable());

        let mut no_type = full.clone();
        no_type.kind = None;
        assert!(!no_type.is_scorable());

        let mut zero_players = full.clone();
        zero_players.player_count = Some(0);
        assert!(!zero_players.is_scorable());
    }

    #[test]
    fn test_mentioned_names_prefers_participants() {
        let mut tournament = Tournament::new(TournamentType::Classic, 3, 0)
            .with_placement(Placement::new("A", 1));
        assert_eq!(tournament.mentioned_names(), vec!["A"]);

        tournament.participants = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(tournament.mentioned_names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_date_label() {
        let expected = NaiveDate::from_ymd_opt(2025, 11, 27);
        assert_eq!(parse_date_label("2025-11-27"), expected);
        assert_eq!(parse_date_label("2025-11-27T19:00:00+03:00"), expected);
        assert_eq!(parse_date_label("27.11.2025"), expected);
        assert_eq!(parse_date_label("скоро"), None);
    }
}
