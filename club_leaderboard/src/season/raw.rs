//! Loose on-disk season schema and its conversion into typed records.
//!
//! Season files are edited by hand. Every field except `tournaments` may be
//! missing, and numbers show up as strings (or the other way round). This is
//! the only place in the crate that looks at JSON types; everything it hands
//! out is already defaulted.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::models::{Place, Placement, Season, Tournament, TournamentType};
use crate::scoring::{RecordedScore, parse_score_text};

/// Season file as it appears on disk
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSeason {
    #[serde(default)]
    pub season: Value,
    #[serde(default)]
    pub next_game_date: Value,
    #[serde(default)]
    pub final_date: Value,
    #[serde(default)]
    pub players: Value,
    pub tournaments: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTournament {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub date: Value,
    #[serde(rename = "type", default)]
    pub kind: Value,
    #[serde(default)]
    pub players_count: Value,
    #[serde(default)]
    pub reentries: Value,
    #[serde(default)]
    pub players: Value,
    #[serde(default)]
    pub placements: Value,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawPlacement {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub place: Value,
    #[serde(default)]
    pub ko: Value,
    #[serde(default)]
    pub points: Value,
}

impl Season {
    /// Parse a season file
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or has no `tournaments` array.
    /// Problems inside individual tournaments never fail the parse.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let raw: RawSeason = serde_json::from_str(text)?;
        Ok(Self::from_raw(raw))
    }

    /// Convert an already parsed JSON value
    ///
    /// # Errors
    ///
    /// Returns an error if the value has no `tournaments` array.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let raw: RawSeason = serde_json::from_value(value)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_raw(raw: RawSeason) -> Self {
        let tournaments = raw
            .tournaments
            .into_iter()
            .enumerate()
            .filter_map(|(idx, value)| match serde_json::from_value::<RawTournament>(value) {
                Ok(t) => Some(Tournament::from(t)),
                Err(e) => {
                    warn!("Dropping tournament #{} with unreadable shape: {}", idx + 1, e);
                    None
                }
            })
            .collect();

        Self {
            number: as_count(&raw.season),
            next_game_date: as_label(&raw.next_game_date),
            final_date: as_label(&raw.final_date),
            tournaments,
            roster: as_name_list(&raw.players),
        }
    }
}

impl From<RawTournament> for Tournament {
    fn from(raw: RawTournament) -> Self {
        let id = raw.id.as_i64().or_else(|| as_count(&raw.id).map(i64::from));

        let placements = match &raw.placements {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| placement_from_value(item, id))
                .collect(),
            _ => Vec::new(),
        };

        Self {
            id,
            date: as_label(&raw.date),
            kind: raw.kind.as_str().and_then(TournamentType::parse),
            player_count: as_count(&raw.players_count),
            reentries: as_count(&raw.reentries).unwrap_or(0),
            participants: as_name_list(&raw.players),
            placements,
        }
    }
}

fn placement_from_value(value: &Value, tournament_id: Option<i64>) -> Option<Placement> {
    let raw: RawPlacement = match serde_json::from_value(value.clone()) {
        Ok(raw) => raw,
        Err(_) => {
            warn!(
                "Dropping placement that is not an object in tournament {:?}",
                tournament_id
            );
            return None;
        }
    };

    let Some(name) = as_name(&raw.name) else {
        warn!("Dropping placement without a name in tournament {:?}", tournament_id);
        return None;
    };

    Some(Placement {
        name,
        place: as_place(&raw.place),
        knockouts: as_count(&raw.ko),
        recorded: as_recorded(&raw.points),
    })
}

/// Positive integer place; strings and fractions are rejected
fn as_place(value: &Value) -> Option<Place> {
    let place = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u64)
        })?,
        _ => return None,
    };
    u32::try_from(place).ok().filter(|p| *p >= 1)
}

/// Non-negative integer, from a number or a numeric string
fn as_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                    .map(|f| f as u64)
            })
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_recorded(value: &Value) -> Option<RecordedScore> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| RecordedScore {
            base: f.round() as i64,
            knockouts: 0,
        }),
        Value::String(s) if !s.trim().is_empty() => Some(parse_score_text(s)),
        _ => None,
    }
}

fn as_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Name from either a bare string or an object with a `name` field
fn as_name(value: &Value) -> Option<String> {
    let name = match value {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map.get("name")?.as_str()?,
        _ => return None,
    };
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn as_name_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(as_name).collect(),
        _ => Vec::new(),
    }
}
