//! Parsing of scores that were written into season files by hand.
//!
//! A recorded score is either a plain number or a decorated string such as
//! `"140 + 3☠"`: base points, then the knockout count behind a `+`, then a
//! marker glyph. Anything unreadable counts as zero.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BASE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(-?\d+)").expect("base score pattern is valid"));

static KNOCKOUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+\s*(\d+)").expect("knockout suffix pattern is valid"));

/// Score already written next to a placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordedScore {
    /// Base points (leading integer)
    pub base: i64,
    /// Knockout count from the `+N` suffix
    pub knockouts: u32,
}

/// Parse a decorated score string
///
/// # Example
///
/// ```
/// use club_leaderboard::scoring::parse_score_text;
///
/// let score = parse_score_text("140 + 3☠");
/// assert_eq!(score.base, 140);
/// assert_eq!(score.knockouts, 3);
///
/// assert_eq!(parse_score_text("n/a").base, 0);
/// ```
pub fn parse_score_text(text: &str) -> RecordedScore {
    let (base, rest) = match BASE_PATTERN.captures(text) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            let base = caps
                .get(1)
                .and_then(|m| m.as_str().parse::<i64>().ok())
                .unwrap_or(0);
            (base, &text[whole..])
        }
        None => (0, text),
    };

    let knockouts = KNOCKOUT_PATTERN
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);

    RecordedScore { base, knockouts }
}
