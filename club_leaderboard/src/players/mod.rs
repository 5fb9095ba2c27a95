//! Player detail: games, wins, best and average place, knockouts across seasons.

pub mod errors;
pub mod summary;

pub use errors::{PlayerError, PlayerResult};
pub use summary::{PlayerSummary, SeasonSummary, summarize_player};
