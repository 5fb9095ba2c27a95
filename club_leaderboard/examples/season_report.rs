//! Season Report Example
//!
//! Loads the active seasons from the configured data directories and prints
//! each leaderboard. Pass a player name to print their summary instead.
//!
//! ```text
//! SEASON_DATA_DIRS=public/data LEADERBOARD_POLICY=house cargo run --example season_report
//! cargo run --example season_report -- "Anna"
//! ```

use club_leaderboard::{EngineConfig, LeaderboardManager};

fn main() -> anyhow::Result<()> {
    env_logger::builder().format_target(false).init();

    let config = EngineConfig::from_env()?;
    config.validate()?;

    let manager = LeaderboardManager::new(config.store(), config.leaderboard.clone());

    if let Some(name) = std::env::args().nth(1) {
        let summary = manager.player_summary(&name)?;
        println!("=== {} ===", summary.name);
        println!("Seasons: {:?}", summary.season_numbers());
        println!(
            "Games: {}  Wins: {}  Knockouts: {}",
            summary.games, summary.wins, summary.knockouts
        );
        match (summary.best_place, summary.average_place) {
            (Some(best), Some(average)) => {
                println!("Best place: {best}  Average place: {average:.2}")
            }
            _ => println!("No placed games yet"),
        }
        return Ok(());
    }

    for board in manager.season_boards()? {
        let overview = &board.overview;
        match overview.season {
            Some(number) => println!("=== Season {number} ==="),
            None => println!("=== Season ==="),
        }
        println!(
            "{} players, {} tournaments, policy: {}",
            overview.unique_players,
            overview.tournaments,
            manager.config().policy
        );
        if let Some(date) = &overview.next_game_date {
            println!("Next game: {date}");
        }

        for row in &board.rows {
            let best = row
                .best_place
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:>3}. {:<24} {:>6}  (best {})",
                row.rank, row.name, row.points, best
            );
        }
        println!();
    }

    Ok(())
}
