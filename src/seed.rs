use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::error::RemoteError;
use crate::gateway::Gateway;
use crate::model::GameDetail;

pub const PERFECT_GAME: &str = "X X X X X X X X X XXX";

/// Dates the test data is spread over, as (year, month, day).
pub const DEFAULT_SEED_DATES: [(i32, u32, u32); 5] =
    [(2022, 1, 1), (2023, 1, 1), (2024, 1, 1), (2024, 6, 6), (2024, 12, 31)];

pub fn default_seed_dates() -> Vec<NaiveDate> {
    DEFAULT_SEED_DATES
        .iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .collect()
}

/// Create one game per date, in order, stopping at the first failure.
/// Only the server is touched; re-fetch to see the new games locally.
#[instrument(level = "info", skip(gateway, dates, score_str), fields(count = dates.len()))]
pub fn seed_test_games<G: Gateway>(gateway: &G, dates: &[NaiveDate], score_str: &str) -> Result<Vec<GameDetail>, RemoteError> {
    let mut created = Vec::with_capacity(dates.len());
    for date in dates {
        match gateway.create_game(*date, score_str) {
            Ok(game) => created.push(game),
            Err(e) => {
                warn!(error = %e, date = %date, seeded = created.len(), "Seeding stopped");
                return Err(e);
            }
        }
    }
    info!(seeded = created.len(), "Seeded test games");
    Ok(created)
}
