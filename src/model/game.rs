use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single game as listed under its date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game_id: String,
    pub game_no: u32,
    pub score_str: String,
}

/// A game as returned on its own by the create and single-game endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDetail {
    pub date_id: String,
    #[serde(with = "crate::model::calendar_date")]
    pub date: NaiveDate,
    #[serde(flatten)]
    pub game: GameSummary,
}
