use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::game::GameSummary;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
    pub date_id: String,
    #[serde(with = "crate::model::calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub games: Vec<GameSummary>,
}

impl DateRecord {
    pub fn contains_game(&self, game_id: &str) -> bool {
        self.games.iter().any(|g| g.game_id == game_id)
    }
}
