use serde::{Deserialize, Serialize};

use crate::model::date_record::DateRecord;
use crate::model::game::GameDetail;

/// One page of the paginated record listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPage {
    pub status: String,
    #[serde(default)]
    pub results: i64,
    #[serde(default)]
    pub dates: Vec<DateRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub status: String,
    pub data: GameDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: String,
    pub message: String,
}

/// Plain `{status, message}` answer of the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}
