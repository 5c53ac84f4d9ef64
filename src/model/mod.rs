pub mod calendar_date;
pub mod date_record;
pub mod game;
pub mod response;

pub use date_record::DateRecord;
pub use game::{GameDetail, GameSummary};
pub use response::{ErrorResponse, GameResponse, RecordPage, StatusResponse};
