use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{error, info, info_span, instrument, warn};
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::config::ClientConfig;
use crate::error::{RemoteError, NO_CONTENT};
use crate::model::calendar_date;
use crate::model::{ErrorResponse, GameDetail, GameResponse, RecordPage, StatusResponse};

/// The only status the score server uses for success.
pub const SUCCESS_STATUS: u16 = 200;

/// Request/response channel to the score server.
///
/// Every method answers with a decoded value or a `RemoteError`; nothing
/// here touches cached state.
pub trait Gateway {
    fn list_records(&self, page: u32, limit: u32) -> Result<RecordPage, RemoteError>;
    fn create_game(&self, date: NaiveDate, score_str: &str) -> Result<GameDetail, RemoteError>;
    fn get_game(&self, game_id: &str) -> Result<GameDetail, RemoteError>;
    fn delete_game(&self, game_id: &str) -> Result<(), RemoteError>;
    fn health_check(&self) -> Result<String, RemoteError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub date: String,
    pub score_str: String,
}

/// Blocking HTTP gateway backed by a ureq agent.
#[derive(Clone)]
pub struct HttpGateway {
    base_url: String,
    agent: Agent,
}

impl fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpGateway").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl HttpGateway {
    pub fn new(config: &ClientConfig) -> Self {
        // Non-200 answers carry an error body we want to decode ourselves
        let mut builder = Agent::config_builder().http_status_as_error(false);
        if config.timeout_secs > 0 {
            builder = builder.timeout_global(Some(Duration::from_secs(config.timeout_secs)));
        }
        let agent = Agent::new_with_config(builder.build());
        Self { base_url: config.base_url.trim_end_matches('/').to_string(), agent }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn games_url(&self) -> String {
        format!("{}/games", self.base_url)
    }

    fn game_url(&self, game_id: &str) -> String {
        format!("{}/games/{}", self.base_url, game_id)
    }
}

impl Gateway for HttpGateway {
    #[instrument(level = "info", skip(self))]
    fn list_records(&self, page: u32, limit: u32) -> Result<RecordPage, RemoteError> {
        let url = self.games_url();
        let result = {
            let _span = info_span!("list_records_request", url = %url).entered();
            self.agent
                .get(&url)
                .query("page", page.to_string())
                .query("limit", limit.to_string())
                .call()
        };
        let body = success_body(result)?;
        let record_page: RecordPage = decode(&body)?;
        info!(results = record_page.results, dates = record_page.dates.len(), "Fetched record page");
        Ok(record_page)
    }

    #[instrument(level = "info", skip(self, score_str))]
    fn create_game(&self, date: NaiveDate, score_str: &str) -> Result<GameDetail, RemoteError> {
        // The collection endpoint for creation carries a trailing slash
        let url = format!("{}/", self.games_url());
        let payload = CreateGameRequest { date: calendar_date::to_wire_string(&date), score_str: score_str.to_string() };
        let result = self.agent.post(&url).send_json(&payload);
        let body = success_body(result)?;
        let response: GameResponse = decode(&body)?;
        info!(game_id = %response.data.game.game_id, date_id = %response.data.date_id, "Created game");
        Ok(response.data)
    }

    #[instrument(level = "info", skip(self))]
    fn get_game(&self, game_id: &str) -> Result<GameDetail, RemoteError> {
        let result = self.agent.get(&self.game_url(game_id)).call();
        let body = success_body(result)?;
        let response: GameResponse = decode(&body)?;
        Ok(response.data)
    }

    #[instrument(level = "info", skip(self))]
    fn delete_game(&self, game_id: &str) -> Result<(), RemoteError> {
        let result = self.agent.delete(&self.game_url(game_id)).call();
        success_body(result)?;
        info!("Deleted game on server");
        Ok(())
    }

    #[instrument(level = "info", skip(self))]
    fn health_check(&self) -> Result<String, RemoteError> {
        let result = self.agent.get(&format!("{}/healthchecker", self.base_url)).call();
        let body = success_body(result)?;
        let response: StatusResponse = decode(&body)?;
        Ok(response.message)
    }
}

/// Return the body of a 200 response, or the typed failure for anything else.
fn success_body(result: Result<Response<Body>, ureq::Error>) -> Result<String, RemoteError> {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "Request failed");
            return Err(RemoteError::Transport(e.to_string()));
        }
    };

    let status = response.status().as_u16();
    let mut body_reader = response.into_body();
    let body = body_reader.read_to_string();

    if status != SUCCESS_STATUS {
        let message = match body {
            Ok(text) => error_message(&text),
            Err(_) => NO_CONTENT.to_string(),
        };
        warn!(status, message = %message, "Server reported failure");
        return Err(RemoteError::Status { status, message });
    }

    body.map_err(|e| {
        error!(error = %e, "Failed to read response body");
        RemoteError::Transport(format!("Failed to read response body: {}", e))
    })
}

/// Extract the `message` of an error body, falling back to `NO_CONTENT`
/// when the body is empty, not JSON, or has no string message.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| NO_CONTENT.to_string())
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, RemoteError> {
    serde_json::from_str::<T>(body).map_err(|e| {
        error!(error = %e, bytes = body.len(), "Failed to decode response body");
        RemoteError::Transport(format!("Failed to decode response body: {}", e))
    })
}
