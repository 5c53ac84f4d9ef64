use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::cache::RecordCache;
use crate::config::ClientConfig;
use crate::error::CacheError;
use crate::gateway::{Gateway, HttpGateway};
use crate::model::DateRecord;
use crate::seed;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    List,
    Seed,
    Delete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub mode: Mode,
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[instrument(skip(config))]
pub async fn handler(request: Request, config: ClientConfig) -> Result<Response, Error> {
    // The gateway blocks on I/O, so the whole session runs off the async workers
    let handle = tokio::task::spawn_blocking(move || -> Result<Response, Error> {
        let gateway = HttpGateway::new(&config);
        let mut cache = RecordCache::with_page_limit(gateway, config.page_limit);
        cache.initialize()?;
        dispatch(&mut cache, &request)
    });

    match handle.await {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, "Handler task join error");
            Err(e.into())
        }
    }
}

/// Run one request against an initialized cache.
pub fn dispatch<G: Gateway>(cache: &mut RecordCache<G>, request: &Request) -> Result<Response, Error> {
    let message = match request.mode {
        Mode::List => list(cache, request.pages.unwrap_or(1))?,
        Mode::Seed => {
            let created = seed::seed_test_games(cache.gateway(), &seed::default_seed_dates(), seed::PERFECT_GAME)?;
            format!("Seeded {} games", created.len())
        }
        Mode::Delete => {
            let game_id = request.game_id.as_deref().ok_or("delete requires a game_id")?;
            delete(cache, game_id)?
        }
    };
    info!(message = %message, "Request complete");
    Ok(Response { message })
}

fn list<G: Gateway>(cache: &mut RecordCache<G>, pages: u32) -> Result<String, Error> {
    // Page one was loaded by initialize
    for _ in 1..pages.max(1) {
        cache.advance_page();
        // An empty page is the end of the listing; unchanged pages are not
        if cache.fetch_page()?.received == 0 {
            break;
        }
    }

    if cache.date_store().is_empty() {
        return Ok("No games recorded".to_string());
    }
    let lines: Vec<String> = cache.date_store().iter().map(summarize).collect();
    Ok(lines.join("\n"))
}

fn delete<G: Gateway>(cache: &mut RecordCache<G>, game_id: &str) -> Result<String, Error> {
    match cache.delete_game_by_id(game_id) {
        Ok(true) => Ok(format!("Deleted game {}", game_id)),
        Ok(false) => Ok(format!("Server refused to delete game {}", game_id)),
        Err(CacheError::LocalRecordNotFound { .. }) => {
            warn!(game_id, "Cache drifted from server; re-fetching");
            cache.fetch()?;
            Ok(format!("Deleted game {} (cache re-fetched)", game_id))
        }
        Err(e) => Err(e.into()),
    }
}

/// One line per date: `2024/1/1: 2 games`.
pub fn summarize(record: &DateRecord) -> String {
    use chrono::Datelike;
    let count = record.games.len();
    format!(
        "{}/{}/{}: {} game{}",
        record.date.year(),
        record.date.month(),
        record.date.day(),
        count,
        if count == 1 { "" } else { "s" }
    )
}
