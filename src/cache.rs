use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{error, info, instrument, warn};

use crate::error::{CacheError, RemoteError};
use crate::gateway::Gateway;
use crate::model::DateRecord;

/// Number of dates requested per page.
pub const PAGE_LIMIT: u32 = 12;

/// Date records keyed by `date_id`, kept in the order they were first seen.
#[derive(Debug, Default, Clone)]
pub struct DateStore {
    records: Vec<DateRecord>,
    // date_id -> position in `records`
    index: HashMap<String, usize>,
}

/// Outcome of folding one record into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Appended,
    Replaced,
    Unchanged,
}

impl DateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[DateRecord] {
        &self.records
    }

    pub fn get(&self, date_id: &str) -> Option<&DateRecord> {
        self.index.get(date_id).map(|&i| &self.records[i])
    }

    /// Append an unknown record, or replace a known one where it stands.
    pub fn upsert(&mut self, record: DateRecord) -> Upsert {
        match self.index.get(&record.date_id) {
            Some(&i) if self.records[i] == record => Upsert::Unchanged,
            Some(&i) => {
                self.records[i] = record;
                Upsert::Replaced
            }
            None => {
                self.index.insert(record.date_id.clone(), self.records.len());
                self.records.push(record);
                Upsert::Appended
            }
        }
    }

    /// Position of the first record holding `game_id`, scanning in order.
    fn position_of_game(&self, game_id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.contains_game(game_id))
    }

    /// Drop the record for `date_id`, keeping the index in step.
    pub fn remove(&mut self, date_id: &str) -> Option<DateRecord> {
        let pos = self.index.remove(date_id)?;
        let removed = self.records.remove(pos);
        for i in self.index.values_mut() {
            if *i > pos {
                *i -= 1;
            }
        }
        Some(removed)
    }

    /// Remove one game from the record at `pos`, dropping the record once
    /// its last game is gone. Returns true if the record was dropped.
    fn remove_game_at(&mut self, pos: usize, game_id: &str) -> bool {
        let record = &mut self.records[pos];
        if let Some(game_pos) = record.games.iter().position(|g| g.game_id == game_id) {
            record.games.remove(game_pos);
        }
        if !record.games.is_empty() {
            return false;
        }

        let date_id = record.date_id.clone();
        self.remove(&date_id).is_some()
    }
}

/// What a single page fetch did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Dates the server returned on the page, empty ones included.
    pub received: usize,
    pub changed: bool,
}

/// In-process mirror of the date/game records held by the score server.
///
/// All mutation goes through this type. A remote mutation is applied locally
/// only after the server accepted it; a rejected one leaves the store as it was.
/// Callers are expected to issue at most one mutating operation at a time.
pub struct RecordCache<G: Gateway> {
    gateway: G,
    page: u32,
    limit: u32,
    store: DateStore,
    last_updated: DateTime<Utc>,
    revision: watch::Sender<u64>,
}

impl<G: Gateway> RecordCache<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_page_limit(gateway, PAGE_LIMIT)
    }

    pub fn with_page_limit(gateway: G, limit: u32) -> Self {
        let (revision, _) = watch::channel(0);
        Self { gateway, page: 1, limit: limit.max(1), store: DateStore::new(), last_updated: Utc::now(), revision }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Run the first fetch. Failure here is meant to be fatal for the caller.
    #[instrument(level = "info", skip(self))]
    pub fn initialize(&mut self) -> Result<(), CacheError> {
        match self.fetch() {
            Ok(changed) => {
                info!(changed, dates = self.store.len(), "Record cache initialized");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Record cache initialization failed");
                Err(e.into())
            }
        }
    }

    /// Fetch the current page and fold its dates into the store.
    /// Returns whether the store changed. The page counter is left alone.
    pub fn fetch(&mut self) -> Result<bool, RemoteError> {
        self.fetch_page().map(|outcome| outcome.changed)
    }

    /// Same as `fetch`, also reporting how many dates the page carried.
    ///
    /// A date that comes back without games is dropped from the store if it
    /// was cached and ignored otherwise.
    #[instrument(level = "info", skip(self), fields(page = self.page, limit = self.limit))]
    pub fn fetch_page(&mut self) -> Result<FetchOutcome, RemoteError> {
        let record_page = self.gateway.list_records(self.page, self.limit)?;
        let received = record_page.dates.len();

        let mut changed = false;
        for record in record_page.dates {
            if record.games.is_empty() {
                if self.store.remove(&record.date_id).is_some() {
                    info!(date_id = %record.date_id, "Date emptied on server; removed from cache");
                    changed = true;
                } else {
                    warn!(date_id = %record.date_id, "Skipping date record without games");
                }
                continue;
            }
            match self.store.upsert(record) {
                Upsert::Appended | Upsert::Replaced => changed = true,
                Upsert::Unchanged => {}
            }
        }

        if changed {
            self.touch();
        }
        info!(received, changed, dates = self.store.len(), "Fetch complete");
        Ok(FetchOutcome { received, changed })
    }

    /// Move to the next page and return its number.
    pub fn advance_page(&mut self) -> u32 {
        self.page = self.page.saturating_add(1);
        self.page
    }

    /// Jump to a specific page; pages start at 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Delete a game on the server, then drop it locally.
    ///
    /// `Ok(false)` means the server refused the delete and nothing changed.
    /// Transport faults propagate as errors, as does a successful remote
    /// delete of a game no cached record holds.
    #[instrument(level = "info", skip(self))]
    pub fn delete_game_by_id(&mut self, game_id: &str) -> Result<bool, CacheError> {
        match self.gateway.delete_game(game_id) {
            Ok(()) => {}
            Err(RemoteError::Status { status, message }) => {
                warn!(status, message = %message, "Server refused delete; cache left unchanged");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        }

        let Some(pos) = self.store.position_of_game(game_id) else {
            error!("Game deleted on server but missing from cache");
            return Err(CacheError::LocalRecordNotFound { game_id: game_id.to_string() });
        };

        let date_id = self.store.records[pos].date_id.clone();
        let record_removed = self.store.remove_game_at(pos, game_id);
        self.touch();
        info!(date_id = %date_id, record_removed, "Removed game from cache");
        Ok(true)
    }

    pub fn get_record_by_id(&self, date_id: &str) -> Option<&DateRecord> {
        self.store.get(date_id)
    }

    /// Records in store order, for rendering.
    pub fn date_store(&self) -> &[DateRecord] {
        self.store.as_slice()
    }

    /// Receiver that sees a new revision number after every change to the store.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
        self.revision.send_modify(|r| *r += 1);
    }
}
