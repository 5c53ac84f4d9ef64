#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::NaiveDate;

use bowling_score_client::error::RemoteError;
use bowling_score_client::gateway::Gateway;
use bowling_score_client::model::{DateRecord, GameDetail, GameSummary, RecordPage};

/// Scripted gateway: each call pops the next queued answer.
#[derive(Default)]
pub struct FakeGateway {
    pub pages: RefCell<VecDeque<Result<RecordPage, RemoteError>>>,
    pub deletes: RefCell<VecDeque<Result<(), RemoteError>>>,
    pub creates: RefCell<VecDeque<Result<GameDetail, RemoteError>>>,
    pub list_calls: RefCell<Vec<(u32, u32)>>,
    pub delete_calls: RefCell<Vec<String>>,
    pub create_calls: RefCell<Vec<(NaiveDate, String)>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, dates: Vec<DateRecord>) -> Self {
        self.pages.borrow_mut().push_back(Ok(page(dates)));
        self
    }

    pub fn with_page_error(self, e: RemoteError) -> Self {
        self.pages.borrow_mut().push_back(Err(e));
        self
    }

    pub fn with_delete(self, result: Result<(), RemoteError>) -> Self {
        self.deletes.borrow_mut().push_back(result);
        self
    }

    pub fn with_create(self, result: Result<GameDetail, RemoteError>) -> Self {
        self.creates.borrow_mut().push_back(result);
        self
    }
}

impl Gateway for FakeGateway {
    fn list_records(&self, page_no: u32, limit: u32) -> Result<RecordPage, RemoteError> {
        self.list_calls.borrow_mut().push((page_no, limit));
        self.pages.borrow_mut().pop_front().unwrap_or_else(|| Ok(page(Vec::new())))
    }

    fn create_game(&self, date: NaiveDate, score_str: &str) -> Result<GameDetail, RemoteError> {
        self.create_calls.borrow_mut().push((date, score_str.to_string()));
        self.creates
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::Transport("no scripted create".to_string())))
    }

    fn get_game(&self, game_id: &str) -> Result<GameDetail, RemoteError> {
        Err(RemoteError::Status { status: 404, message: format!("Game with ID: {} not found", game_id) })
    }

    fn delete_game(&self, game_id: &str) -> Result<(), RemoteError> {
        self.delete_calls.borrow_mut().push(game_id.to_string());
        self.deletes.borrow_mut().pop_front().unwrap_or(Ok(()))
    }

    fn health_check(&self) -> Result<String, RemoteError> {
        Ok("ok".to_string())
    }
}

pub fn page(dates: Vec<DateRecord>) -> RecordPage {
    RecordPage { status: "success".to_string(), results: dates.len() as i64, dates }
}

pub fn game(game_id: &str, game_no: u32) -> GameSummary {
    GameSummary { game_id: game_id.to_string(), game_no, score_str: "X X X X X X X X X XXX".to_string() }
}

pub fn record(date_id: &str, ymd: (i32, u32, u32), games: Vec<GameSummary>) -> DateRecord {
    DateRecord {
        date_id: date_id.to_string(),
        date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
        games,
    }
}

pub fn status_error(status: u16, message: &str) -> RemoteError {
    RemoteError::Status { status, message: message.to_string() }
}
