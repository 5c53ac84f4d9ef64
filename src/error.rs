use thiserror::Error;

/// Message reported when a failed response carries no readable `message`.
pub const NO_CONTENT: &str = "No content";

/// Failure of a single request against the score server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The request never completed, or the body could not be read or decoded.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The server answered with anything other than 200.
    #[error("Server responded with status {status}: {message}")]
    Status { status: u16, message: String },
}

impl RemoteError {
    pub fn is_transport(&self) -> bool {
        matches!(self, RemoteError::Transport(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    /// The server deleted the game but no cached record held it, so the
    /// cache has drifted from the server and should be re-fetched.
    #[error("Game {game_id} was deleted remotely but no cached record contains it")]
    LocalRecordNotFound { game_id: String },
}
