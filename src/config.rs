use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_PAGE_LIMIT: u32 = 12;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub page_limit: u32,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing or unparsable
    /// values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("BOWLING_API_URL") {
            let trimmed = url.trim().trim_end_matches('/');
            if !trimmed.is_empty() {
                config.base_url = trimmed.to_string();
            }
        }
        if let Some(limit) = lookup("BOWLING_PAGE_LIMIT").and_then(|l| l.trim().parse::<u32>().ok()) {
            if limit > 0 {
                config.page_limit = limit;
            }
        }
        if let Some(timeout) = lookup("BOWLING_TIMEOUT_SECS").and_then(|t| t.trim().parse::<u64>().ok()) {
            config.timeout_secs = timeout;
        }

        config
    }
}
