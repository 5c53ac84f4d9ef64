use std::env;

use bowling_score_client::config::ClientConfig;
use bowling_score_client::handler::{self, Error, Request};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();

    let raw = env::args().nth(1).unwrap_or_else(|| r#"{"mode":"list"}"#.to_string());
    let request: Request = serde_json::from_str(&raw)?;
    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, mode = ?request.mode, "Starting");

    match handler::handler(request, config).await {
        Ok(response) => {
            println!("{}", serde_json::to_string(&response)?);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Request failed");
            Err(e)
        }
    }
}
