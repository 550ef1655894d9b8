use anyhow::Result;
use projects_rising_posts::config::{Config, ConfigError};
use projects_rising_posts::run::{run, RunError};
use thiserror::Error;
use tracing::info;
use utils_trace::tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("Config: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },
    #[error("Run: {source}")]
    Run {
        #[source]
        source: RunError,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    tracing_init("info")
        .map_err(|source| MainError::TracingInit { source })?;

    let config = Config::from_env()
        .map_err(|source| MainError::Config { source })?;

    let status = run(&config)
        .await
        .map_err(|source| MainError::Run { source })?;

    info!(status = status.as_u16(), "Run finished");

    Ok(())
}
