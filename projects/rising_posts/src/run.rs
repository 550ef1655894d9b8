use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::fetch::{get_rising_submission, FetchTopRisingError};
use crate::publish::{post_message, PostMessageError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("FetchTopRising: {source}")]
    FetchTopRising {
        #[from]
        source: FetchTopRisingError,
    },

    #[error("PostMessage: {source}")]
    PostMessage {
        #[from]
        source: PostMessageError,
    },
}

/// One fetch, one publish. Returns the webhook's status, whatever it is.
pub async fn run(config: &Config) -> Result<StatusCode, RunError> {
    let client = Client::new();

    info!(subreddit = %config.subreddit, "Connecting to Reddit");
    let (message, image_url) =
        get_rising_submission(&client, &config.reddit_base_url, &config.subreddit).await?;

    info!("Data received. Sending webhook");
    let status = post_message(&client, &config.webhook_url, &message, &image_url).await?;

    Ok(status)
}
