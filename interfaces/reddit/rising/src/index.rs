use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

pub const REDDIT_BASE_URL: &str = "https://www.reddit.com";

/// Reddit throttles or blocks clients that send a generic agent.
pub const USER_AGENT: &str = "Reddit Rising Checker v1.0";

pub struct RedditListingResult {
    pub body: String,
    pub status: StatusCode,
}

/// `GET {base_url}/r/{subreddit}/rising.json?limit={limit}`.
///
/// Returns the raw body and status; decoding is left to the caller so a
/// non-JSON error page can still be reported.
pub async fn fetch_rising_submissions(
    client: &Client,
    base_url: &str,
    subreddit: &str,
    limit: u32,
) -> Result<RedditListingResult, FetchRisingSubmissionsError> {
    let url = format!(
        "{}/r/{subreddit}/rising.json",
        base_url.trim_end_matches('/')
    );

    let response = client
        .get(&url)
        .query(&[("limit", limit)])
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .map_err(|source| FetchRisingSubmissionsError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchRisingSubmissionsError::ResponseRead { source })?;

    Ok(RedditListingResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchRisingSubmissionsError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}

/// Top level `Listing` thing.
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    pub children: Vec<ListingChild>,
}

/// One `t3` wrapper; `kind` is ignored.
#[derive(Debug, Deserialize)]
pub struct ListingChild {
    pub data: Submission,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub title: String,
    /// Relative to the site root, e.g. `/r/pics/comments/abc/title/`.
    pub permalink: String,
    pub author: String,
    pub score: i64,
    pub url: String,
}
