use interfaces_reddit_rising::index::{
    fetch_rising_submissions, FetchRisingSubmissionsError, ListingResponse, RedditListingResult,
};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::Subreddit;
use crate::summary::SubmissionSummary;

#[derive(Debug, Error)]
pub enum FetchTopRisingError {
    #[error("FetchRisingSubmissions: {source}")]
    FetchRisingSubmissions {
        #[from]
        source: FetchRisingSubmissionsError,
    },

    #[error("UnexpectedStatus: listing for r/{subreddit} answered {status}")]
    UnexpectedStatus {
        subreddit: String,
        status: StatusCode,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },

    #[error("NoRisingSubmission: r/{subreddit} returned an empty listing")]
    NoRisingSubmission {
        subreddit: String,
    },
}

/// Fetches the single top rising submission of `subreddit`.
pub async fn fetch_top_rising(
    client: &Client,
    base_url: &str,
    subreddit: &Subreddit,
) -> Result<SubmissionSummary, FetchTopRisingError> {
    let RedditListingResult { body, status } =
        fetch_rising_submissions(client, base_url, subreddit.as_str(), 1).await?;

    if !status.is_success() {
        return Err(FetchTopRisingError::UnexpectedStatus {
            subreddit: subreddit.to_string(),
            status,
        });
    }

    let parsed: ListingResponse = serde_json::from_str(&body)?;

    let submission = parsed
        .data
        .children
        .into_iter()
        .next()
        .ok_or_else(|| FetchTopRisingError::NoRisingSubmission {
            subreddit: subreddit.to_string(),
        })?
        .data;

    Ok(SubmissionSummary::from_submission(submission))
}

/// `(message, image_url)` for the publish step.
pub async fn get_rising_submission(
    client: &Client,
    base_url: &str,
    subreddit: &Subreddit,
) -> Result<(String, String), FetchTopRisingError> {
    let summary = fetch_top_rising(client, base_url, subreddit).await?;
    let message = summary.message();

    Ok((message, summary.image_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn listing_server(status: u16, body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/r/pics/rising.json"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    fn pics() -> Subreddit {
        Subreddit::parse("pics").expect("valid subreddit")
    }

    #[tokio::test]
    async fn formats_first_child() {
        let server = listing_server(
            200,
            json!({
                "data": { "children": [
                    { "kind": "t3", "data": {
                        "title": "Cat",
                        "permalink": "/r/pics/abc",
                        "author": "jdoe",
                        "score": 1234,
                        "url": "http://img/x.png"
                    }},
                    { "kind": "t3", "data": {
                        "title": "Dog",
                        "permalink": "/r/pics/def",
                        "author": "other",
                        "score": 1,
                        "url": "http://img/y.png"
                    }}
                ]}
            }),
        )
        .await;

        let (message, image_url) = get_rising_submission(&Client::new(), &server.uri(), &pics())
            .await
            .expect("rising submission");

        assert_eq!(
            message,
            "[Cat](https://reddit.com/r/pics/abc)\nby **jdoe**\n**1,234** points"
        );
        assert_eq!(image_url, "http://img/x.png");
    }

    #[tokio::test]
    async fn empty_listing_fails() {
        let server = listing_server(200, json!({ "data": { "children": [] } })).await;

        let result = fetch_top_rising(&Client::new(), &server.uri(), &pics()).await;

        assert!(matches!(
            result,
            Err(FetchTopRisingError::NoRisingSubmission { ref subreddit }) if subreddit == "pics"
        ));
    }

    #[tokio::test]
    async fn missing_field_fails() {
        let server = listing_server(
            200,
            json!({ "data": { "children": [ { "data": { "title": "no author" } } ] } }),
        )
        .await;

        let result = fetch_top_rising(&Client::new(), &server.uri(), &pics()).await;

        assert!(matches!(
            result,
            Err(FetchTopRisingError::DeserializeResponseBody { .. })
        ));
    }

    #[tokio::test]
    async fn non_success_status_fails() {
        let server = listing_server(429, json!({ "message": "Too Many Requests", "error": 429 })).await;

        let result = fetch_top_rising(&Client::new(), &server.uri(), &pics()).await;

        assert!(matches!(
            result,
            Err(FetchTopRisingError::UnexpectedStatus { status, .. })
                if status == StatusCode::TOO_MANY_REQUESTS
        ));
    }
}
