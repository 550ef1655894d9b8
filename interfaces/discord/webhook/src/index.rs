use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::payload::WebhookPayload;

pub struct WebhookResult {
    pub status: StatusCode,
}

/// `POST`s `payload` as JSON to `webhook_url`.
///
/// Any HTTP status is returned as a result; only transport failures are
/// errors. Discord answers 204 on success.
pub async fn execute_webhook(
    client: &Client,
    webhook_url: &str,
    payload: &WebhookPayload<'_>,
) -> Result<WebhookResult, ExecuteWebhookError> {
    let response = client
        .post(webhook_url)
        .json(payload)
        .send()
        .await
        // The URL embeds the webhook token.
        .map_err(|source| ExecuteWebhookError::RequestSend {
            source: source.without_url(),
        })?;

    Ok(WebhookResult {
        status: response.status(),
    })
}

#[derive(Debug, Error)]
pub enum ExecuteWebhookError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },
}
