use interfaces_discord_webhook::index::{execute_webhook, ExecuteWebhookError, WebhookResult};
use interfaces_discord_webhook::payload::{Embed, Footer, Thumbnail, WebhookPayload};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::WebhookUrl;

pub const USERNAME: &str = "Rising Posts";
pub const EMBED_TITLE: &str = "Top Rising Post";
/// 0x018F3C.
pub const EMBED_COLOR: u32 = 102204;
pub const FOOTER_TEXT: &str = "Powered by Elf Magic™";

#[derive(Debug, Error)]
pub enum PostMessageError {
    #[error("ExecuteWebhook: {source}")]
    ExecuteWebhook {
        #[from]
        source: ExecuteWebhookError,
    },
}

/// The one embed we ever send, wrapping `message` and `image_url` as-is.
pub fn build_payload<'a>(message: &'a str, image_url: &'a str) -> WebhookPayload<'a> {
    WebhookPayload {
        username: USERNAME,
        embeds: vec![Embed {
            title: EMBED_TITLE,
            color: EMBED_COLOR,
            description: message,
            thumbnail: Thumbnail { url: image_url },
            footer: Footer { text: FOOTER_TEXT },
        }],
    }
}

/// Sends the embed and reports the webhook's status.
///
/// A non-2xx answer is logged, not raised: the next scheduled run is the
/// retry.
pub async fn post_message(
    client: &Client,
    webhook_url: &WebhookUrl,
    message: &str,
    image_url: &str,
) -> Result<StatusCode, PostMessageError> {
    let payload = build_payload(message, image_url);

    let WebhookResult { status } = execute_webhook(client, webhook_url.expose(), &payload).await?;

    if status.is_success() {
        info!(status = status.as_u16(), "Webhook delivered");
    } else {
        warn!(status = status.as_u16(), "Webhook rejected the message");
    }

    Ok(status)
}
