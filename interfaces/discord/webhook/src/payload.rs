use serde::Serialize;

/// Body of an "Execute Webhook" request, restricted to the fields we send.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload<'a> {
    pub username: &'a str,
    pub embeds: Vec<Embed<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Embed<'a> {
    pub title: &'a str,
    /// Packed `0xRRGGBB`.
    pub color: u32,
    /// Markdown.
    pub description: &'a str,
    pub thumbnail: Thumbnail<'a>,
    pub footer: Footer<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Thumbnail<'a> {
    pub url: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer<'a> {
    pub text: &'a str,
}
