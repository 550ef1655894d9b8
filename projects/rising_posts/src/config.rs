use std::fmt;

use interfaces_reddit_rising::index::REDDIT_BASE_URL;
use thiserror::Error;
use url::Url;

pub const WEBHOOK_ENV: &str = "WEBHOOK";
pub const SUBREDDIT_ENV: &str = "SUBREDDIT";
pub const REDDIT_BASE_URL_ENV: &str = "REDDIT_BASE_URL";

pub const DEFAULT_SUBREDDIT: &str = "pics";

/// Discord webhook URL. The token is part of the path, so the value is
/// only reachable through [`WebhookUrl::expose`] and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookUrl(String);

impl WebhookUrl {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::WebhookEmpty);
        }

        // ParseError carries no part of the input.
        let url = Url::parse(raw).map_err(|source| ConfigError::WebhookInvalid { source })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::WebhookScheme);
        }

        Ok(Self(raw.to_owned()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WebhookUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebhookUrl(<redacted>)")
    }
}

/// A subreddit name as it appears in `/r/{name}`, without slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subreddit(String);

impl Subreddit {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ConfigError::SubredditEmpty);
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::SubredditInvalid {
                name: name.to_owned(),
            });
        }

        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subreddit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a run needs, read once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: WebhookUrl,
    pub subreddit: Subreddit,
    pub reddit_base_url: String,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env is the normal case in CI.
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = lookup(WEBHOOK_ENV)
            .ok_or(ConfigError::WebhookMissing)
            .and_then(|raw| WebhookUrl::parse(&raw))?;

        let subreddit = match lookup(SUBREDDIT_ENV) {
            Some(raw) => Subreddit::parse(&raw)?,
            None => Subreddit::parse(DEFAULT_SUBREDDIT)?,
        };

        let reddit_base_url = lookup(REDDIT_BASE_URL_ENV)
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| REDDIT_BASE_URL.to_owned());

        Ok(Self {
            webhook_url,
            subreddit,
            reddit_base_url,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("WebhookMissing: WEBHOOK is not set")]
    WebhookMissing,

    #[error("WebhookEmpty: WEBHOOK is empty")]
    WebhookEmpty,

    #[error("WebhookInvalid: WEBHOOK is not a valid URL: {source}")]
    WebhookInvalid {
        source: url::ParseError,
    },

    #[error("WebhookScheme: WEBHOOK must be an http(s) URL")]
    WebhookScheme,

    #[error("SubredditEmpty: SUBREDDIT is empty")]
    SubredditEmpty,

    #[error("SubredditInvalid: {name:?} may only contain letters, digits and '_'")]
    SubredditInvalid {
        name: String,
    },
}
