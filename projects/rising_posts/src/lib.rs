//! Posts the top rising submission of a subreddit to a Discord webhook
//!
//! - One run = one listing `GET` + one webhook `POST`, see `run`
//! - Repetition is the scheduler's job (`.github/workflows/rising_posts.yml`)
//! - Requires the WEBHOOK env var (or `.env`); see `config`

pub mod config;
pub mod fetch;
pub mod publish;
pub mod run;
pub mod summary;
