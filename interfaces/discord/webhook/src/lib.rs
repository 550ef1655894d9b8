//! Discord incoming webhooks
//!
//! - Payload model (`username` + `embeds`) in `payload`
//! - `POST` execution in `index`
//! - The webhook URL is a credential; nothing here logs or formats it

pub mod index;
pub mod payload;
