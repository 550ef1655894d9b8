use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the process-wide subscriber.
///
/// `RUST_LOG` wins when it parses; otherwise `level` is used. Runs under a
/// scheduler, so output is compact and without ANSI colours.
pub fn tracing_init(level: &str) -> Result<(), TracingInitError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), level)?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_ansi(false).with_target(false));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| TracingInitError::SetGlobalDefault { source })?;

    Ok(())
}

fn build_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter, TracingInitError> {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .map(Ok)
        .unwrap_or_else(|| EnvFilter::try_new(level))
        .map_err(|source| TracingInitError::InvalidFilter { source })
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("Invalid filter config")]
    InvalidFilter {
        #[from]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to set global default subscriber")]
    SetGlobalDefault {
        #[from]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}
