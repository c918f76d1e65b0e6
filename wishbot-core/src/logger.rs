//! Logging initialization: the same fmt output goes to stdout and to an append-mode log file.

use std::fs::OpenOptions;
use std::io;
use std::str::FromStr;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, fmt::writer::MakeWriterExt, layer::SubscriberExt,
    util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::error::DbotError;

/// Output format of the log lines; selected per deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines, default level `debug`. Used for `APP_ENV=local`.
    Text,
    /// One JSON object per line, default level `info`. Used for `APP_ENV=prod`.
    Json,
}

impl LogFormat {
    fn default_directive(self) -> &'static str {
        match self {
            LogFormat::Text => "debug",
            LogFormat::Json => "info",
        }
    }
}

impl FromStr for LogFormat {
    type Err = DbotError;

    /// Parses an `APP_ENV` value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "" => Ok(LogFormat::Text),
            "prod" => Ok(LogFormat::Json),
            other => Err(DbotError::Config(format!(
                "APP_ENV must be 'local' or 'prod', got '{}'",
                other
            ))),
        }
    }
}

/// Initializes the global tracing subscriber.
/// Level comes from RUST_LOG (e.g. info, debug, wishbot=trace); if unset, the format's default applies.
/// Load .env (dotenvy::dotenv()) before calling, otherwise RUST_LOG from .env has no effect.
pub fn init_tracing(log_file_path: &str, format: LogFormat) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    let file = Arc::new(file);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format.default_directive()));

    let writer = io::stdout.and(file);

    let registry = Registry::default().with(env_filter);
    let result = match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_level(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
