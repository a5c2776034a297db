//! Logging - Tracing Subscriber Setup

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::prelude::*;

use crate::app::settings::Settings;
use crate::constants::LOG_FILE_PREFIX;
use crate::helpers::get_or_create_data_dir;

/// Install the global subscriber
///
/// Timestamps use the local offset (RFC 3339). Logs go to stderr so they never
/// interleave with panel output. `RUST_LOG` overrides the configured filter.
/// Keep the returned guard alive until exit or buffered file logs are lost.
pub fn init_tracing(settings: &Settings) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_timer(LocalTime::rfc_3339())
                .with_writer(std::io::stderr),
        );

    if !settings.log_to_file {
        registry.init();
        return Ok(None);
    }

    let log_dir = get_or_create_data_dir().context("Could not create the log directory")?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    registry
        .with(
            fmt::layer()
                .with_timer(LocalTime::rfc_3339())
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
    Ok(Some(guard))
}
