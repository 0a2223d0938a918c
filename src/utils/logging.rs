//! Logging setup
//!
//! Structured JSON logs on stdout, optionally mirrored to daily log files.

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,gcp_log_relay=debug,tower_http=debug";

/// Initialise the global tracing subscriber.
///
/// The level is taken from `RUST_LOG` and defaults to `info,gcp_log_relay=debug`.
/// When `LOG_DIR` is set, every event is also written to `relay.log.YYYY-MM-DD`
/// in that directory. The returned guard must be held by `main` for the
/// lifetime of the process, otherwise buffered file output is lost on exit.
pub fn init_logging() -> Option<WorkerGuard> {
    let (file_layer, guard) = match std::env::var("LOG_DIR") {
        Ok(log_dir) if !log_dir.is_empty() => {
            let file_appender = rolling::daily(&log_dir, "relay.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_current_span(true)
                .flatten_event(false)
                .with_ansi(false)
                .with_writer(non_blocking);

            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .or_else(|err| {
            // A subscriber set by an earlier call (e.g. another test) stays in place
            use std::error::Error;
            if err
                .source()
                .and_then(|s| s.downcast_ref::<tracing::dispatcher::SetGlobalDefaultError>())
                .is_some()
            {
                return Ok(());
            }
            eprintln!("Failed to initialize tracing: {}", err);
            Err(err)
        })
        .ok();

    guard
}
