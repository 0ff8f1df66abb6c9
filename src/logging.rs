use std::io;
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const CONSOLE_FILTER: &str = "warn,newsbrief=info,pipeline=info,web_request=warn";
const FILE_FILTER: &str = "info,pipeline=debug,web_request=debug";

/// Logs to stderr (overridable through `RUST_LOG`) and to a daily file under
/// `logs/`.
///
/// Stdout is reserved for the briefing itself so `--json` output stays clean.
pub fn configure_logging() {
    let console_log = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(CONSOLE_FILTER)),
        );

    let file_appender = rolling::daily("logs", "newsbrief.log");
    let file_log = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(EnvFilter::new(FILE_FILTER));

    tracing_subscriber::Registry::default()
        .with(console_log)
        .with(file_log)
        .init();
}
