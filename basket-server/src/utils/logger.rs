//! Logging Infrastructure
//!
//! Structured logging with optional daily-rotated file output.
//! The `RUST_LOG` env filter takes precedence over the default level.

use std::path::Path;

/// Initialize the logger with stdout output only
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger, writing to a daily-rotated file when `log_dir`
/// is provided and exists
pub fn init_logger_with_file(default_level: Option<&str>, log_dir: Option<&str>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level.unwrap_or("info")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && Path::new(dir).exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "basket-server");
        subscriber.with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}
