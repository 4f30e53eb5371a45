//! Tracing subscriber setup

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `-v` count
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Install the global subscriber.
///
/// Console output goes to stderr so reports on stdout stay clean. With a
/// `log_dir`, events are also written to daily-rotated files; keep the
/// returned guard alive until exit so buffered lines are flushed.
pub fn init(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::new(level_for(verbose));
    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    match log_dir {
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            None
        }
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "jcl-optimizer.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = fmt::layer().with_ansi(false).with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file)
                .init();
            tracing::info!(dir = %dir.display(), "Writing logs to file");
            Some(guard)
        }
    }
}
