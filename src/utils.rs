use std::time::{SystemTime, UNIX_EPOCH};
use tracing::Level;

/// Milliseconds elapsed since the Unix epoch, or 0 if the clock is set before it.
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Installs a global `tracing` subscriber that writes to stdout.
///
/// The level comes from the `LOGLEVEL` environment variable (`TRACE`,
/// `DEBUG`, `INFO`, `WARN` or `ERROR`, case-insensitive) and defaults to
/// `INFO`. Calling it again after a subscriber is installed does nothing.
pub fn setup_logger() {
    let level = std::env::var("LOGLEVEL")
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(Level::INFO);

    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}

fn parse_level(value: &str) -> Option<Level> {
    value.trim().parse().ok()
}
