use std::io;

use tracing::Level;

/// Initialize the tracing subscriber at `level`, writing to stderr so log
/// lines never mix with text pasted to stdout. Safe to call multiple times;
/// subsequent calls are no-ops for the global subscriber.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
