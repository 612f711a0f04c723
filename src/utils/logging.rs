// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries, demos and benchmarks
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber that prints events up to `max_level`.
///
/// Returns `false` when a global subscriber is already set; the library
/// itself never installs one.
pub fn init_logging(max_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .try_init()
        .is_ok()
}
