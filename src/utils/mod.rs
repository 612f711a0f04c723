// ============================================================================
// Utilities Module
// Helpers for hosts embedding the literal model
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
