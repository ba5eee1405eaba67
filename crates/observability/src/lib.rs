//! Shared observability setup: structured logging via `tracing`.

/// Tracing configuration (filter, output format).
pub mod tracing;

/// Initialize process-wide observability.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
