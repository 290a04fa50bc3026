//! Tracing and logging setup shared by services and test suites.
//!
//! The authorization layer emits `tracing` events (denied scope assertions,
//! fail-closed answers from unhydrated contexts); this crate wires a
//! subscriber for them.

pub mod tracing;

/// Initialize process-wide observability.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
