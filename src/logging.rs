//! Tracing subscriber setup.
//!
//! The level filter comes from `RUST_LOG` and defaults to `info`, e.g.
//! `RUST_LOG=attendance_payroll=debug` to see report builder output.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber.
///
/// # Example
///
/// ```no_run
/// attendance_payroll::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Installs a debug-level subscriber that writes through the test harness.
///
/// Safe to call from several tests; only the first call takes effect.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
