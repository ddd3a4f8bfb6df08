//! Telemetry and diagnostics initialization for the todo service.
//!
//! This module sets up structured logging using the `tracing` ecosystem.
//!
//! ## Behavior
//!
//! - Uses `tracing-subscriber` with pretty-printed output.
//! - Pulls filtering rules from `RUST_LOG` or defaults to `info`.
//! - Includes thread ID, file, and line number for traceability.
//! - Timestamped using local time (RFC 3339 format).
//!
//! Note that the server's own log events are compiled in only with the
//! `tracing` cargo feature; without it the subscriber still captures
//! events emitted by dependencies.

/// Initializes structured logging via `tracing-subscriber`.
///
/// This function configures the default global subscriber with:
/// - Environment-based log level filtering (via `RUST_LOG`)
/// - Pretty-printed span and event formatting
/// - File/line/thread metadata for diagnostics
pub fn init_tracing() {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::{EnvFilter, fmt};

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_span_events(FmtSpan::NONE)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::rfc_3339())
        .pretty()
        .init();
}
