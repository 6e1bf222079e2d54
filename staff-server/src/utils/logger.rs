//! Logging Infrastructure
//!
//! Structured logging setup for development (human readable) and
//! production (JSON lines). `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "staff_server=info,tower_http=info";

/// Initialize the global subscriber
///
/// Calling it twice is harmless: the second install is ignored.
pub fn init_logger(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
