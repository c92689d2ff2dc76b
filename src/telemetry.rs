//! Telemetry helpers for tools embedding `stats-printer`.
//!
//! Rendering emits `tracing` events (render start/finish, hook registration,
//! dispatch misses). Nothing is printed unless the host installs a
//! subscriber, either through `init_default_tracing` or its own setup.

/// Environment variable read before `RUST_LOG`.
pub const LOG_ENV: &str = "STATS_PRINTER_LOG";

/// Filter used when neither variable is set. Only this crate's warnings
/// reach stderr, so report output on stdout stays clean.
pub const DEFAULT_FILTER: &str = "stats_printer=warn";

/// Picks the filter directive: `STATS_PRINTER_LOG`, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`]. Blank values count as unset.
#[cfg_attr(not(feature = "telemetry"), allow(dead_code))]
fn filter_directive(lookup: impl Fn(&str) -> Option<String>) -> String {
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .filter_map(lookup)
        .find(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Initializes a stderr `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled, the filter directive does
/// not parse, or a global subscriber was already set by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let directive = filter_directive(|name| std::env::var(name).ok());
        let Ok(filter) = tracing_subscriber::EnvFilter::try_new(&directive) else {
            return false;
        };
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
