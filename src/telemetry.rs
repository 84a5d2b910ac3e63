//! Tracing setup for binaries and tests embedding `barplot`.
//!
//! The library itself only emits `tracing` events. Installing a subscriber is
//! left to the host, or done through `init_default_tracing` when the
//! `telemetry` feature is enabled.

/// Directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "barplot=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
