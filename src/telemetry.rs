//! Opt-in tracing bootstrap for hosts embedding a picker widget.
//!
//! The crate logs under two targets:
//! - `picker_rs::api`: widget mount and teardown (`debug`), listener
//!   registration, event routing and value-sync guard decisions (`trace`),
//!   engine construction failures and rejected host values (`warn`).
//! - `picker_rs::engine`: headless engine teardown (`debug`) and colors it
//!   could not interpret (`warn`).
//!
//! Configuration values that fail to parse are reported from
//! `picker_rs::core` at `warn`. Hosts with their own subscriber can filter
//! these targets directly, e.g. `RUST_LOG=picker_rs::api=trace`.

/// Installs a compact fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Only available with the `telemetry` feature; otherwise, or when the host
/// already set a global subscriber, nothing is installed and `false` is
/// returned.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
