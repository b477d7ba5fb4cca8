//! Opt-in tracing setup.
//!
//! The resolver and layout engine emit `tracing` events at the `debug` and
//! `trace` levels. Nothing is subscribed by default: hosts that already run
//! their own subscriber keep it, and small tools or tests can call
//! [`init_default_tracing`] (behind the `telemetry` feature) to get a
//! compact stderr logger honoring `RUST_LOG`.

/// Installs a compact global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set and defaults to `info`
/// otherwise. Returns `false` when the `telemetry` feature is off or when a
/// global subscriber is already in place, so calling this from library code
/// is always safe.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
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
