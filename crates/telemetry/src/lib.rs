//! Tracing/logging pipeline for biblio services.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use biblio_kernel::settings::{LogFormat, TelemetrySettings};

/// Initialize the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set and defaults to `info`.
/// Call once at startup; a second call fails because the global
/// subscriber is already installed.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    tracing::debug!(format = ?settings.log_format, "telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_installs_subscriber_once() {
        let settings = TelemetrySettings::default();
        assert!(init(&settings).is_ok());
        // The global subscriber is already set now.
        assert!(init(&settings).is_err());
    }
}
