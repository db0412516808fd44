//! Tracing subscriber initialization.

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber and register metrics.
///
/// Idempotence: a second call fails with `SubscriberInit` because the
/// global default can only be set once per process; tests that need a
/// subscriber should use `try_init` semantics by ignoring the error.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(format!("bad log level filter: {}", e)))?;

    let result = if config.json_logs {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };
    result.map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    crate::metrics::register_metrics()?;

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "telemetry initialized"
    );
    Ok(())
}
