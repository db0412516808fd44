//! Prometheus metrics for the RTH gateway and engine.
//!
//! Naming convention: `rth_<area>_<metric>_<unit>`.

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Total verification reports accepted
    pub static ref VERIFICATIONS_SUBMITTED: Counter = Counter::new(
        "rth_gateway_verifications_submitted_total",
        "Total verification reports accepted by the gateway"
    ).expect("metric creation failed");

    /// Consensus runs by decision
    pub static ref CONSENSUS_RUNS: CounterVec = CounterVec::new(
        Opts::new("rth_consensus_runs_total", "Total consensus computations"),
        &["decision"]  // authorize / caution / block
    ).expect("metric creation failed");

    /// Consensus requests rejected below the tetrahedral quorum
    pub static ref QUORUM_REJECTIONS: Counter = Counter::new(
        "rth_gateway_quorum_rejections_total",
        "Consensus requests rejected for insufficient verifications"
    ).expect("metric creation failed");

    /// Reputation amplitude adjustments applied after consensus runs
    pub static ref REPUTATION_UPDATES: CounterVec = CounterVec::new(
        Opts::new("rth_reputation_updates_total", "Reputation adjustments applied"),
        &["direction"]  // reward / penalty
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; duplicate registrations are ignored.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let registrations = [
        REGISTRY.register(Box::new(VERIFICATIONS_SUBMITTED.clone())),
        REGISTRY.register(Box::new(CONSENSUS_RUNS.clone())),
        REGISTRY.register(Box::new(QUORUM_REJECTIONS.clone())),
        REGISTRY.register(Box::new(REPUTATION_UPDATES.clone())),
    ];

    for result in registrations {
        match result {
            Ok(()) => {}
            Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Render the registry in prometheus text exposition format.
pub fn metrics_text() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder
        .encode(&REGISTRY.gather(), &mut buffer)
        .map_err(|e| TelemetryError::MetricsEncode(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsEncode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        register_metrics().unwrap();
        register_metrics().unwrap();
    }

    #[test]
    fn test_metrics_render_after_touch() {
        register_metrics().unwrap();
        VERIFICATIONS_SUBMITTED.inc();
        CONSENSUS_RUNS.with_label_values(&["authorize"]).inc();

        let text = metrics_text().unwrap();
        assert!(text.contains("rth_gateway_verifications_submitted_total"));
        assert!(text.contains("rth_consensus_runs_total"));
    }
}
