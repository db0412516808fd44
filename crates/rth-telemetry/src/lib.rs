//! # rth-telemetry
//!
//! Structured logging and prometheus metrics for RTH-Engine.
//!
//! ## Components
//!
//! - `tracing-subscriber` initialization with env-filter and optional
//!   JSON output (containers get JSON by default)
//! - Prometheus counter registry, rendered as text for the gateway's
//!   `/metrics` endpoint
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rth_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_telemetry(&config).expect("telemetry init failed");
//! ```

mod config;
mod logging;
mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_telemetry;
pub use metrics::{
    metrics_text, register_metrics, CONSENSUS_RUNS, QUORUM_REJECTIONS, REPUTATION_UPDATES,
    VERIFICATIONS_SUBMITTED,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Failed to register prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Failed to encode metrics: {0}")]
    MetricsEncode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
