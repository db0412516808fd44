//! Integration tests across the engine, gateway, and telemetry crates.

pub mod engine_properties;
pub mod gateway_flows;
