//! Verification report entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Propagation constant for the latency-derived wavelength, in m/s of the
/// resonance metaphor. Only the ratio matters; the value is a calibration
/// choice isolated here.
pub const PROPAGATION_CONSTANT: f64 = 300.0;

/// One verifier's report within a session.
///
/// A session's verification set is an immutable snapshot once consensus is
/// computed against it: the phase matrix and the report list must come from
/// the same snapshot, and historical reports are never mutated in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub id: Uuid,
    /// Identifies the reporting party.
    pub verifier_id: String,
    /// The numeric claim being cross-checked (e.g. a measured quantity).
    pub verified_value: f64,
    /// Reporting party's current reputation weight in [0, 1].
    /// Used as the vector length in consensus summation.
    pub amplitude: f64,
    /// Latency-derived harmonic, carried through but not consumed by the
    /// consensus computation.
    pub frequency: f64,
    /// Latency-derived harmonic, carried through but not consumed.
    pub wavelength: f64,
    pub timestamp: DateTime<Utc>,
}

impl Verification {
    /// Create a report with harmonics derived from response latency.
    pub fn new(
        verifier_id: impl Into<String>,
        verified_value: f64,
        amplitude: f64,
        response_latency_ms: f64,
    ) -> Self {
        let (frequency, wavelength) = harmonics_from_latency(response_latency_ms);
        Self {
            id: Uuid::new_v4(),
            verifier_id: verifier_id.into(),
            verified_value,
            amplitude,
            frequency,
            wavelength,
            timestamp: Utc::now(),
        }
    }
}

/// Derive the carried `(frequency, wavelength)` pair from response latency.
///
/// Frequency is the inverse of latency in Hz (a fast responder "oscillates"
/// faster); wavelength follows from the propagation constant. Neither value
/// enters the consensus math.
pub fn harmonics_from_latency(latency_ms: f64) -> (f64, f64) {
    let frequency = 1000.0 / (latency_ms.max(0.0) + 1.0);
    let wavelength = PROPAGATION_CONSTANT / frequency;
    (frequency, wavelength)
}
