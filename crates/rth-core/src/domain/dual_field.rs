//! # Dual-Field Validator
//!
//! Compares one automated/objective measurement against one human-reported
//! value for the same claim, independent of any multi-party session. Gross
//! divergence between the two fields is a fraud signal.

use super::{phase_angle, InterferenceType, DEFAULT_CALIBRATION};
use serde::{Deserialize, Serialize};

/// Fraud signal for one objective/subjective field pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualFieldReport {
    /// Phase angle between the two fields, degrees.
    pub field_phase: f64,
    /// 0..100, saturating at 100 once the fields are in destructive phase.
    pub fraud_likelihood: f64,
    pub interference_type: InterferenceType,
}

/// Evaluate the fraud signal for an objective/subjective value pair.
///
/// The 0..90 degree sub-range rescales linearly to 0..100% likelihood;
/// anything at or beyond 90 degrees saturates at 100%.
pub fn validate_dual_fields(objective_value: f64, subjective_value: f64) -> DualFieldReport {
    let field_phase = phase_angle(objective_value, subjective_value, DEFAULT_CALIBRATION);
    let fraud_likelihood = if field_phase >= 90.0 {
        100.0
    } else {
        (field_phase / 90.0) * 100.0
    };
    DualFieldReport {
        field_phase,
        fraud_likelihood,
        interference_type: InterferenceType::from_phase(field_phase),
    }
}
