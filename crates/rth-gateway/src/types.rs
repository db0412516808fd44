//! Wire and audit types for the gateway API.

use chrono::{DateTime, Utc};
use rth_core::{ConsensusOutcome, OutlierReport, PhaseEntry, Verification};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// `submit_verification` request body.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVerificationRequest {
    pub verifier_id: String,
    pub session_id: String,
    pub verified_value: f64,
    /// Response latency measured by the host application, used only to
    /// derive the carried frequency/wavelength harmonics.
    #[serde(default)]
    pub response_latency_ms: f64,
    /// Free-form evidence attached by the verifier; stored with the audit
    /// trail, never consumed by the math.
    #[serde(default)]
    pub verification_data: Option<serde_json::Value>,
    #[serde(default)]
    pub comments: Option<String>,
}

/// Stored unit for one accepted submission: the engine-facing verification
/// plus the evidence attachments, which travel only through the store and
/// the audit trail.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub verification: Verification,
    #[serde(default)]
    pub verification_data: Option<serde_json::Value>,
    #[serde(default)]
    pub comments: Option<String>,
}

/// `submit_verification` response body.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVerificationResponse {
    pub verification_id: Uuid,
    pub session_id: String,
    pub verification_count: usize,
    pub quorum_met: bool,
    pub required: usize,
}

/// `calculate_consensus` response body.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusResponse {
    pub consensus: ConsensusOutcome,
    pub outlier: Option<OutlierReport>,
    pub phase_matrix_size: usize,
    pub verification_count: usize,
    /// Decision-keyed human-readable summary.
    pub message: String,
}

/// Persisted record of one consensus run.
///
/// The phase matrix snapshot here is a cache for audit readers, never the
/// source of truth; a fresh run recomputes it from the verification set.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusAudit {
    pub outcome: ConsensusOutcome,
    pub outlier: Option<OutlierReport>,
    pub phase_matrix: BTreeMap<String, PhaseEntry>,
    /// Submissions the run was computed over, evidence attachments included.
    pub submissions: Vec<SubmissionRecord>,
    pub computed_at: DateTime<Utc>,
}
