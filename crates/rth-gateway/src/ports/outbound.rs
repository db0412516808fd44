//! Driven ports (outbound dependencies).
//!
//! The host application persists sessions and verifier reputations however
//! it likes; the gateway only sees these two traits. The in-memory
//! adapters in `crate::adapters` back the default runtime and the tests.

use crate::types::{ConsensusAudit, SubmissionRecord};
use async_trait::async_trait;

/// Amplitude answered for a verifier with no recorded reputation: a
/// first-time participant is neither fully trusted nor weightless, so
/// unknown verifiers alone can never produce the degenerate zero-amplitude
/// condition.
pub const DEFAULT_AMPLITUDE: f64 = 0.5;

/// Verification and audit persistence for sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Append a report to a session, returning the new report count.
    ///
    /// Appended reports are immutable; consensus always runs against the
    /// full snapshot as stored.
    async fn append_verification(
        &self,
        session_id: &str,
        record: SubmissionRecord,
    ) -> Result<usize, String>;

    /// Snapshot of all reports for a session, in submission order.
    async fn verifications(&self, session_id: &str) -> Result<Vec<SubmissionRecord>, String>;

    /// Persist the audit record of a consensus run.
    async fn record_consensus(
        &self,
        session_id: &str,
        audit: ConsensusAudit,
    ) -> Result<(), String>;

    /// Latest persisted consensus audit for a session, if any.
    async fn latest_consensus(&self, session_id: &str) -> Result<Option<ConsensusAudit>, String>;
}

/// Reputation lookup and writeback for verifiers.
#[async_trait]
pub trait VerifierDirectory: Send + Sync {
    /// Current reputation weight in [0, 1]; `DEFAULT_AMPLITUDE` for an
    /// unknown verifier.
    async fn amplitude(&self, verifier_id: &str) -> Result<f64, String>;

    /// Persist an updated reputation weight.
    async fn set_amplitude(&self, verifier_id: &str, amplitude: f64) -> Result<(), String>;
}
