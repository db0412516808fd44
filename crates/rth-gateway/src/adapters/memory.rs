//! In-memory adapters for the gateway ports.
//!
//! Back the default runtime and the test suites. Production deployments
//! substitute adapters over the host application's own persistence.

use crate::ports::{SessionStore, VerifierDirectory, DEFAULT_AMPLITUDE};
use crate::types::{ConsensusAudit, SubmissionRecord};
use async_trait::async_trait;
use dashmap::DashMap;

/// DashMap-backed session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Vec<SubmissionRecord>>,
    audits: DashMap<String, ConsensusAudit>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn append_verification(
        &self,
        session_id: &str,
        record: SubmissionRecord,
    ) -> Result<usize, String> {
        let mut entry = self.sessions.entry(session_id.to_string()).or_default();
        entry.push(record);
        Ok(entry.len())
    }

    async fn verifications(&self, session_id: &str) -> Result<Vec<SubmissionRecord>, String> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|reports| reports.clone())
            .unwrap_or_default())
    }

    async fn record_consensus(
        &self,
        session_id: &str,
        audit: ConsensusAudit,
    ) -> Result<(), String> {
        self.audits.insert(session_id.to_string(), audit);
        Ok(())
    }

    async fn latest_consensus(&self, session_id: &str) -> Result<Option<ConsensusAudit>, String> {
        Ok(self.audits.get(session_id).map(|audit| audit.clone()))
    }
}

/// DashMap-backed verifier reputation directory.
#[derive(Debug, Default)]
pub struct InMemoryVerifierDirectory {
    amplitudes: DashMap<String, f64>,
}

impl InMemoryVerifierDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a verifier's reputation, for tests and bootstrap data.
    pub fn seed(&self, verifier_id: &str, amplitude: f64) {
        self.amplitudes
            .insert(verifier_id.to_string(), amplitude.clamp(0.0, 1.0));
    }
}

#[async_trait]
impl VerifierDirectory for InMemoryVerifierDirectory {
    async fn amplitude(&self, verifier_id: &str) -> Result<f64, String> {
        Ok(self
            .amplitudes
            .get(verifier_id)
            .map(|a| *a)
            .unwrap_or(DEFAULT_AMPLITUDE))
    }

    async fn set_amplitude(&self, verifier_id: &str, amplitude: f64) -> Result<(), String> {
        self.amplitudes
            .insert(verifier_id.to_string(), amplitude.clamp(0.0, 1.0));
        Ok(())
    }
}
