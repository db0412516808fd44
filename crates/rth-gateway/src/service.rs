//! Session service - gateway business logic.
//!
//! Orchestrates one consensus run end to end: quorum gate, degenerate
//! input gate, phase matrix, consensus, conditional outlier detection,
//! reputation writeback, audit persistence. The engine math stays pure;
//! every stateful concern lives here.

use crate::error::{GatewayError, GatewayResult};
use crate::ports::{SessionStore, VerifierDirectory};
use crate::types::{
    ConsensusAudit, ConsensusResponse, SubmissionRecord, SubmitVerificationRequest,
    SubmitVerificationResponse,
};
use chrono::Utc;
use dashmap::DashMap;
use rth_core::{
    build_phase_matrix, calculate_consensus, ensure_computable, identify_outlier,
    tetrahedral_quorum, update_reputation, Decision, EngineError, Verification,
    TETRAHEDRAL_QUORUM,
};
use rth_telemetry::{CONSENSUS_RUNS, QUORUM_REJECTIONS, REPUTATION_UPDATES, VERIFICATIONS_SUBMITTED};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Gateway orchestration over a session store and verifier directory.
pub struct SessionService<S, D>
where
    S: SessionStore,
    D: VerifierDirectory,
{
    store: Arc<S>,
    directory: Arc<D>,
    /// Per-session locks: racing consensus requests for the same session
    /// are serialized so two conflicting audits cannot be persisted from
    /// overlapping runs. Different sessions proceed concurrently.
    session_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl<S, D> SessionService<S, D>
where
    S: SessionStore,
    D: VerifierDirectory,
{
    pub fn new(store: Arc<S>, directory: Arc<D>) -> Self {
        Self {
            store,
            directory,
            session_locks: DashMap::new(),
        }
    }

    /// Accept one verification report and answer whether the quorum is
    /// now met.
    pub async fn submit_verification(
        &self,
        request: SubmitVerificationRequest,
    ) -> GatewayResult<SubmitVerificationResponse> {
        let amplitude = self
            .directory
            .amplitude(&request.verifier_id)
            .await
            .map_err(GatewayError::Directory)?;

        let verification = Verification::new(
            request.verifier_id.clone(),
            request.verified_value,
            amplitude,
            request.response_latency_ms,
        );
        let verification_id = verification.id;

        let record = SubmissionRecord {
            verification,
            verification_data: request.verification_data,
            comments: request.comments,
        };
        let verification_count = self
            .store
            .append_verification(&request.session_id, record)
            .await
            .map_err(GatewayError::Store)?;

        VERIFICATIONS_SUBMITTED.inc();
        info!(
            session_id = %request.session_id,
            verifier_id = %request.verifier_id,
            verification_count,
            "verification accepted"
        );

        Ok(SubmitVerificationResponse {
            verification_id,
            session_id: request.session_id,
            verification_count,
            quorum_met: tetrahedral_quorum(verification_count),
            required: TETRAHEDRAL_QUORUM,
        })
    }

    /// Run consensus for a session.
    ///
    /// Rejects below the tetrahedral quorum (with current/required counts)
    /// and on zero total amplitude, before any math runs. The outlier pass
    /// runs only when the decision is not the strongest outcome.
    pub async fn calculate_consensus(&self, session_id: &str) -> GatewayResult<ConsensusResponse> {
        let lock = self
            .session_locks
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        let records = self
            .store
            .verifications(session_id)
            .await
            .map_err(GatewayError::Store)?;
        let verifications: Vec<Verification> = records
            .iter()
            .map(|record| record.verification.clone())
            .collect();

        if let Err(err) = ensure_computable(&verifications) {
            if matches!(err, EngineError::QuorumNotMet { .. }) {
                QUORUM_REJECTIONS.inc();
            }
            warn!(session_id, error = %err, "consensus precondition rejected");
            return Err(err.into());
        }

        // Snapshot and matrix form one immutable unit for this run.
        let matrix = build_phase_matrix(&verifications);
        let outcome = calculate_consensus(&verifications, &matrix);

        let outlier = if outcome.decision != Decision::Authorize {
            identify_outlier(&verifications, &matrix)
        } else {
            None
        };

        self.apply_reputation_updates(&verifications, outlier.as_ref().map(|o| o.outlier_id.as_str()))
            .await?;

        let decision_label = match outcome.decision {
            Decision::Authorize => "authorize",
            Decision::Caution => "caution",
            Decision::Block => "block",
        };
        CONSENSUS_RUNS.with_label_values(&[decision_label]).inc();

        let audit = ConsensusAudit {
            outcome,
            outlier: outlier.clone(),
            phase_matrix: matrix.to_keyed_map(),
            submissions: records,
            computed_at: Utc::now(),
        };
        self.store
            .record_consensus(session_id, audit)
            .await
            .map_err(GatewayError::Store)?;

        info!(
            session_id,
            decision = ?outcome.decision,
            confidence = outcome.confidence,
            outlier = outlier.as_ref().map(|o| o.outlier_id.as_str()),
            "consensus recorded"
        );

        Ok(ConsensusResponse {
            consensus: outcome,
            outlier,
            phase_matrix_size: matrix.len(),
            verification_count: verifications.len(),
            message: outcome.decision.message().to_string(),
        })
    }

    /// Write updated amplitudes back to the directory: the flagged outlier
    /// is penalized, every other participant rewarded.
    async fn apply_reputation_updates(
        &self,
        verifications: &[Verification],
        outlier_id: Option<&str>,
    ) -> GatewayResult<()> {
        for verification in verifications {
            let was_correct = outlier_id != Some(verification.verifier_id.as_str());
            let updated = update_reputation(verification.amplitude, was_correct, 1.0);
            self.directory
                .set_amplitude(&verification.verifier_id, updated)
                .await
                .map_err(GatewayError::Directory)?;
            let direction = if was_correct { "reward" } else { "penalty" };
            REPUTATION_UPDATES.with_label_values(&[direction]).inc();
        }
        Ok(())
    }
}
