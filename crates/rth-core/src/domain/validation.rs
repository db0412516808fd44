//! Stateless precondition checks for a consensus run.
//!
//! The pure math never re-checks these; the calling layer runs them once
//! per consensus request, before any matrix is built.

use super::{tetrahedral_quorum, EngineError, EngineResult, Verification};

/// Validate that a verification snapshot is fit for consensus computation.
///
/// Rejects, in order: an empty snapshot, a snapshot below the tetrahedral
/// quorum, and a snapshot whose total amplitude is zero (which would make
/// the resultant normalization divide by zero and poison every downstream
/// value with NaN).
pub fn ensure_computable(verifications: &[Verification]) -> EngineResult<()> {
    if verifications.is_empty() {
        return Err(EngineError::EmptyVerificationSet);
    }
    if !tetrahedral_quorum(verifications.len()) {
        return Err(EngineError::quorum_not_met(verifications.len()));
    }
    let total_amplitude: f64 = verifications.iter().map(|v| v.amplitude).sum();
    if total_amplitude <= 0.0 {
        return Err(EngineError::DegenerateAmplitude);
    }
    Ok(())
}
