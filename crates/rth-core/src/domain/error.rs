//! Error types for the harmonics engine.
//!
//! The pure math itself is total over well-formed numeric input; these
//! variants name the precondition violations the calling layer must reject
//! before invoking consensus computation.

use super::TETRAHEDRAL_QUORUM;

/// Engine precondition violations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Quorum not met: {got} of {required} verifications present")]
    QuorumNotMet { got: usize, required: usize },

    #[error("Degenerate input: total verifier amplitude is zero")]
    DegenerateAmplitude,

    #[error("Empty verification set")]
    EmptyVerificationSet,
}

impl EngineError {
    /// Quorum violation against the fixed tetrahedral requirement.
    pub fn quorum_not_met(got: usize) -> Self {
        Self::QuorumNotMet {
            got,
            required: TETRAHEDRAL_QUORUM,
        }
    }
}

/// Result type for engine precondition checks
pub type EngineResult<T> = Result<T, EngineError>;
