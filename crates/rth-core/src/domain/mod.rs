//! Domain types and pure operations of the harmonics engine.

pub mod consensus;
pub mod dual_field;
pub mod error;
pub mod outlier;
pub mod phase;
pub mod quorum;
pub mod reputation;
pub mod risk;
pub mod validation;
pub mod verification;

pub use consensus::{calculate_consensus, ConsensusOutcome, Decision};
pub use dual_field::{validate_dual_fields, DualFieldReport};
pub use error::{EngineError, EngineResult};
pub use outlier::{identify_outlier, OutlierReport};
pub use phase::{
    build_phase_matrix, phase_angle, InterferenceType, PhaseEntry, PhaseMatrix,
    DEFAULT_CALIBRATION,
};
pub use quorum::{tetrahedral_quorum, TETRAHEDRAL_QUORUM};
pub use reputation::{update_reputation, PENALTY_DELTA, REWARD_DELTA};
pub use risk::{risk_pressure, RiskAssessment, RiskScores, RiskState};
pub use validation::ensure_computable;
pub use verification::{harmonics_from_latency, Verification};
