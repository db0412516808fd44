//! # rth-core
//!
//! Resonant Tender Harmonics consensus engine.
//!
//! ## Model
//!
//! Multi-party agreement over verification reports is computed with a
//! phase-angle / circular-statistics model borrowed from signal-processing
//! vector summation:
//!
//! ```text
//! reports ──→ build_phase_matrix ──→ calculate_consensus ──→ decision
//!                   │                        │
//!                   │                (not AUTHORIZE?)
//!                   └──────→ identify_outlier
//! ```
//!
//! Each pair of reported values is mapped to a 0..180 degree phase angle
//! (relative disagreement), each verifier's average phase becomes a vector
//! direction, its reputation weight the vector length, and the normalized
//! resultant of the vector sum yields confidence, circular variance, and a
//! three-way AUTHORIZE / CAUTION / BLOCK decision.
//!
//! ## Purity
//!
//! Every function in this crate is a pure, synchronous, CPU-only
//! computation over its own arguments: no I/O, no shared mutable state,
//! no module-level counters or singletons. Calls may overlap freely across
//! threads. Preconditions (the tetrahedral quorum, at least one positive
//! amplitude) are enforced by the calling layer, not re-checked inside the
//! math.
//!
//! ## Usage
//!
//! ```rust
//! use rth_core::{build_phase_matrix, calculate_consensus, tetrahedral_quorum, Verification};
//!
//! let reports: Vec<Verification> = vec![/* collected from verifiers */];
//! if tetrahedral_quorum(reports.len()) {
//!     let matrix = build_phase_matrix(&reports);
//!     let outcome = calculate_consensus(&reports, &matrix);
//!     println!("{:?}", outcome.decision);
//! }
//! ```

pub mod domain;

// Re-export main types and operations
pub use domain::{
    build_phase_matrix, calculate_consensus, ensure_computable, harmonics_from_latency,
    identify_outlier, phase_angle, risk_pressure, tetrahedral_quorum, update_reputation,
    validate_dual_fields,
    ConsensusOutcome, Decision, DualFieldReport, EngineError, EngineResult, InterferenceType,
    OutlierReport, PhaseEntry, PhaseMatrix, RiskAssessment, RiskScores, RiskState, Verification,
    DEFAULT_CALIBRATION, PENALTY_DELTA, REWARD_DELTA, TETRAHEDRAL_QUORUM,
};
