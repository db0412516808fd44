//! # Consensus Calculator - Vector Summation
//!
//! Aggregates a verification snapshot into a single agreement decision.
//!
//! ## Algorithm
//!
//! 1. Per verifier: average its pairwise phase against every other verifier.
//! 2. Treat each average phase as a vector direction and the verifier's
//!    amplitude (reputation weight) as the vector length; sum in cartesian
//!    space.
//! 3. The resultant magnitude, normalized by the amplitude sum, gives the
//!    mean resultant length of circular statistics; `1 - r` is the circular
//!    variance (lower = more stable agreement).
//! 4. Confidence combines angular agreement and vector coherence, then a
//!    fixed two-threshold policy picks AUTHORIZE / CAUTION / BLOCK.
//!
//! ## Preconditions (caller-enforced)
//!
//! The tetrahedral quorum and at least one verifier with positive amplitude
//! must be checked before calling in. A zero amplitude sum makes the
//! normalization divide by zero; the resulting non-finite values must be
//! rejected upstream, never fed into a decision.

use super::{PhaseMatrix, Verification};
use serde::{Deserialize, Serialize};

/// Consensus decision, in policy order of strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Authorize,
    Caution,
    Block,
}

impl Decision {
    /// Human-readable message keyed by decision, for API responses and
    /// audit records.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Authorize => {
                "Harmonic consensus reached: verifications resonate, transaction authorized"
            }
            Self::Caution => {
                "Partial resonance: consensus reached with dissonance, manual review advised"
            }
            Self::Block => "Destructive interference: verifications in discord, transaction blocked",
        }
    }
}

/// Output of one consensus run.
///
/// Computed fresh per invocation; callers persist it as an audit record
/// tied to the session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusOutcome {
    /// Resultant vector length.
    pub magnitude: f64,
    /// Resultant vector phase in degrees, reported unsigned (see below).
    pub avg_phase: f64,
    /// 0..100.
    pub confidence: f64,
    /// 0..1, lower = more stable.
    pub circular_variance: f64,
    pub decision: Decision,
    /// `100 * (1 - circular_variance)`.
    pub phase_stability: f64,
}

/// Compute consensus over a verification snapshot and its phase matrix.
///
/// The snapshot and matrix must come from the same immutable unit; indices
/// into `verifications` are the matrix's positional keys.
///
/// `avg_phase` is `|atan2(sum_y, sum_x)|` in degrees: the absolute value
/// folds negative resultant angles onto positive ones asymmetrically near
/// ±180. That fold is a fixed, testable contract - the decision thresholds
/// were tuned against it - and must not be "corrected" to a signed or
/// wrapped range.
pub fn calculate_consensus(
    verifications: &[Verification],
    matrix: &PhaseMatrix,
) -> ConsensusOutcome {
    let n = verifications.len();

    let mut sum_x = 0.0_f64;
    let mut sum_y = 0.0_f64;
    let mut sum_amplitudes = 0.0_f64;

    for (i, verification) in verifications.iter().enumerate() {
        let avg_phase_deg = average_phase(matrix, i, n);
        let radians = avg_phase_deg.to_radians();
        sum_x += verification.amplitude * radians.cos();
        sum_y += verification.amplitude * radians.sin();
        sum_amplitudes += verification.amplitude;
    }

    let magnitude = (sum_x * sum_x + sum_y * sum_y).sqrt();
    let avg_phase = sum_y.atan2(sum_x).to_degrees().abs();

    let r_normalized = magnitude / sum_amplitudes;
    let circular_variance = 1.0 - r_normalized;
    let confidence = (1.0 - avg_phase / 180.0) * r_normalized * 100.0;

    // First match wins, evaluated strongest-first.
    let decision = if confidence >= 75.0 && circular_variance < 0.3 {
        Decision::Authorize
    } else if confidence >= 50.0 && circular_variance < 0.5 {
        Decision::Caution
    } else {
        Decision::Block
    };

    tracing::debug!(
        verifiers = n,
        magnitude,
        avg_phase,
        confidence,
        circular_variance,
        ?decision,
        "consensus computed"
    );

    ConsensusOutcome {
        magnitude,
        avg_phase,
        confidence,
        circular_variance,
        decision,
        phase_stability: (1.0 - circular_variance) * 100.0,
    }
}

/// Average phase of verifier `i` against every other verifier.
///
/// Falls back to 0 when a verifier has no comparable pairs, which cannot
/// occur for N >= 2 with a matrix built from the same snapshot.
fn average_phase(matrix: &PhaseMatrix, i: usize, n: usize) -> f64 {
    let mut total = 0.0;
    let mut pairs = 0_usize;
    for j in 0..n {
        if j == i {
            continue;
        }
        if let Some(entry) = matrix.get(i, j) {
            total += entry.phase;
            pairs += 1;
        }
    }
    if pairs == 0 {
        0.0
    } else {
        total / pairs as f64
    }
}
