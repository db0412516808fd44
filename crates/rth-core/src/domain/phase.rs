//! # Phase-Angle Primitive and Phase Matrix
//!
//! The atomic primitive of the engine: a pairwise phase angle encoding
//! relative disagreement between two numeric claims on a 0..180 degree
//! scale, and the O(N²) matrix of all pairwise angles for a session.
//!
//! ## Calibration
//!
//! With the default calibration of 900, a 10% relative variance maps to a
//! 90 degree phase, and any variance at or above 20% saturates at 180.

use super::Verification;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default calibration constant: 10% relative variance -> 90 degrees.
pub const DEFAULT_CALIBRATION: f64 = 900.0;

/// Compute the phase angle between two numeric claims, in degrees.
///
/// Relative variance `|a - b| / max(a, b)` scaled by `calibration` and
/// clamped to [0, 180]. Returns 0 when both inputs are 0 (divide-by-zero
/// guard). The denominator is `max(a, b)` verbatim, not `max(|a|, |b|)`
/// nor the midpoint; downstream thresholds were tuned against exactly
/// this encoding.
pub fn phase_angle(value_a: f64, value_b: f64, calibration: f64) -> f64 {
    if value_a == 0.0 && value_b == 0.0 {
        return 0.0;
    }
    let variance = (value_a - value_b).abs() / value_a.max(value_b);
    (variance * calibration).clamp(0.0, 180.0)
}

/// Three-way classification of a phase angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterferenceType {
    /// Phase below 45 degrees: the claims reinforce each other.
    Constructive,
    /// Phase in [45, 90): partial agreement.
    Partial,
    /// Phase at or above 90 degrees: the claims cancel out.
    Destructive,
}

impl InterferenceType {
    /// Classify a phase angle in degrees.
    pub fn from_phase(phase: f64) -> Self {
        if phase < 45.0 {
            Self::Constructive
        } else if phase < 90.0 {
            Self::Partial
        } else {
            Self::Destructive
        }
    }
}

/// One pairwise entry of the phase matrix.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseEntry {
    /// Phase angle in degrees, 0..180.
    pub phase: f64,
    pub interference_type: InterferenceType,
}

/// All pairwise phase angles of one verification snapshot.
///
/// Keyed by positional index pair `(i, j)` with `i < j` into the snapshot's
/// report list - positions, not verifier identity. The matrix is ephemeral
/// and fully determined by the snapshot; it is recomputed per consensus run
/// and never authoritative state. BTreeMap keeps iteration deterministic.
#[derive(Clone, Debug, Default)]
pub struct PhaseMatrix {
    entries: BTreeMap<(usize, usize), PhaseEntry>,
}

impl PhaseMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, normalizing the pair to `(min, max)` order.
    pub fn insert(&mut self, i: usize, j: usize, entry: PhaseEntry) {
        let key = if i <= j { (i, j) } else { (j, i) };
        self.entries.insert(key, entry);
    }

    /// Look up the entry for a pair regardless of argument order.
    pub fn get(&self, i: usize, j: usize) -> Option<&PhaseEntry> {
        let key = if i <= j { (i, j) } else { (j, i) };
        self.entries.get(&key)
    }

    /// Number of pairwise entries: `N * (N - 1) / 2` for N reports.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending `(i, j)` order.
    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &PhaseEntry)> {
        self.entries.iter()
    }

    /// Render as an `"i-j"`-keyed map for wire output and audit records.
    pub fn to_keyed_map(&self) -> BTreeMap<String, PhaseEntry> {
        self.entries
            .iter()
            .map(|(&(i, j), entry)| (format!("{}-{}", i, j), *entry))
            .collect()
    }
}

/// Build the phase matrix for a verification snapshot.
///
/// Every unordered positional pair `(i, j)`, `i < j`, appears exactly once,
/// computed with the default calibration. O(N²) pairs; N is small per
/// session (single digits to low tens).
pub fn build_phase_matrix(verifications: &[Verification]) -> PhaseMatrix {
    let mut matrix = PhaseMatrix::new();
    for i in 0..verifications.len() {
        for j in (i + 1)..verifications.len() {
            let phase = phase_angle(
                verifications[i].verified_value,
                verifications[j].verified_value,
                DEFAULT_CALIBRATION,
            );
            matrix.insert(
                i,
                j,
                PhaseEntry {
                    phase,
                    interference_type: InterferenceType::from_phase(phase),
                },
            );
        }
    }
    matrix
}
