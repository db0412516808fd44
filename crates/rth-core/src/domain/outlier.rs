//! # Outlier Identifier - Discord Detection
//!
//! Flags the single verifier most in destructive disagreement with its
//! peers, when such a verifier dominates the discord.

use super::{PhaseMatrix, Verification};
use serde::{Deserialize, Serialize};

/// A flagged discord-dominant verifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlierReport {
    /// The verifier flagged, by its reporting identity.
    pub outlier_id: String,
    /// 0..100: share of peers the outlier is in destructive phase with.
    pub confidence: f64,
    /// Count of peers at destructive phase (> 90 degrees) with the outlier.
    pub discord_score: usize,
    pub reason: String,
}

/// Identify the discord-dominant verifier of a snapshot, if any.
///
/// A verifier's discord score counts peers whose pairwise phase exceeds 90
/// degrees. The candidate with the maximum score is flagged only when it is
/// in destructive disagreement with at least half of all other verifiers
/// (`max_discord >= (N - 1) / 2`, evaluated in floating point). `None` is a
/// valid outcome meaning no single verifier dominates the disagreement.
///
/// Ties on the maximum score break to the lowest positional index, a
/// deterministic rule standing in for incidental iteration order.
pub fn identify_outlier(
    verifications: &[Verification],
    matrix: &PhaseMatrix,
) -> Option<OutlierReport> {
    let n = verifications.len();
    if n < 2 {
        return None;
    }

    let mut best_index = 0_usize;
    let mut max_discord = 0_usize;
    for i in 0..n {
        let discord = (0..n)
            .filter(|&j| j != i)
            .filter(|&j| matrix.get(i, j).is_some_and(|entry| entry.phase > 90.0))
            .count();
        if discord > max_discord {
            max_discord = discord;
            best_index = i;
        }
    }

    let peers = (n - 1) as f64;
    if (max_discord as f64) < peers / 2.0 {
        return None;
    }

    let confidence = max_discord as f64 / peers * 100.0;
    let outlier = &verifications[best_index];

    tracing::debug!(
        outlier_id = %outlier.verifier_id,
        discord = max_discord,
        confidence,
        "outlier flagged"
    );

    Some(OutlierReport {
        outlier_id: outlier.verifier_id.clone(),
        confidence,
        discord_score: max_discord,
        reason: format!(
            "Verifier {} in destructive interference with {} of {} peers ({:.1}% discord)",
            outlier.verifier_id, max_discord, n - 1, confidence
        ),
    })
}
