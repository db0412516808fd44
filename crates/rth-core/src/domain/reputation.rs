//! # Reputation Updater
//!
//! Exponential-moving-average-style amplitude adjustment after a consensus
//! run. The penalty outweighs the reward 2.5:1, biasing reputation toward
//! caution: a verifier recovers trust slowly and loses it fast.

/// Amplitude gain for a report that matched consensus, per unit weight.
pub const REWARD_DELTA: f64 = 0.10;

/// Amplitude loss for a report that diverged from consensus, per unit
/// weight.
pub const PENALTY_DELTA: f64 = 0.25;

/// Compute a verifier's new amplitude after a consensus run.
///
/// Pure; the caller persists the result back onto the verifier record for
/// use as `amplitude` in future sessions. Clamped to [0, 1].
pub fn update_reputation(current_amplitude: f64, was_correct: bool, weight: f64) -> f64 {
    let delta = if was_correct {
        REWARD_DELTA * weight
    } else {
        -(PENALTY_DELTA * weight)
    };
    (current_amplitude + delta).clamp(0.0, 1.0)
}
