//! # Risk Pressure Aggregator
//!
//! A separate numeric policy table, independent of the phase machinery:
//! four 0..100 "goodness" scores are complemented, weighted, and summed
//! into a single pressure value that keys a four-state supplier policy.

use serde::{Deserialize, Serialize};

/// Fixed complement weights; sum to 1.0.
const TAX_WEIGHT: f64 = 0.35;
const CREDIT_WEIGHT: f64 = 0.20;
const REGULATORY_WEIGHT: f64 = 0.30;
const PERFORMANCE_WEIGHT: f64 = 0.15;

/// Supplier sub-scores, each on a 0..100 goodness scale (higher = better).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScores {
    pub tax_compliance: f64,
    pub credit_score: f64,
    pub regulatory_compliance: f64,
    pub performance_score: f64,
}

/// Four-state risk policy band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskState {
    Low,
    Moderate,
    High,
    Critical,
}

/// Aggregated pressure with its policy consequences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Weighted sum of score complements, 0..100.
    pub total_pressure: f64,
    pub risk_state: RiskState,
    /// How often the supplier must be re-verified under this band.
    pub verification_cadence: String,
    pub payment_terms: String,
}

/// Aggregate four sub-scores into a risk pressure and its policy band.
///
/// Bands on `total_pressure`: <=30 LOW, <=60 MODERATE, <=85 HIGH,
/// otherwise CRITICAL (payments suspended).
pub fn risk_pressure(scores: &RiskScores) -> RiskAssessment {
    let total_pressure = (100.0 - scores.tax_compliance) * TAX_WEIGHT
        + (100.0 - scores.credit_score) * CREDIT_WEIGHT
        + (100.0 - scores.regulatory_compliance) * REGULATORY_WEIGHT
        + (100.0 - scores.performance_score) * PERFORMANCE_WEIGHT;

    let (risk_state, verification_cadence, payment_terms) = if total_pressure <= 30.0 {
        (RiskState::Low, "monthly", "Net 30")
    } else if total_pressure <= 60.0 {
        (RiskState::Moderate, "bi-weekly", "Net 15")
    } else if total_pressure <= 85.0 {
        (RiskState::High, "weekly", "Payment on delivery")
    } else {
        (
            RiskState::Critical,
            "daily",
            "BLOCKED - payments suspended pending review",
        )
    };

    RiskAssessment {
        total_pressure,
        risk_state,
        verification_cadence: verification_cadence.to_string(),
        payment_terms: payment_terms.to_string(),
    }
}
