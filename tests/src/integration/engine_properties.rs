//! # Engine Numeric Contracts
//!
//! Cross-checks of the harmonics engine's fixed contracts through the
//! public crate API: phase saturation, the unanimity and total-discord
//! decision paths, outlier detection on the canonical defector case, and
//! the policy tables (risk pressure, reputation, quorum).

#[cfg(test)]
mod tests {
    use rth_core::{
        build_phase_matrix, calculate_consensus, identify_outlier, phase_angle, risk_pressure,
        tetrahedral_quorum, update_reputation, validate_dual_fields, Decision, InterferenceType,
        RiskScores, RiskState, Verification, DEFAULT_CALIBRATION,
    };

    fn snapshot(values: &[f64]) -> Vec<Verification> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Verification::new(format!("verifier-{}", i), v, 1.0, 100.0))
            .collect()
    }

    // =========================================================================
    // PHASE PRIMITIVE
    // =========================================================================

    #[test]
    fn test_phase_identity_for_equal_claims() {
        for x in [0.0, 1.0, 99.5, 1_000_000.0] {
            assert_eq!(phase_angle(x, x, DEFAULT_CALIBRATION), 0.0);
        }
    }

    #[test]
    fn test_phase_saturation_from_twenty_percent_variance() {
        for k in [900.0, 1000.0, 5000.0] {
            // |80 - 100| / 100 = 0.2
            assert_eq!(phase_angle(100.0, 80.0, k), 180.0);
        }
    }

    // =========================================================================
    // CONSENSUS DECISIONS
    // =========================================================================

    #[test]
    fn test_unanimity_authorizes_with_full_confidence() {
        let reports = snapshot(&[1250.0, 1250.0, 1250.0, 1250.0]);
        let matrix = build_phase_matrix(&reports);
        let outcome = calculate_consensus(&reports, &matrix);

        assert!(outcome.circular_variance.abs() < 1e-9);
        assert!((outcome.confidence - 100.0).abs() < 1e-9);
        assert_eq!(outcome.decision, Decision::Authorize);
    }

    #[test]
    fn test_total_disagreement_blocks() {
        // Alternating 0/100: every mixed pair saturates at 180 degrees
        let reports = snapshot(&[0.0, 100.0, 0.0, 100.0]);
        let matrix = build_phase_matrix(&reports);

        for i in 0..4 {
            for j in (i + 1)..4 {
                let entry = matrix.get(i, j).unwrap();
                if (i % 2) != (j % 2) {
                    assert_eq!(entry.interference_type, InterferenceType::Destructive);
                }
            }
        }

        let outcome = calculate_consensus(&reports, &matrix);
        assert_eq!(outcome.decision, Decision::Block);
    }

    // =========================================================================
    // OUTLIER DETECTION
    // =========================================================================

    #[test]
    fn test_canonical_defector_case() {
        let reports = snapshot(&[100.0, 102.0, 98.0, 500.0]);
        let matrix = build_phase_matrix(&reports);

        let outcome = calculate_consensus(&reports, &matrix);
        assert_ne!(outcome.decision, Decision::Authorize);

        let outlier = identify_outlier(&reports, &matrix).expect("defector must be flagged");
        assert_eq!(outlier.outlier_id, "verifier-3");
        assert_eq!(outlier.discord_score, 3);
        assert!((outlier.confidence - 100.0).abs() < 1e-9);
    }

    // =========================================================================
    // POLICY TABLES
    // =========================================================================

    #[test]
    fn test_quorum_gate() {
        assert!(!tetrahedral_quorum(3));
        assert!(tetrahedral_quorum(4));
    }

    #[test]
    fn test_reputation_asymmetry_and_bounds() {
        assert!(update_reputation(0.5, true, 1.0) > 0.5);
        assert!(update_reputation(0.5, false, 1.0) < 0.5);

        for current in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for weight in [0.0, 0.5, 1.0, 2.0, 3.0] {
                for correct in [true, false] {
                    let updated = update_reputation(current, correct, weight);
                    assert!((0.0..=1.0).contains(&updated));
                }
            }
        }
    }

    #[test]
    fn test_risk_pressure_extremes() {
        let perfect = risk_pressure(&RiskScores {
            tax_compliance: 100.0,
            credit_score: 100.0,
            regulatory_compliance: 100.0,
            performance_score: 100.0,
        });
        assert_eq!(perfect.total_pressure, 0.0);
        assert_eq!(perfect.risk_state, RiskState::Low);

        let worst = risk_pressure(&RiskScores {
            tax_compliance: 0.0,
            credit_score: 0.0,
            regulatory_compliance: 0.0,
            performance_score: 0.0,
        });
        assert!((worst.total_pressure - 100.0).abs() < 1e-9);
        assert_eq!(worst.risk_state, RiskState::Critical);
        assert!(worst.payment_terms.contains("BLOCKED"));
    }

    #[test]
    fn test_dual_field_saturation() {
        let report = validate_dual_fields(100.0, 50.0);
        assert_eq!(report.field_phase, 180.0);
        assert_eq!(report.fraud_likelihood, 100.0);
    }
}
