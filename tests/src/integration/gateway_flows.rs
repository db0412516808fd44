//! # Gateway End-to-End Flows
//!
//! Drives the session service and HTTP router the way the host
//! application would: submit reports until quorum, run consensus, inspect
//! the audit trail and reputation writebacks.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rth_core::{Decision, EngineError};
    use rth_gateway::{
        router, GatewayError, InMemorySessionStore, InMemoryVerifierDirectory, SessionService,
        SessionStore, SubmitVerificationRequest, VerifierDirectory,
    };

    fn service_with_seeds(
        seeds: &[(&str, f64)],
    ) -> (
        Arc<SessionService<InMemorySessionStore, InMemoryVerifierDirectory>>,
        Arc<InMemoryVerifierDirectory>,
        Arc<InMemorySessionStore>,
    ) {
        let store = Arc::new(InMemorySessionStore::new());
        let directory = Arc::new(InMemoryVerifierDirectory::new());
        for (verifier, amplitude) in seeds {
            directory.seed(verifier, *amplitude);
        }
        let service = Arc::new(SessionService::new(
            Arc::clone(&store),
            Arc::clone(&directory),
        ));
        (service, directory, store)
    }

    fn request(session: &str, verifier: &str, value: f64) -> SubmitVerificationRequest {
        SubmitVerificationRequest {
            verifier_id: verifier.to_string(),
            session_id: session.to_string(),
            verified_value: value,
            response_latency_ms: 85.0,
            verification_data: Some(serde_json::json!({ "deliveryNote": "DN-7731" })),
            comments: Some("quantity cross-checked against goods receipt".to_string()),
        }
    }

    // =========================================================================
    // QUORUM LIFECYCLE
    // =========================================================================

    #[tokio::test]
    async fn test_quorum_progress_then_consensus() {
        let (service, _, _) = service_with_seeds(&[]);

        for i in 0..3 {
            let response = service
                .submit_verification(request("tender-77", &format!("auditor-{}", i), 640.0))
                .await
                .unwrap();
            assert!(!response.quorum_met);

            let err = service.calculate_consensus("tender-77").await.unwrap_err();
            assert!(matches!(
                err,
                GatewayError::Engine(EngineError::QuorumNotMet { .. })
            ));
        }

        let response = service
            .submit_verification(request("tender-77", "auditor-3", 640.0))
            .await
            .unwrap();
        assert!(response.quorum_met);

        let consensus = service.calculate_consensus("tender-77").await.unwrap();
        assert_eq!(consensus.consensus.decision, Decision::Authorize);
        assert_eq!(consensus.verification_count, 4);
    }

    // =========================================================================
    // OUTLIER + REPUTATION FLOW
    // =========================================================================

    #[tokio::test]
    async fn test_defector_penalized_across_runs() {
        let seeds = [
            ("honest-1", 0.9),
            ("honest-2", 0.9),
            ("honest-3", 0.9),
            ("defector", 0.9),
        ];
        let (service, directory, store) = service_with_seeds(&seeds);

        for (verifier, value) in [
            ("honest-1", 100.0),
            ("honest-2", 102.0),
            ("honest-3", 98.0),
            ("defector", 500.0),
        ] {
            service
                .submit_verification(request("tender-9", verifier, value))
                .await
                .unwrap();
        }

        let response = service.calculate_consensus("tender-9").await.unwrap();
        let outlier = response.outlier.expect("defector must be flagged");
        assert_eq!(outlier.outlier_id, "defector");

        // 0.9 - 0.25 penalty vs 0.9 + 0.10 reward (clamped)
        assert!((directory.amplitude("defector").await.unwrap() - 0.65).abs() < 1e-9);
        assert_eq!(directory.amplitude("honest-1").await.unwrap(), 1.0);

        let audit = store
            .latest_consensus("tender-9")
            .await
            .unwrap()
            .expect("audit persisted");
        assert_eq!(audit.outlier.unwrap().outlier_id, "defector");
        assert_eq!(audit.phase_matrix.len(), 6);
    }

    // =========================================================================
    // CONCURRENCY
    // =========================================================================

    #[tokio::test]
    async fn test_parallel_sessions_do_not_interfere() {
        let (service, _, _) = service_with_seeds(&[]);

        let mut handles = Vec::new();
        for session in 0..8 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                let session_id = format!("tender-{}", session);
                for i in 0..4 {
                    service
                        .submit_verification(request(&session_id, &format!("v{}", i), 250.0))
                        .await
                        .unwrap();
                }
                service.calculate_consensus(&session_id).await.unwrap()
            }));
        }

        for handle in handles {
            let response = handle.await.unwrap();
            assert_eq!(response.consensus.decision, Decision::Authorize);
        }
    }

    #[tokio::test]
    async fn test_racing_runs_same_session_both_complete() {
        let (service, _, _) = service_with_seeds(&[]);
        for i in 0..4 {
            service
                .submit_verification(request("tender-1", &format!("v{}", i), 250.0))
                .await
                .unwrap();
        }

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.calculate_consensus("tender-1").await })
            })
            .collect();

        for task in tasks {
            let response = task.await.unwrap().unwrap();
            assert_eq!(response.consensus.decision, Decision::Authorize);
        }
    }

    // =========================================================================
    // METRICS
    // =========================================================================

    #[tokio::test]
    async fn test_consensus_run_moves_counters() {
        let (service, _, _) = service_with_seeds(&[]);
        for i in 0..4 {
            service
                .submit_verification(request("tender-m", &format!("v{}", i), 250.0))
                .await
                .unwrap();
        }

        rth_telemetry::register_metrics().unwrap();
        let before = rth_telemetry::CONSENSUS_RUNS
            .with_label_values(&["authorize"])
            .get();
        service.calculate_consensus("tender-m").await.unwrap();
        let after = rth_telemetry::CONSENSUS_RUNS
            .with_label_values(&["authorize"])
            .get();

        // Other tests in this binary may run consensus concurrently, so
        // only assert the counter moved forward.
        assert!(after >= before + 1.0);
        let text = rth_telemetry::metrics_text().unwrap();
        assert!(text.contains("rth_consensus_runs_total"));
    }

    // =========================================================================
    // HTTP SURFACE
    // =========================================================================

    #[tokio::test]
    async fn test_http_round_trip() {
        use tower::ServiceExt;

        let (service, _, _) = service_with_seeds(&[]);
        let app = router(service);

        for i in 0..4 {
            let body = serde_json::json!({
                "verifierId": format!("v{}", i),
                "sessionId": "tender-http",
                "verifiedValue": 75.0,
            })
            .to_string();
            let response = app
                .clone()
                .oneshot(
                    axum::http::Request::post("/api/v1/verifications")
                        .header("content-type", "application/json")
                        .body(axum::body::Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert!(response.status().is_success());
        }

        let response = app
            .oneshot(
                axum::http::Request::post("/api/v1/sessions/tender-http/consensus")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_success());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["consensus"]["decision"], "AUTHORIZE");
        assert!(json["message"].as_str().unwrap().contains("authorized"));
    }
}
