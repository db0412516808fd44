//! HTTP routes for the gateway API.

use crate::error::GatewayError;
use crate::ports::{SessionStore, VerifierDirectory};
use crate::service::SessionService;
use crate::types::{ConsensusResponse, SubmitVerificationRequest, SubmitVerificationResponse};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the gateway router over a session service.
pub fn router<S, D>(service: Arc<SessionService<S, D>>) -> Router
where
    S: SessionStore + 'static,
    D: VerifierDirectory + 'static,
{
    Router::new()
        .route("/api/v1/verifications", post(submit_verification::<S, D>))
        .route(
            "/api/v1/sessions/:session_id/consensus",
            post(calculate_consensus::<S, D>),
        )
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

async fn submit_verification<S, D>(
    State(service): State<Arc<SessionService<S, D>>>,
    Json(request): Json<SubmitVerificationRequest>,
) -> Result<Json<SubmitVerificationResponse>, GatewayError>
where
    S: SessionStore,
    D: VerifierDirectory,
{
    service.submit_verification(request).await.map(Json)
}

async fn calculate_consensus<S, D>(
    State(service): State<Arc<SessionService<S, D>>>,
    Path(session_id): Path<String>,
) -> Result<Json<ConsensusResponse>, GatewayError>
where
    S: SessionStore,
    D: VerifierDirectory,
{
    service.calculate_consensus(&session_id).await.map(Json)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
    }))
}

async fn metrics() -> impl IntoResponse {
    match rth_telemetry::metrics_text() {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "metrics rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
