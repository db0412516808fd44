//! Gateway error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rth_core::EngineError;
use serde::{Deserialize, Serialize};

/// Gateway-side failures.
///
/// Engine precondition violations (quorum, degenerate amplitude) are
/// client rejections; port failures are internal errors.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Session store error: {0}")]
    Store(String),

    #[error("Verifier directory error: {0}")]
    Directory(String),
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Wire-format error envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl From<&GatewayError> for ApiError {
    fn from(err: &GatewayError) -> Self {
        match err {
            GatewayError::Engine(EngineError::QuorumNotMet { got, required }) => ApiError {
                code: 4001,
                message: err.to_string(),
                data: Some(serde_json::json!({ "current": got, "required": required })),
            },
            GatewayError::Engine(_) => ApiError {
                code: 4002,
                message: err.to_string(),
                data: None,
            },
            GatewayError::Store(_) | GatewayError::Directory(_) => ApiError {
                code: 5001,
                message: err.to_string(),
                data: None,
            },
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Engine(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let envelope = ApiError::from(&self);
        (status, Json(serde_json::json!({ "error": envelope }))).into_response()
    }
}
