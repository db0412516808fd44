//! # rth-gateway
//!
//! JSON-over-HTTP interface for the RTH consensus engine.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     RTH GATEWAY                           │
//! ├──────────────────────────────────────────────────────────┤
//! │  POST /api/v1/verifications                               │
//! │  POST /api/v1/sessions/:session_id/consensus              │
//! │  GET  /health   GET /metrics                              │
//! │                        │                                  │
//! │  ┌─────────────────────┴──────────────────────┐          │
//! │  │             SessionService                  │          │
//! │  │  quorum gate → phase matrix → consensus    │          │
//! │  │  → outlier → reputation update → audit     │          │
//! │  └──────────┬──────────────────────┬──────────┘          │
//! │             │                      │                      │
//! │       SessionStore          VerifierDirectory             │
//! │       (port)                (port)                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The gateway owns every precondition the pure engine refuses to
//! re-check: the tetrahedral quorum, the degenerate zero-amplitude case,
//! and serialization of racing consensus requests for the same session.

pub mod adapters;
pub mod error;
pub mod ports;
pub mod routes;
pub mod service;
pub mod types;

// Re-exports for public API
pub use adapters::{InMemorySessionStore, InMemoryVerifierDirectory};
pub use error::{ApiError, GatewayError, GatewayResult};
pub use ports::{SessionStore, VerifierDirectory};
pub use routes::router;
pub use service::SessionService;
pub use types::{
    ConsensusAudit, ConsensusResponse, SubmissionRecord, SubmitVerificationRequest,
    SubmitVerificationResponse,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
