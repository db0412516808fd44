//! Gateway ports (hexagonal boundaries).

pub mod outbound;

pub use outbound::{SessionStore, VerifierDirectory, DEFAULT_AMPLITUDE};
