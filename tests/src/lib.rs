//! # RTH-Engine Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── engine_properties.rs   # Cross-checked numeric contracts
//!     └── gateway_flows.rs       # End-to-end submit/consensus flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p rth-tests
//!
//! # By category
//! cargo test -p rth-tests integration::engine_properties::
//! cargo test -p rth-tests integration::gateway_flows::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
