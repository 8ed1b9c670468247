//! Climate stress and scenario analysis for infrastructure digital twins.
//!
//! The [`engine`] module holds the deterministic assessment pipeline; the
//! remaining modules carry the process-level concerns shared by the service
//! binaries.

pub mod config;
pub mod engine;
pub mod error;
pub mod telemetry;
