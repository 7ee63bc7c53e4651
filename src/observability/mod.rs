//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Request ID flows through every log line of one invocation
//! - No metrics endpoint; logging is the only output

pub mod logging;

pub use logging::init_logging;
