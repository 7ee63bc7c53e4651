//! Upstream targeting subsystem.
//!
//! # Data Flow
//! ```text
//! UpstreamConfig (scheme + host)
//!     → origin.rs (validated UpstreamOrigin, built once at startup)
//!     → target_uri() per request (origin + inbound path + query)
//!     → outbound client
//!
//! Failures:
//!     transport errors → error.rs (RelayError → 502 Bad Gateway)
//! ```
//!
//! # Design Decisions
//! - The origin is parsed and validated once; per-request work is pure
//!   URI assembly
//! - Path and query of the inbound request are preserved byte-for-byte
//! - Upstream 4xx/5xx are responses, not errors; only transport failures
//!   map to an error

pub mod error;
pub mod origin;

pub use error::RelayError;
pub use origin::{OriginError, UpstreamOrigin};
