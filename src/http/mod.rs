//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, relay handler)
//!     → request.rs (tag with request ID for log correlation)
//!     → [upstream layer builds target URI]
//!     → outbound client fetches the target
//!     → response.rs (re-frame upstream response for the client)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id_layer, X_REQUEST_ID};
pub use server::HttpServer;
