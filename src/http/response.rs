//! Upstream response re-framing.
//!
//! # Responsibilities
//! - Convert the outbound client's response into a client-facing response
//! - Stream the body without buffering it in memory
//! - Strip hop-by-hop headers that describe the dead upstream connection
//!
//! # Design Decisions
//! - Status, end-to-end headers, and body pass through untouched
//! - Hop-by-hop headers (RFC 9110 §7.6.1) are removed: the client
//!   connection is framed by this server, not by the upstream, and the
//!   client library has already decoded any transfer coding

use axum::body::Body;
use axum::http::Response;

/// Headers that apply per-connection and must not be relayed.
const HOP_BY_HOP_HEADERS: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Re-frame an upstream response for the inbound client.
pub fn from_upstream(upstream: reqwest::Response) -> Result<Response<Body>, axum::http::Error> {
    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    for name in HOP_BY_HOP_HEADERS {
        headers.remove(name);
    }

    let mut builder = Response::builder().status(status);
    if let Some(target) = builder.headers_mut() {
        *target = headers;
    }

    builder.body(Body::from_stream(upstream.bytes_stream()))
}
