//! Relay error definitions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur while relaying a request.
///
/// Upstream responses with error statuses (4xx/5xx) are not represented
/// here; they pass through to the client as-is. These variants cover the
/// cases where no upstream response exists at all.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The outbound call failed below HTTP: DNS, connect, TLS, or timeout.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// URI or response assembly failed.
    #[error("failed to construct http message: {0}")]
    Http(#[from] axum::http::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            RelayError::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %self, status = %status, "Relay failed");
        (status, status.canonical_reason().unwrap_or("error")).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_maps_to_internal_error() {
        let err = axum::http::Uri::builder()
            .scheme("https")
            .build()
            .expect_err("partial uri must not build");

        let response = RelayError::Http(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
