//! HTTP server setup and the relay handler.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all relay handler
//! - Wire up middleware (tracing, request ID)
//! - Serve on a bound listener with graceful shutdown
//! - Forward each inbound request to the fixed upstream origin

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::request::{request_id_layer, X_REQUEST_ID};
use crate::http::response;
use crate::upstream::{OriginError, RelayError, UpstreamOrigin};

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub origin: UpstreamOrigin,
    pub client: reqwest::Client,
}

/// Errors raised while constructing the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Origin(#[from] OriginError),

    #[error("failed to build outbound client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    origin_display: String,
}

impl HttpServer {
    /// Create a new HTTP server from validated configuration.
    pub fn new(config: &RelayConfig) -> Result<Self, ServerError> {
        let origin = UpstreamOrigin::from_config(&config.upstream)?;
        let origin_display = origin.as_display();

        // Pooling and TLS are the client library's concern.
        let client = reqwest::Client::builder().build()?;

        let state = AppState { origin, client };
        let router = Self::build_router(state);

        Ok(Self {
            router,
            origin_display,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(request_id_layer())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on Ctrl+C or when the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.origin_display,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Relay handler: every inbound request becomes one fetch of the upstream.
///
/// Only the inbound path and query string participate in forwarding. The
/// inbound method, headers, and body are deliberately not propagated; the
/// outbound call is a plain GET of the constructed URL.
async fn relay_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Response, RelayError> {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let target = state.origin.target_uri(request.uri())?;

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        target = %target,
        "Relaying request"
    );

    // Sole suspension point: the handler parks here until the upstream
    // settles. Transport failures surface as 502 via RelayError.
    let upstream = state.client.get(target.to_string()).send().await?;

    tracing::debug!(
        request_id = %request_id,
        status = %upstream.status(),
        "Upstream responded"
    );

    Ok(response::from_upstream(upstream)?.into_response())
}

/// Wait for shutdown: Ctrl+C or an in-process trigger.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            }
            tracing::info!("Shutdown signal received");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown triggered");
        }
    }
}
