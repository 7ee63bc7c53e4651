//! Fixed-Upstream HTTP Relay
//!
//! A small relay built with Tokio and Axum: every inbound HTTP request is
//! answered by fetching the same path and query from one configured
//! upstream origin and returning that response verbatim.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────┐
//!                    │                  RELAY                     │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ upstream │──▶│outbound│──┼──▶ Upstream
//!                    │  │ server  │   │  target  │   │ client │  │    Origin
//!                    │  └─────────┘   └──────────┘   └────────┘  │
//!   Client Response  │  ┌─────────┐                              │
//!   ◀────────────────┼──│response │◀─────────────────────────────┼─── verbatim
//!                    │  │re-frame │                              │    pass-through
//!                    │  └─────────┘                              │
//!                    │  ┌──────────────────────────────────────┐ │
//!                    │  │  config · observability · lifecycle  │ │
//!                    │  └──────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────┘
//! ```
//!
//! Only the inbound path and query participate in forwarding; the outbound
//! call is a plain GET of the reconstructed URL. Transport failures toward
//! the upstream surface as 502 Bad Gateway.

use std::path::Path;

use tokio::net::TcpListener;
use upstream_relay::config::{self, loader::ConfigError, RelayConfig};
use upstream_relay::http::HttpServer;
use upstream_relay::lifecycle::Shutdown;
use upstream_relay::observability::init_logging;

/// Environment variable naming the optional TOML config file.
const CONFIG_PATH_VAR: &str = "RELAY_CONFIG";

/// Environment variable overriding the upstream host.
const UPSTREAM_HOST_VAR: &str = "RELAY_UPSTREAM_HOST";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => config::load_config(Path::new(&path))?,
        Err(_) => RelayConfig::default(),
    };

    if let Ok(host) = std::env::var(UPSTREAM_HOST_VAR) {
        config.upstream.host = host;
    }
    config::validation::validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_scheme = %config.upstream.scheme,
        upstream_host = %config.upstream.host,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let shutdown = Shutdown::new();

    let server = HttpServer::new(&config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
