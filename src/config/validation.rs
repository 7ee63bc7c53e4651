//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the bind address and upstream authority
//! - Restrict the upstream scheme to http/https
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::uri::Authority;
use thiserror::Error;

use crate::config::schema::RelayConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("upstream.host must not be empty")]
    EmptyUpstreamHost,

    #[error("upstream.host {0:?} is not a valid authority")]
    InvalidUpstreamHost(String),

    #[error("upstream.host {0:?} must not carry userinfo")]
    UpstreamHostHasUserinfo(String),

    #[error("upstream.scheme {0:?} is not supported (expected \"http\" or \"https\")")]
    InvalidScheme(String),

    #[error("observability.log_level {0:?} is not a known level")]
    InvalidLogLevel(String),
}

/// Check a configuration for semantic errors, collecting every problem.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let host = &config.upstream.host;
    if host.is_empty() {
        errors.push(ValidationError::EmptyUpstreamHost);
    } else {
        match host.parse::<Authority>() {
            Ok(authority) => {
                if authority.as_str().contains('@') {
                    errors.push(ValidationError::UpstreamHostHasUserinfo(host.clone()));
                }
            }
            Err(_) => errors.push(ValidationError::InvalidUpstreamHost(host.clone())),
        }
    }

    let scheme = config.upstream.scheme.as_str();
    if scheme != "http" && scheme != "https" {
        errors.push(ValidationError::InvalidScheme(scheme.to_string()));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
