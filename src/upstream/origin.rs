//! The fixed upstream origin and target URI construction.

use axum::http::uri::{Authority, PathAndQuery, Scheme};
use axum::http::Uri;
use thiserror::Error;

use crate::config::UpstreamConfig;

/// Errors raised while turning an [`UpstreamConfig`] into an origin.
#[derive(Debug, Error)]
pub enum OriginError {
    /// The configured scheme is not http or https.
    #[error("unsupported upstream scheme {0:?}")]
    Scheme(String),

    /// The configured host is not a valid authority.
    #[error("invalid upstream host {0:?}")]
    Host(String),
}

/// The fixed origin all inbound requests are relayed to.
///
/// Holds a pre-validated scheme and authority so that per-request target
/// construction cannot fail on the origin half of the URI.
#[derive(Debug, Clone)]
pub struct UpstreamOrigin {
    scheme: Scheme,
    authority: Authority,
}

impl UpstreamOrigin {
    /// Build an origin from configuration, validating scheme and host.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, OriginError> {
        let scheme = match config.scheme.as_str() {
            "http" => Scheme::HTTP,
            "https" => Scheme::HTTPS,
            other => return Err(OriginError::Scheme(other.to_string())),
        };

        let authority = config
            .host
            .parse::<Authority>()
            .map_err(|_| OriginError::Host(config.host.clone()))?;

        Ok(Self { scheme, authority })
    }

    /// Derive the outbound target URI for an inbound request URI.
    ///
    /// The inbound path and query string are carried over unaltered; only
    /// scheme and authority are replaced. An inbound URI with no
    /// path-and-query component (authority-form) maps to `/`.
    pub fn target_uri(&self, inbound: &Uri) -> Result<Uri, axum::http::Error> {
        let path_and_query = inbound
            .path_and_query()
            .map(PathAndQuery::as_str)
            .unwrap_or("/");

        Uri::builder()
            .scheme(self.scheme.clone())
            .authority(self.authority.clone())
            .path_and_query(path_and_query)
            .build()
    }

    /// The origin rendered as `scheme://authority`, for logging.
    pub fn as_display(&self) -> String {
        format!("{}://{}", self.scheme, self.authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(scheme: &str, host: &str) -> UpstreamOrigin {
        UpstreamOrigin::from_config(&UpstreamConfig {
            scheme: scheme.into(),
            host: host.into(),
        })
        .unwrap()
    }

    #[test]
    fn path_and_query_preserved() {
        let origin = origin("https", "upstream.example");
        let inbound = Uri::from_static("http://relay.local/api/data?x=1");

        let target = origin.target_uri(&inbound).unwrap();
        assert_eq!(target.to_string(), "https://upstream.example/api/data?x=1");
    }

    #[test]
    fn root_path_without_query() {
        let origin = origin("https", "upstream.example");
        let inbound = Uri::from_static("/");

        let target = origin.target_uri(&inbound).unwrap();
        assert_eq!(target.to_string(), "https://upstream.example/");
    }

    #[test]
    fn origin_form_inbound_uri() {
        let origin = origin("https", "upstream.example");
        let inbound = Uri::from_static("/a/b%20c?k=v&k2=v2");

        let target = origin.target_uri(&inbound).unwrap();
        assert_eq!(
            target.to_string(),
            "https://upstream.example/a/b%20c?k=v&k2=v2"
        );
    }

    #[test]
    fn authority_form_maps_to_root() {
        let origin = origin("https", "upstream.example");
        let inbound = Uri::from_static("upstream.example");

        let target = origin.target_uri(&inbound).unwrap();
        assert_eq!(target.to_string(), "https://upstream.example/");
    }

    #[test]
    fn upstream_port_carried_into_target() {
        let origin = origin("http", "127.0.0.1:9000");
        let inbound = Uri::from_static("/health?deep=true");

        let target = origin.target_uri(&inbound).unwrap();
        assert_eq!(target.to_string(), "http://127.0.0.1:9000/health?deep=true");
    }

    #[test]
    fn rejects_unknown_scheme() {
        let err = UpstreamOrigin::from_config(&UpstreamConfig {
            scheme: "ftp".into(),
            host: "example.com".into(),
        })
        .unwrap_err();
        assert!(matches!(err, OriginError::Scheme(_)));
    }

    #[test]
    fn rejects_malformed_host() {
        let err = UpstreamOrigin::from_config(&UpstreamConfig {
            scheme: "https".into(),
            host: "exa mple.com".into(),
        })
        .unwrap_err();
        assert!(matches!(err, OriginError::Host(_)));
    }
}
