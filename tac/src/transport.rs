//! HTTP transport for submitting tracks to the authority.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

use crate::config::TacConfig;
use crate::error::TacError;
use crate::response::TacResponse;

/// Default timeout for verification requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends a track to a resolved TAC URL and decodes the answer.
///
/// `Ok(None)` means the authority answered successfully with no body.
#[async_trait]
pub trait TacTransport: Send + Sync {
    async fn post_track(&self, url: &Url, track: &str) -> Result<Option<TacResponse>, TacError>;
}

/// `reqwest`-backed transport.
///
/// Sends `POST {url}` with `Accept: application/json` and the raw track as a
/// `text/plain` body. Proxy and authorization are applied here, never by the
/// verifier.
#[derive(Clone)]
pub struct HttpTransport {
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with default timeouts and no proxy.
    pub fn new() -> Result<Self, TacError> {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| TacError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { http_client })
    }

    /// Create a transport from configuration (timeouts, proxy, auth header).
    pub fn from_config(config: &TacConfig) -> Result<Self, TacError> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout());

        if let Some(proxy_url) = config.proxy.as_deref() {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| TacError::Config(format!("invalid proxy {proxy_url:?}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        if let Some(auth) = config.auth_header.as_deref() {
            let mut value = HeaderValue::from_str(auth)
                .map_err(|e| TacError::Config(format!("invalid auth header: {e}")))?;
            value.set_sensitive(true);
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        let http_client = builder
            .build()
            .map_err(|e| TacError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl TacTransport for HttpTransport {
    async fn post_track(&self, url: &Url, track: &str) -> Result<Option<TacResponse>, TacError> {
        let response = self
            .http_client
            .post(url.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(track.to_owned())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TacError::Unreachable(format!("request timed out: {e}"))
                } else if e.is_connect() {
                    TacError::Unreachable(format!("connection failed: {e}"))
                } else {
                    TacError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TacError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TacError::RequestFailed(format!("failed to read response body: {e}")))?;
        decode_body(&body)
    }
}

/// Decode a success body. Empty and `null` bodies decode to `None`.
pub fn decode_body(body: &[u8]) -> Result<Option<TacResponse>, TacError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        debug!("TAC:: empty response body");
        return Ok(None);
    }
    serde_json::from_slice::<Option<TacResponse>>(body).map_err(|e| {
        TacError::InvalidResponse(format!("failed to parse verification response: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new();
        assert!(transport.is_ok());
    }

    #[test]
    fn test_transport_from_config_with_proxy_and_auth() {
        let config = TacConfig {
            proxy: Some("http://proxy.internal:3128".into()),
            auth_header: Some("Bearer abc".into()),
            ..Default::default()
        };
        assert!(HttpTransport::from_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_auth_header_is_config_error() {
        let config = TacConfig {
            auth_header: Some("Bearer\nabc".into()),
            ..Default::default()
        };
        assert!(matches!(
            HttpTransport::from_config(&config),
            Err(TacError::Config(_))
        ));
    }

    #[test]
    fn test_empty_and_null_bodies_decode_to_none() {
        assert_eq!(decode_body(b"").unwrap(), None);
        assert_eq!(decode_body(b" \n").unwrap(), None);
        assert_eq!(decode_body(b"null").unwrap(), None);
    }

    #[test]
    fn test_non_json_body_is_invalid_response() {
        assert!(matches!(
            decode_body(b"<html>oops</html>"),
            Err(TacError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_partial_body_decodes() {
        let resp = decode_body(br#"{"data":{"dynamic":[]}}"#).unwrap().unwrap();
        assert_eq!(resp.first_record(), None);
    }
}
