//! TAC client configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use clearance_types::TrackKind;
use clearance_utils::LogFormat;

use crate::endpoint::EndpointProvider;
use crate::response::ResponseValidator;
use crate::TacError;

/// Configuration for talking to the verification authority.
///
/// Can be loaded from a TOML file via [`TacConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TacConfig {
    /// Endpoint for international (DCC) tracks.
    #[serde(default = "default_dcc_endpoint")]
    pub dcc_endpoint: String,

    /// Endpoint for domestic 2D-DOC tracks.
    #[serde(default = "default_two_d_doc_endpoint")]
    pub two_d_doc_endpoint: String,

    /// Leading identifier that marks a track as DCC (compared ignoring ASCII case).
    #[serde(default = "default_dcc_track_prefix")]
    pub dcc_track_prefix: String,

    /// Status string the rule engine reports for a valid certificate.
    #[serde(default = "default_valid_status")]
    pub valid_status: String,

    /// Compare `valid_status` ignoring ASCII case.
    #[serde(default = "default_true")]
    pub case_insensitive_status: bool,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Outbound proxy URL for all TAC traffic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,

    /// Value of the `Authorization` header injected by the HTTP transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_header: Option<String>,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_dcc_endpoint() -> String {
    "https://tac.example.invalid/api/v2/dcc".to_string()
}

fn default_two_d_doc_endpoint() -> String {
    "https://tac.example.invalid/api/v2/2ddoc".to_string()
}

fn default_dcc_track_prefix() -> String {
    "HC1:".to_string()
}

fn default_valid_status() -> String {
    "VALID".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl TacConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, TacError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TacError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, TacError> {
        toml::from_str(s).map_err(|e| TacError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, TacError> {
        toml::to_string_pretty(self).map_err(|e| TacError::Config(e.to_string()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Response validator matching this configuration's status policy.
    pub fn validator(&self) -> ResponseValidator {
        ResponseValidator::new(self.valid_status.clone(), self.case_insensitive_status)
    }
}

impl Default for TacConfig {
    fn default() -> Self {
        Self {
            dcc_endpoint: default_dcc_endpoint(),
            two_d_doc_endpoint: default_two_d_doc_endpoint(),
            dcc_track_prefix: default_dcc_track_prefix(),
            valid_status: default_valid_status(),
            case_insensitive_status: default_true(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            proxy: None,
            auth_header: None,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl EndpointProvider for TacConfig {
    fn endpoint(&self, kind: TrackKind) -> Option<String> {
        let url = match kind {
            TrackKind::Dcc => &self.dcc_endpoint,
            TrackKind::TwoDDoc => &self.two_d_doc_endpoint,
        };
        (!url.trim().is_empty()).then(|| url.clone())
    }

    fn dcc_track_prefix(&self) -> String {
        self.dcc_track_prefix.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = TacConfig::default();
        let toml_str = config.to_toml_string().expect("serializable");
        let parsed = TacConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = TacConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.dcc_track_prefix, "HC1:");
        assert_eq!(config.valid_status, "VALID");
        assert!(config.case_insensitive_status);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            dcc_endpoint = "https://tac.test/dcc"
            case_insensitive_status = false
            proxy = "http://proxy.internal:3128"
            log_format = "json"
        "#;
        let config = TacConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.dcc_endpoint, "https://tac.test/dcc");
        assert!(!config.case_insensitive_status);
        assert_eq!(config.proxy.as_deref(), Some("http://proxy.internal:3128"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.two_d_doc_endpoint, default_two_d_doc_endpoint());
    }

    #[test]
    fn missing_file_returns_config_error() {
        let err = TacConfig::from_toml_file("/nonexistent/tac.toml").unwrap_err();
        assert!(matches!(err, TacError::Config(_)));
    }

    #[test]
    fn blank_endpoint_is_not_provided() {
        let config = TacConfig {
            two_d_doc_endpoint: "  ".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint(TrackKind::TwoDDoc), None);
        assert!(config.endpoint(TrackKind::Dcc).is_some());
    }
}
