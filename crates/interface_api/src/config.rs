//! API configuration

use serde::Deserialize;

use domain_intake::document::DEFAULT_MAX_TEXT_CHARS;
use domain_intake::service::DEFAULT_MAX_DOCUMENT_BYTES;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Largest accepted document, in bytes
    pub max_upload_bytes: usize,
    /// Character budget for text handed to the extractor
    pub max_text_chars: usize,
    /// Optional JSON file overriding the triage rule table
    pub rules_path: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            max_upload_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            rules_path: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Unset variables keep their default values.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("max_upload_bytes", defaults.max_upload_bytes as i64)?
            .set_default("max_text_chars", defaults.max_text_chars as i64)?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
