//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honored for local development.

use std::env;
use std::path::PathBuf;

/// Address that is provisioned as an admin on first login.
pub const DEFAULT_ADMIN_EMAIL: &str = "enzopn10@gmail.com";

/// Default endpoint of the text-generation API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted key-value slots
    pub data_dir: PathBuf,
    /// Email that becomes admin when auto-provisioned
    pub admin_email: String,
    /// Text-generation API key (None = offline)
    pub gemini_api_key: Option<String>,
    /// Text-generation API base URL
    pub gemini_base_url: String,
    /// Model used for biography generation
    pub bio_model: String,
    /// Model used for parsing unstructured dumps
    pub parse_model: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            bio_model: "gemini-3-flash-preview".to_string(),
            parse_model: "gemini-3-pro-preview".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; missing ones fall back to [`Config::default`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let admin_email = env::var("DJPRESS_ADMIN_EMAIL")
            .map(|v| v.trim().to_lowercase())
            .unwrap_or(defaults.admin_email);
        if !admin_email.contains('@') {
            return Err(ConfigError::Invalid {
                name: "DJPRESS_ADMIN_EMAIL",
                reason: format!("'{}' is not an email address", admin_email),
            });
        }

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            data_dir: env::var("DJPRESS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            admin_email,
            gemini_api_key,
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_base_url),
            bio_model: env::var("GEMINI_BIO_MODEL").unwrap_or(defaults.bio_model),
            parse_model: env::var("GEMINI_PARSE_MODEL").unwrap_or(defaults.parse_model),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
