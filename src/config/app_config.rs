// Service configuration
// TOML file with per-field defaults, then environment overrides

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::logging::LogConfig;
use crate::{Error, Result};

/// Development fallback used when `SESSION_SECRET` is unset
pub const DEV_SESSION_SECRET: &str = "default_secret_key_for_development";

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "LANGDETECT_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Session signing key
    #[serde(default = "default_session_secret")]
    pub session_secret: String,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Detection tuning
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_secret: default_session_secret(),
            server: ServerConfig::default(),
            detection: DetectionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `LANGDETECT_CONFIG` if set, then apply environment overrides
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::load(path)?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `SESSION_SECRET`, `HOST` and `PORT` from the given lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup("SESSION_SECRET").filter(|s| !s.is_empty()) {
            self.session_secret = secret;
        }
        if let Some(host) = lookup("HOST").filter(|s| !s.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT").filter(|s| !s.is_empty()) {
            self.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("invalid PORT value: {}", port)))?;
        }
        Ok(())
    }

    /// Whether the session key is still the development fallback
    pub fn uses_dev_secret(&self) -> bool {
        self.session_secret == DEV_SESSION_SECRET
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Convert logging config to LogConfig
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            level: self.logging.level.clone(),
            json_format: self.logging.json_format,
        }
    }
}

fn default_session_secret() -> String {
    DEV_SESSION_SECRET.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub enable_cors: bool,
    /// Directory served under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: true,
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5001
}
fn default_static_dir() -> String {
    "static".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectionConfig {
    /// Minimum trimmed character count accepted by `/detect`
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,
    /// Ranked alternatives reported by the pre-trained strategy
    #[serde(default = "default_top_five")]
    pub max_alternatives: usize,
    /// Most frequent bigrams/trigrams reported by the traditional strategy
    #[serde(default = "default_top_five")]
    pub top_ngrams: usize,
    /// Load every lingua model at startup instead of on first use
    #[serde(default)]
    pub preload_models: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_text_length: default_min_text_length(),
            max_alternatives: 5,
            top_ngrams: 5,
            preload_models: false,
        }
    }
}

fn default_min_text_length() -> usize {
    3
}
fn default_top_five() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

fn default_log_level() -> String {
    "lang_detect_service=debug,tower_http=info".to_string()
}
fn default_true() -> bool {
    true
}
