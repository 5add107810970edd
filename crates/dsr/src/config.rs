//! Application configuration
//!
//! Configuration sources are merged defaults-first: `AppConfig::default()`,
//! then a TOML file, then `DSR_*` environment variables. Nested keys use a
//! double underscore in the environment (`DSR_LOGGING__LEVEL`,
//! `DSR_BANDS__NONE_ABOVE`); single underscores stay part of the key name
//! (`DSR_MATCH_THRESHOLD`).

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use dsr_application::ImpactBands;
use dsr_domain::constants::DEFAULT_MATCH_THRESHOLD;
use dsr_domain::error::{Error, Result};
use dsr_domain::ports::providers::ScorerKind;

/// Environment variable prefix
pub const CONFIG_ENV_PREFIX: &str = "DSR";

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "dsr.toml";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scoring strategy for the run
    pub scorer: ScorerKind,

    /// Similarity threshold above which an OLD/NEW pair is accepted
    pub match_threshold: f32,

    /// Impact band breakpoints
    pub bands: ImpactBands,

    /// Embedding model name for the semantic scorer (provider default
    /// when unset)
    pub embedding_model: Option<String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scorer: ScorerKind::Lexical,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            bands: ImpactBands::default(),
            embedding_model: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reject invalid values before any work begins.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(Error::invalid_configuration(format!(
                "match_threshold must be within [0, 1], got {}",
                self.match_threshold
            )));
        }
        self.bands.validate()
    }
}

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with the `DSR_` prefix
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let config_path = self
            .config_path
            .clone()
            .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_FILENAME)));
        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                tracing::info!("Configuration loaded from {}", path.display());
            } else if self.config_path.is_some() {
                return Err(Error::config(format!(
                    "configuration file not found: {}",
                    path.display()
                )));
            }
        }

        figment = figment.merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .map_err(|e| Error::config_with_source("Failed to extract configuration", e))?;

        app_config.validate()?;
        Ok(app_config)
    }
}
