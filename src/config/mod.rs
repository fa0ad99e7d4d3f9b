//! Configuration module for Mauka Trie.
//!
//! Settings are layered from the built-in defaults, an optional file (TOML,
//! YAML, JSON) and environment variables, then validated before use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::data_structures::niihau_trie::NiihauTrieConfig;
use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

pub mod loader;
pub mod trie;

pub use loader::LoaderConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "MAUKA_TRIE";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Mauka Trie.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MaukaTrieConfig {
    /// Trie construction settings
    pub trie: NiihauTrieConfig,

    /// Vocabulary file and query pattern settings
    pub loader: LoaderConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for MaukaTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.loader.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is unset
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::InvalidSection {
                section: "log",
                message: format!("Invalid log level: {}", self.level),
            }),
        }
    }
}

/// Configuration loader for Mauka Trie.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(MaukaTrieConfig)` if the configuration was loaded and is valid
    /// * `Err(ConfigError)` if a source is missing, malformed or fails validation
    pub fn load(&self) -> ConfigResult<MaukaTrieConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&MaukaTrieConfig::default()).map_err(|e| ConfigError::ParseError {
                origin: "defaults".to_string(),
                message: e.to_string(),
            })?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
            builder = builder.add_source(File::from(path.as_path()).format(file_format(path)?));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::FileParse { uri, cause } => ConfigError::ParseError {
                origin: uri.unwrap_or_else(|| self.origin()),
                message: cause.to_string(),
            },
            other => ConfigError::ParseError {
                origin: self.origin(),
                message: other.to_string(),
            },
        })?;

        let loaded: MaukaTrieConfig = config.try_deserialize().map_err(|e| ConfigError::ParseError {
            origin: "merged sources".to_string(),
            message: e.to_string(),
        })?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// File path if one was given, otherwise the environment layer.
    fn origin(&self) -> String {
        match &self.config_path {
            Some(path) => path.display().to_string(),
            None => format!("{}__* environment", self.env_prefix),
        }
    }
}

/// File format chosen by extension.
fn file_format(path: &Path) -> ConfigResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(FileFormat::Toml),
        Some("json") => Ok(FileFormat::Json),
        Some("yaml" | "yml") => Ok(FileFormat::Yaml),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Process-wide configuration, set once at startup.
static GLOBAL_CONFIG: OnceCell<Arc<MaukaTrieConfig>> = OnceCell::new();

/// Initialize the global configuration.
///
/// Later calls are ignored with a warning.
pub fn init_global_config(config: MaukaTrieConfig) {
    if GLOBAL_CONFIG.set(Arc::new(config)).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration, or the defaults if none was installed.
pub fn global_config() -> Arc<MaukaTrieConfig> {
    GLOBAL_CONFIG
        .get_or_init(|| Arc::new(MaukaTrieConfig::default()))
        .clone()
}
