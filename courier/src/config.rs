use std::path::Path;

use courier_errors::error_type::is_valid_namespace;
use serde::Deserialize;

/// Configuration file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "courier.toml";

/// Top-level Courier configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Error construction defaults
    #[serde(default)]
    pub errors: ErrorsConfig,
}

/// Log output settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `courier_errors=debug`
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Defaults applied when building errors from the command line
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Namespace used to qualify bare error names
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_namespace() -> String {
    "Default".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails, or
    /// validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Load `courier.toml` from the working directory, or defaults when absent
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded
    pub fn load_default() -> anyhow::Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);

        if path.exists() { Self::load(path) } else { Ok(Self::default()) }
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if TOML parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the log filter or namespace is invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        tracing_subscriber::EnvFilter::try_new(&self.logging.filter)
            .map_err(|e| anyhow::anyhow!("invalid logging.filter '{}': {e}", self.logging.filter))?;

        if !is_valid_namespace(&self.errors.namespace) {
            anyhow::bail!(
                "errors.namespace must be UpperCamelCase (e.g. `MyApplication`), got '{}'",
                self.errors.namespace
            );
        }

        Ok(())
    }
}
