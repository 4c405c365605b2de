//! Configuration management
//!
//! Defaults, then an optional TOML file, then `RESULTKIT_*` environment
//! variables (`__` separates nested keys, e.g. `RESULTKIT_BENCH__CHAIN_ITERATIONS`).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "RESULTKIT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub bench: BenchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub basic_iterations: u64,
    pub chain_iterations: u64,
    pub compare_iterations: u64,
    /// Print the reports as JSON on stdout
    pub json_report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            bench: BenchConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            basic_iterations: 1_000_000,
            chain_iterations: 100_000,
            compare_iterations: 10_000,
            json_report: false,
        }
    }
}

impl Config {
    /// Load the layered configuration. A missing `path` means defaults plus environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path).format(::config::FileFormat::Toml),
            );
        }

        let config: Config = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let iterations = [
            ("basic_iterations", self.bench.basic_iterations),
            ("chain_iterations", self.bench.chain_iterations),
            ("compare_iterations", self.bench.compare_iterations),
        ];
        for (name, value) in iterations {
            if value == 0 {
                return Err(ConfigError::Invalid(format!(
                    "bench.{} must be greater than zero",
                    name
                )));
            }
        }

        if self.log.level.trim().is_empty() {
            return Err(ConfigError::Invalid("log.level must not be empty".to_string()));
        }

        Ok(())
    }
}
