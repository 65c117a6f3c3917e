//! Configuration System
//!
//! Layered defaults for the helpers that take tunables (digest algorithm and
//! chunk size, text encoding) plus the logging setup. Sources, lowest to
//! highest precedence: built-in defaults, the global config file, an explicit
//! file when given, then `CRAFTBOX__SECTION__KEY` environment variables.

use crate::digest::DigestAlgorithm;
use crate::error::{CraftboxError, Result};
use crate::files::text::resolve_encoding;
use crate::logging::LoggingConfig;
use config::{Environment, File};
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge;
mod sources;

pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CraftboxConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub digest: DigestConfig,

    #[serde(default)]
    pub text: TextConfig,
}

/// Digest defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Algorithm name, e.g. "SHA-256"
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Read chunk size in bytes
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_algorithm() -> String {
    DigestAlgorithm::Sha256.name().to_string()
}

fn default_buffer_size() -> usize {
    crate::digest::DEFAULT_BUFFER_SIZE
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            buffer_size: default_buffer_size(),
        }
    }
}

/// Text file defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// Encoding label understood by `encoding_rs`, e.g. "UTF-8" or "windows-1252"
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_encoding() -> String {
    "UTF-8".to_string()
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
        }
    }
}

impl TextConfig {
    pub fn resolve_encoding(&self) -> Result<&'static Encoding> {
        resolve_encoding(&self.encoding)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Digest(String),
    Text(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Digest(msg) => write!(f, "Digest: {}", msg),
            ValidationError::Text(msg) => write!(f, "Text: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl CraftboxConfig {
    /// Validate the entire configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.digest.algorithm.parse::<DigestAlgorithm>() {
            errors.push(ValidationError::Digest(e.to_string()));
        }
        if self.digest.buffer_size == 0 {
            errors.push(ValidationError::Digest(
                "buffer_size must be greater than zero".to_string(),
            ));
        }

        if let Err(e) = self.text.resolve_encoding() {
            errors.push(ValidationError::Text(e.to_string()));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Builds a [`CraftboxConfig`] from the layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global config file if present, then environment.
    pub fn load() -> Result<CraftboxConfig> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        Self::finish(builder)
    }

    /// Defaults, then `path` (which must exist), then environment.
    pub fn load_from_file(path: &Path) -> Result<CraftboxConfig> {
        if !path.exists() {
            return Err(CraftboxError::NotFound(path.to_path_buf()));
        }
        let builder = merge::merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<CraftboxConfig> {
        let config = builder
            .add_source(
                Environment::with_prefix("CRAFTBOX")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<CraftboxConfig>()?;

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            CraftboxError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(config)
    }
}
