//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources added to the builder override these values key by key.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("digest.algorithm", "SHA-256")?
        .set_default("digest.buffer_size", crate::digest::DEFAULT_BUFFER_SIZE as i64)?
        .set_default("text.encoding", "UTF-8")?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")
}
