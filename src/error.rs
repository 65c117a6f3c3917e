//! Error types for the craftbox helpers.
//!
//! Every operation returns [`CraftboxError`]. Callers that need to branch on the
//! failure category use [`CraftboxError::kind`] instead of matching message text.

use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse failure category shared by all helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unusable input supplied by the caller, detected before any I/O
    InvalidArgument,
    /// A referenced file or directory does not exist
    NotFound,
    /// Input text does not match the expected pattern or name
    Format,
    /// Any other filesystem failure
    Io,
}

#[derive(Debug, Error)]
pub enum CraftboxError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Malformed {encoding} input in {}", .path.display())]
    Decode { path: PathBuf, encoding: String },

    #[error("Cannot parse {input:?} with pattern {pattern:?}: {source}")]
    DateParse {
        input: String,
        pattern: &'static str,
        #[source]
        source: chrono::ParseError,
    },

    #[error("{input:?} does not match pattern {pattern:?}")]
    DateMismatch { input: String, pattern: &'static str },

    #[error("Not an integer: {input:?}: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid separator pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Malformed properties input at line {line}: {message}")]
    Properties { line: usize, message: String },

    #[error("Failed to walk {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CraftboxError {
    /// Wrap an I/O error raised while touching `path`.
    ///
    /// `NotFound` from the OS becomes [`CraftboxError::NotFound`] so callers can
    /// tell a missing file from other failures.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            CraftboxError::NotFound(path)
        } else {
            CraftboxError::Io { path, source }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CraftboxError::InvalidArgument(_) | CraftboxError::Config(_) => {
                ErrorKind::InvalidArgument
            }
            CraftboxError::NotFound(_) => ErrorKind::NotFound,
            CraftboxError::UnsupportedAlgorithm(_)
            | CraftboxError::UnsupportedEncoding(_)
            | CraftboxError::Decode { .. }
            | CraftboxError::DateParse { .. }
            | CraftboxError::DateMismatch { .. }
            | CraftboxError::InvalidNumber { .. }
            | CraftboxError::InvalidPattern(_)
            | CraftboxError::Properties { .. } => ErrorKind::Format,
            CraftboxError::NotADirectory(_)
            | CraftboxError::Walk { .. }
            | CraftboxError::Io { .. } => ErrorKind::Io,
        }
    }
}

impl From<config::ConfigError> for CraftboxError {
    fn from(err: config::ConfigError) -> Self {
        CraftboxError::Config(err.to_string())
    }
}

pub type Result<T, E = CraftboxError> = std::result::Result<T, E>;
