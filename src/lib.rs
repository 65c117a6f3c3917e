//! Craftbox: small, stateless helpers
//!
//! Free functions grouped by topic: recursive file listing, streamed file
//! digests, small text and properties files, directory management, date
//! formatting, string splitting, and console printing. Nothing is cached and
//! no state outlives a call.

pub mod collections;
pub mod config;
pub mod datetime;
pub mod digest;
pub mod error;
pub mod files;
pub mod logging;
pub mod print;
pub mod strings;
pub mod validation;

pub use digest::{calculate_digest, DigestAlgorithm, Digester};
pub use error::{CraftboxError, ErrorKind, Result};
