//! File name helpers

use crate::error::{CraftboxError, Result};
use std::path::Path;

/// Strips everything from the last `.` on. Names without a dot are returned as-is.
pub fn name_without_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[..i],
        None => name,
    }
}

/// File name of `path` without its extension.
pub fn file_name_without_extension(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let name = path.file_name().ok_or_else(|| {
        CraftboxError::InvalidArgument(format!("{} has no file name", path.display()))
    })?;
    Ok(name_without_extension(&name.to_string_lossy()).to_string())
}
