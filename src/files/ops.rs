//! File and directory operations: copy, create, temp directories, delete

use crate::error::{CraftboxError, Result};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Copy `src` to `dst` unless `dst` already exists.
///
/// Returns `true` when a copy was made. The source must be a regular file;
/// a failed copy leaves no destination behind.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<bool> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    if dst.exists() {
        debug!(dst = %dst.display(), "Destination exists; copy skipped");
        return Ok(false);
    }

    let mut input = File::open(src).map_err(|e| CraftboxError::io(src, e))?;
    let src_meta = input.metadata().map_err(|e| CraftboxError::io(src, e))?;
    if !src_meta.is_file() {
        return Err(CraftboxError::io(
            src,
            io::Error::new(io::ErrorKind::InvalidInput, "source is not a regular file"),
        ));
    }

    let mut output = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dst)
        .map_err(|e| CraftboxError::io(dst, e))?;
    let bytes = match io::copy(&mut input, &mut output) {
        Ok(bytes) => bytes,
        Err(e) => {
            drop(output);
            // never leave a partial destination
            if let Err(cleanup) = fs::remove_file(dst) {
                warn!(dst = %dst.display(), error = %cleanup, "Failed to remove partial copy");
            }
            return Err(CraftboxError::io(dst, e));
        }
    };

    debug!(src = %src.display(), dst = %dst.display(), bytes, "Copied file");
    Ok(true)
}

/// Create `dir` if it is absent. The parent must already exist.
///
/// An existing directory is left alone; an existing non-directory is an error.
pub fn create_directory(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => {
            return Err(CraftboxError::io(
                dir,
                io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
            ))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(CraftboxError::io(dir, e)),
    }

    match fs::create_dir(dir) {
        Ok(()) => {
            debug!(dir = %dir.display(), "Created directory");
            Ok(())
        }
        // lost a race with another creator
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(CraftboxError::io(dir, e)),
    }
}

/// Create a new, empty, uniquely named directory inside `parent` whose name
/// starts with `prefix`. The directory is not removed automatically.
pub fn create_temp_directory(parent: impl AsRef<Path>, prefix: &str) -> Result<PathBuf> {
    let parent = parent.as_ref();
    let temp_dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(parent)
        .map_err(|e| CraftboxError::io(parent, e))?;
    let path = temp_dir.keep();
    debug!(path = %path.display(), "Created temporary directory");
    Ok(path)
}

/// Delete a file, a symlink, or an empty directory.
pub fn delete_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let meta = fs::symlink_metadata(path).map_err(|e| CraftboxError::io(path, e))?;
    let removed = if meta.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| CraftboxError::io(path, e))?;
    debug!(path = %path.display(), "Deleted");
    Ok(())
}

/// Delete each path in order, stopping at the first failure.
pub fn delete_files<I, P>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().try_for_each(|path| delete_file(path))
}

/// Delete a directory and everything below it.
pub fn delete_dir_all(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    fs::remove_dir_all(dir).map_err(|e| CraftboxError::io(dir, e))?;
    debug!(dir = %dir.display(), "Deleted directory tree");
    Ok(())
}

/// True if `path` exists (following symlinks).
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}
