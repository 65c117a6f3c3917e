//! Recursive file listing

use crate::error::{CraftboxError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Listing configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Descend into symlinked directories (default: false)
    pub follow_symlinks: bool,
    /// Maximum depth below the root (None = unlimited)
    pub max_depth: Option<usize>,
    /// Keep only files whose name ends with this suffix, e.g. ".txt"
    pub extension: Option<String>,
}

/// Collects the regular files below a root directory
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: impl Into<PathBuf>, config: WalkerConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Walk the tree and collect every regular file.
    ///
    /// Symlinks count when their target is a regular file; broken or looping
    /// links are skipped. The result is sorted by the path's string form. The
    /// first traversal error aborts the walk and nothing is returned.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let root_meta = fs::metadata(&self.root).map_err(|e| CraftboxError::io(&self.root, e))?;
        if !root_meta.is_dir() {
            return Err(CraftboxError::NotADirectory(self.root.clone()));
        }

        debug!(root = %self.root.display(), "Listing files");

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| walk_error(&self.root, e))?;

            if !is_regular_file(&entry) {
                continue;
            }
            if !self.matches_extension(&entry) {
                continue;
            }
            files.push(entry.into_path());
        }

        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

        debug!(root = %self.root.display(), count = files.len(), "Listed files");
        Ok(files)
    }

    fn matches_extension(&self, entry: &DirEntry) -> bool {
        match &self.config.extension {
            Some(extension) => entry.file_name().to_string_lossy().ends_with(extension.as_str()),
            None => true,
        }
    }
}

/// Symlinks count when their target resolves to a regular file. A link that
/// cannot be resolved (dangling, self-referential, cyclic) is skipped.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if !file_type.is_symlink() {
        return false;
    }
    match fs::metadata(entry.path()) {
        Ok(target) => target.is_file(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %entry.path().display(), "Skipping broken symlink");
            false
        }
        Err(e) => {
            warn!(path = %entry.path().display(), error = %e, "Skipping unresolvable symlink");
            false
        }
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> CraftboxError {
    let path = err.path().unwrap_or(root).to_path_buf();
    if err.loop_ancestor().is_some() {
        return CraftboxError::Walk {
            path,
            message: err.to_string(),
        };
    }
    match err.into_io_error() {
        Some(io_err) => CraftboxError::io(path, io_err),
        None => CraftboxError::Walk {
            path,
            message: "traversal failed".to_string(),
        },
    }
}

/// Every regular file below `root`, sorted by path.
pub fn list_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    Walker::new(root.as_ref()).walk()
}

/// Like [`list_files`], keeping only names ending with `extension`.
pub fn list_files_by_extension(root: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let config = WalkerConfig {
        extension: Some(extension.to_string()),
        ..WalkerConfig::default()
    };
    Walker::with_config(root.as_ref(), config).walk()
}
